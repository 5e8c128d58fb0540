//! Page-level route components.

pub mod resume;
