//! Utility helpers shared across page components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (storage, timers, observers,
//! file pickers) from component logic. Browser-only modules compile with the
//! `csr` feature; the rest are plain Rust and unit-tested natively.

#[cfg(feature = "csr")]
pub mod dom;
pub mod effects;
#[cfg(feature = "csr")]
pub mod file_picker;
pub mod location;
pub mod storage;
pub mod theme;
pub mod timer;
#[cfg(feature = "csr")]
pub mod visibility;
