//! Page component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the résumé chrome and interaction surfaces while
//! reading and writing the shared `PageContext` signals.

pub mod contact_form;
pub mod nav_bar;
pub mod page_effects;
pub mod page_section;
pub mod profile_photo;
pub mod project_modal;
pub mod projects_section;
pub mod skills_section;
pub mod theme_toggle;
