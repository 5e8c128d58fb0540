//! Page state modules and the shared context handed to every component.
//!
//! DESIGN
//! ======
//! State is split by behavior (`theme`, `navigation`, `skills`, `modal`,
//! `contact`, `photo`) as plain Rust types. `PageContext` wraps each in its
//! own signal and is built once in `App`; each handler writes only the signal
//! of the behavior it owns.

pub mod catalog;
pub mod contact;
pub mod modal;
pub mod navigation;
pub mod photo;
pub mod skills;
pub mod theme;

use leptos::prelude::*;

use crate::config::PageConfig;
use crate::content::Resume;
use contact::ContactFormState;
use modal::ModalState;
use navigation::NavState;
use photo::PhotoState;
use skills::SkillsState;
use theme::Theme;

#[derive(Clone, Copy)]
pub struct PageContext {
    pub config: StoredValue<PageConfig>,
    pub theme: RwSignal<Theme>,
    pub nav: RwSignal<NavState>,
    pub skills: RwSignal<SkillsState>,
    pub modal: RwSignal<ModalState>,
    pub contact: RwSignal<ContactFormState>,
    pub photo: RwSignal<PhotoState>,
}

impl PageContext {
    pub fn new(config: PageConfig, resume: &Resume, theme: Theme) -> Self {
        let submit_label = resume.contact.map_or("Envoyer", |contact| contact.submit_label);
        Self {
            config: StoredValue::new(config),
            theme: RwSignal::new(theme),
            nav: RwSignal::new(NavState::new(resume.nav_links(), resume.section_ids())),
            skills: RwSignal::new(SkillsState::new(resume.skill_meters())),
            modal: RwSignal::new(ModalState::default()),
            contact: RwSignal::new(ContactFormState::new(submit_label)),
            photo: RwSignal::new(PhotoState::new(resume.profile.photo_src)),
        }
    }
}
