//! Tab-style section navigation.
//!
//! DESIGN
//! ======
//! Links and sections are stored as ordered lists and the active pair is kept
//! as one `(link, section)` tuple, so "exactly one active link, exactly one
//! active section, and they correspond" holds by construction.
//!
//! A link whose fragment names no section is ignored entirely: the previous
//! pair stays active instead of leaving the page with a highlighted link and
//! no visible section.

#[cfg(test)]
#[path = "navigation_test.rs"]
mod navigation_test;

/// One navigation anchor, e.g. `{ label: "Compétences", href: "#competences" }`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: String,
    pub href: String,
}

impl NavLink {
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self { label: label.into(), href: href.into() }
    }

    /// Section identifier this link points at.
    #[must_use]
    pub fn target(&self) -> &str {
        fragment_target(&self.href)
    }
}

/// Result of activating a link.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavOutcome {
    /// The link's section is now the active one (it may already have been).
    Activated { section_id: String },
    /// The link index or fragment matched nothing; state is untouched.
    UnknownTarget,
}

/// Which link and section are active.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    links: Vec<NavLink>,
    sections: Vec<String>,
    active: Option<(usize, usize)>,
}

/// Strip the leading `#` of an anchor target. Full URLs keep only their
/// fragment part.
#[must_use]
pub fn fragment_target(href: &str) -> &str {
    match href.rfind('#') {
        Some(pos) => &href[pos + 1..],
        None => href,
    }
}

impl NavState {
    /// Build navigation state and activate the first link that resolves.
    pub fn new(links: Vec<NavLink>, sections: Vec<String>) -> Self {
        let mut state = Self { links, sections, active: None };
        state.active = (0..state.links.len()).find_map(|link| state.resolve(link).map(|section| (link, section)));
        state
    }

    fn resolve(&self, link: usize) -> Option<usize> {
        let target = self.links.get(link)?.target();
        self.sections.iter().position(|id| id == target)
    }

    /// Activate the link at `link`.
    pub fn activate(&mut self, link: usize) -> NavOutcome {
        let Some(section) = self.resolve(link) else {
            return NavOutcome::UnknownTarget;
        };
        self.active = Some((link, section));
        NavOutcome::Activated { section_id: self.sections[section].clone() }
    }

    /// Activate the first link whose target equals `fragment` (with or
    /// without a leading `#`). Used for deep links on load.
    pub fn activate_fragment(&mut self, fragment: &str) -> NavOutcome {
        let target = fragment_target(fragment);
        if target.is_empty() {
            return NavOutcome::UnknownTarget;
        }
        match self.links.iter().position(|link| link.target() == target) {
            Some(link) => self.activate(link),
            None => NavOutcome::UnknownTarget,
        }
    }

    #[must_use]
    pub fn links(&self) -> &[NavLink] {
        &self.links
    }

    #[must_use]
    pub fn sections(&self) -> &[String] {
        &self.sections
    }

    #[must_use]
    pub fn is_link_active(&self, link: usize) -> bool {
        self.active.is_some_and(|(active, _)| active == link)
    }

    #[must_use]
    pub fn is_section_active(&self, section_id: &str) -> bool {
        self.active_section_id() == Some(section_id)
    }

    #[must_use]
    pub fn active_section_id(&self) -> Option<&str> {
        self.active.map(|(_, section)| self.sections[section].as_str())
    }

    #[must_use]
    pub fn active_link(&self) -> Option<usize> {
        self.active.map(|(link, _)| link)
    }
}
