//! Project details modal lifecycle.
//!
//! DESIGN
//! ======
//! `Closed -> Opening -> Open -> Closing -> Closed`. The two delayed steps
//! (scale-in after opening, hide after closing) are keyed by
//! `transition_seq`: every open or close bumps it, and a delayed step only
//! applies if the sequence it was scheduled with is still current. Closing
//! during the scale-in, or reopening during the fade-out, therefore never
//! lets the stale step land.

#[cfg(test)]
#[path = "modal_test.rs"]
mod modal_test;

use crate::state::catalog::{self, ProjectId};

/// Content-panel scale while hidden or shrinking.
pub const SCALE_COLLAPSED: f64 = 0.8;
/// Content-panel scale once fully open.
pub const SCALE_FULL: f64 = 1.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModalPhase {
    #[default]
    Closed,
    Opening,
    Open,
    Closing,
}

/// What asked the modal to close.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CloseTrigger {
    CloseButton,
    Backdrop,
    Escape,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ModalState {
    pub phase: ModalPhase,
    pub project: Option<ProjectId>,
    pub title: String,
    pub description: String,
    /// Whether the modal container is displayed at all.
    pub visible: bool,
    pub content_scale: f64,
    pub transition_seq: u64,
}

impl Default for ModalState {
    fn default() -> Self {
        Self {
            phase: ModalPhase::Closed,
            project: None,
            title: String::new(),
            description: String::new(),
            visible: false,
            content_scale: SCALE_COLLAPSED,
            transition_seq: 0,
        }
    }
}

impl ModalState {
    /// Populate and show the modal for `id`.
    ///
    /// Returns the transition sequence to pass to [`Self::finish_opening`],
    /// or `None` when `id` is not in the catalog (state untouched).
    pub fn open(&mut self, id: ProjectId) -> Option<u64> {
        let project = catalog::lookup(id)?;
        self.project = Some(id);
        project.title.clone_into(&mut self.title);
        project.description.clone_into(&mut self.description);
        self.visible = true;
        self.phase = ModalPhase::Opening;
        self.transition_seq += 1;
        Some(self.transition_seq)
    }

    /// Delayed step of an open: scale the content panel to full size.
    pub fn finish_opening(&mut self, seq: u64) -> bool {
        if seq != self.transition_seq || self.phase != ModalPhase::Opening {
            return false;
        }
        self.content_scale = SCALE_FULL;
        self.phase = ModalPhase::Open;
        true
    }

    /// Start closing. Returns the sequence to pass to
    /// [`Self::finish_closing`], or `None` if the modal is not showing.
    pub fn close(&mut self) -> Option<u64> {
        if !self.is_showing() {
            return None;
        }
        self.content_scale = SCALE_COLLAPSED;
        self.phase = ModalPhase::Closing;
        self.transition_seq += 1;
        Some(self.transition_seq)
    }

    /// Delayed step of a close: hide the container.
    pub fn finish_closing(&mut self, seq: u64) -> bool {
        if seq != self.transition_seq || self.phase != ModalPhase::Closing {
            return false;
        }
        self.visible = false;
        self.phase = ModalPhase::Closed;
        true
    }

    #[must_use]
    pub fn is_showing(&self) -> bool {
        matches!(self.phase, ModalPhase::Opening | ModalPhase::Open)
    }

    /// CSS `display` of the modal container.
    #[must_use]
    pub fn display(&self) -> &'static str {
        if self.visible { "block" } else { "none" }
    }

    /// CSS `transform` of the content panel.
    #[must_use]
    pub fn content_transform(&self) -> String {
        format!("scale({})", self.content_scale)
    }
}
