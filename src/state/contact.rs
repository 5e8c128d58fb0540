//! Contact form fields and the simulated send.
//!
//! Nothing leaves the page: a submit flips the form to `Sending`, and the
//! component completes it after a fixed delay. While `Sending` the submit
//! control is disabled and further submits are rejected.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

/// Submit control label while the send is pending.
pub const SENDING_LABEL: &str = "Envoi en cours...";
/// Acknowledgment shown once the send completes.
pub const SUCCESS_MESSAGE: &str = "Message envoyé avec succès !";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactFields {
    fn slot(&mut self, field: ContactField) -> &mut String {
        match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Subject => &mut self.subject,
            ContactField::Message => &mut self.message,
        }
    }

    #[must_use]
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Sending,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactFormState {
    pub fields: ContactFields,
    pub phase: SubmitPhase,
    /// Label restored on the submit control when a send completes.
    idle_label: String,
    /// Set when a send completes; replaced by the next one.
    pub acknowledgment: Option<&'static str>,
}

impl ContactFormState {
    pub fn new(idle_label: impl Into<String>) -> Self {
        Self {
            fields: ContactFields::default(),
            phase: SubmitPhase::Idle,
            idle_label: idle_label.into(),
            acknowledgment: None,
        }
    }

    pub fn set_field(&mut self, field: ContactField, value: String) {
        *self.fields.slot(field) = value;
    }

    /// Start a send. Returns `false` if one is already pending.
    pub fn begin_submit(&mut self) -> bool {
        if self.phase == SubmitPhase::Sending {
            return false;
        }
        self.phase = SubmitPhase::Sending;
        self.acknowledgment = None;
        true
    }

    /// Finish the pending send: clear every field and re-enable the control.
    /// Returns the acknowledgment to show, or `None` if nothing was pending.
    pub fn complete_submit(&mut self) -> Option<&'static str> {
        if self.phase != SubmitPhase::Sending {
            return None;
        }
        self.fields = ContactFields::default();
        self.phase = SubmitPhase::Idle;
        self.acknowledgment = Some(SUCCESS_MESSAGE);
        self.acknowledgment
    }

    #[must_use]
    pub fn is_submit_disabled(&self) -> bool {
        self.phase == SubmitPhase::Sending
    }

    #[must_use]
    pub fn submit_label(&self) -> &str {
        match self.phase {
            SubmitPhase::Idle => &self.idle_label,
            SubmitPhase::Sending => SENDING_LABEL,
        }
    }
}
