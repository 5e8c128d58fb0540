use super::*;

fn filled() -> ContactFormState {
    let mut form = ContactFormState::new("Envoyer");
    form.set_field(ContactField::Name, "Camille".to_owned());
    form.set_field(ContactField::Email, "camille@example.com".to_owned());
    form.set_field(ContactField::Subject, "Mission".to_owned());
    form.set_field(ContactField::Message, "Bonjour !".to_owned());
    form
}

#[test]
fn new_form_is_idle_and_enabled() {
    let form = ContactFormState::new("Envoyer");
    assert_eq!(form.phase, SubmitPhase::Idle);
    assert!(!form.is_submit_disabled());
    assert_eq!(form.submit_label(), "Envoyer");
    assert_eq!(form.fields, ContactFields::default());
}

#[test]
fn set_field_writes_matching_slot() {
    let form = filled();
    assert_eq!(form.fields.get(ContactField::Name), "Camille");
    assert_eq!(form.fields.get(ContactField::Email), "camille@example.com");
    assert_eq!(form.fields.get(ContactField::Subject), "Mission");
    assert_eq!(form.fields.get(ContactField::Message), "Bonjour !");
}

#[test]
fn submit_disables_immediately_and_keeps_fields() {
    let mut form = filled();
    assert!(form.begin_submit());
    assert!(form.is_submit_disabled());
    assert_eq!(form.submit_label(), SENDING_LABEL);
    assert_eq!(form.fields.get(ContactField::Name), "Camille");
    assert_eq!(form.acknowledgment, None);
}

#[test]
fn second_submit_while_sending_is_rejected() {
    let mut form = filled();
    assert!(form.begin_submit());
    assert!(!form.begin_submit());
    assert!(form.is_submit_disabled());
}

#[test]
fn completion_clears_fields_and_restores_control() {
    let mut form = filled();
    form.begin_submit();
    assert_eq!(form.complete_submit(), Some(SUCCESS_MESSAGE));
    assert_eq!(form.fields, ContactFields::default());
    assert!(!form.is_submit_disabled());
    assert_eq!(form.submit_label(), "Envoyer");
    assert_eq!(form.acknowledgment, Some("Message envoyé avec succès !"));
}

#[test]
fn completion_without_pending_send_is_noop() {
    let mut form = filled();
    assert_eq!(form.complete_submit(), None);
    assert_eq!(form.fields.get(ContactField::Name), "Camille");
}

#[test]
fn empty_form_still_succeeds() {
    let mut form = ContactFormState::new("Envoyer");
    assert!(form.begin_submit());
    assert_eq!(form.complete_submit(), Some(SUCCESS_MESSAGE));
}

#[test]
fn new_submit_clears_previous_acknowledgment() {
    let mut form = filled();
    form.begin_submit();
    form.complete_submit();
    assert!(form.begin_submit());
    assert_eq!(form.acknowledgment, None);
}
