//! Contact form with a simulated send.

#[cfg(all(test, not(feature = "csr")))]
#[path = "contact_form_test.rs"]
mod contact_form_test;

use leptos::prelude::*;

use crate::content::ContactBlock;
use crate::state::PageContext;
use crate::state::contact::{ContactField, ContactFormState};
use crate::util::timer::TimedTask;

#[component]
pub fn ContactForm(block: ContactBlock) -> impl IntoView {
    let ctx = expect_context::<PageContext>();
    let send = TimedTask::new();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        submit(ctx, &send);
    };

    let field_value = move |field: ContactField| move || ctx.contact.with(|form| form.fields.get(field).to_owned());
    let set_field = move |field: ContactField, value: String| ctx.contact.update(|form| form.set_field(field, value));

    view! {
        <p class="contact-intro">{block.intro}</p>
        <form id="contactForm" class="contact-form" on:submit=on_submit>
            <div class="form-group">
                <label for="contact-name">"Nom"</label>
                <input
                    id="contact-name"
                    name="name"
                    type="text"
                    required
                    prop:value=field_value(ContactField::Name)
                    on:input=move |ev| set_field(ContactField::Name, event_target_value(&ev))
                />
            </div>
            <div class="form-group">
                <label for="contact-email">"Email"</label>
                <input
                    id="contact-email"
                    name="email"
                    type="email"
                    required
                    prop:value=field_value(ContactField::Email)
                    on:input=move |ev| set_field(ContactField::Email, event_target_value(&ev))
                />
            </div>
            <div class="form-group">
                <label for="contact-subject">"Sujet"</label>
                <input
                    id="contact-subject"
                    name="subject"
                    type="text"
                    prop:value=field_value(ContactField::Subject)
                    on:input=move |ev| set_field(ContactField::Subject, event_target_value(&ev))
                />
            </div>
            <div class="form-group">
                <label for="contact-message">"Message"</label>
                <textarea
                    id="contact-message"
                    name="message"
                    rows="5"
                    required
                    prop:value=field_value(ContactField::Message)
                    on:input=move |ev| set_field(ContactField::Message, event_target_value(&ev))
                ></textarea>
            </div>
            <button
                type="submit"
                class="btn submit-btn"
                disabled=move || ctx.contact.with(ContactFormState::is_submit_disabled)
            >
                {move || ctx.contact.with(|form| form.submit_label().to_owned())}
            </button>
            <Show when=move || ctx.contact.with(|form| form.acknowledgment.is_some())>
                <p class="form-ack" role="status">
                    {move || ctx.contact.with(|form| form.acknowledgment.unwrap_or_default())}
                </p>
            </Show>
        </form>
    }
}

/// Start the simulated send; ignored while one is pending.
pub fn submit(ctx: PageContext, send: &TimedTask) -> bool {
    if !ctx.contact.try_update(ContactFormState::begin_submit).unwrap_or(false) {
        return false;
    }
    let delay = ctx.config.with_value(|config| config.contact_send_delay_ms);
    send.schedule(delay, move || {
        if let Some(Some(message)) = ctx.contact.try_update(ContactFormState::complete_submit) {
            acknowledge(message);
        }
    });
    true
}

#[cfg(feature = "csr")]
fn acknowledge(message: &str) {
    if let Err(err) = crate::util::dom::alert(message) {
        leptos::logging::warn!("contact acknowledgment not shown: {err}");
    }
}

#[cfg(not(feature = "csr"))]
fn acknowledge(message: &str) {
    leptos::logging::log!("{message}");
}
