//! Header portrait with an optional upload overlay.
//!
//! SYSTEM CONTEXT
//! ==============
//! The upload never leaves the browser: the chosen file is read as a data
//! URL and becomes the portrait source, followed by a short scale pulse.
//!
//! TRADE-OFFS
//! ==========
//! Only the most recent read is kept; picking again while a read is still
//! in flight aborts the older one.

#[cfg(all(test, not(feature = "csr")))]
#[path = "profile_photo_test.rs"]
mod profile_photo_test;

#[cfg(feature = "csr")]
use std::cell::RefCell;
#[cfg(feature = "csr")]
use std::rc::Rc;

use leptos::prelude::*;

use crate::state::PageContext;
use crate::state::photo::PhotoState;
use crate::util::timer::TimedTask;

#[component]
pub fn ProfilePhoto(name: &'static str, upload: bool) -> impl IntoView {
    let ctx = expect_context::<PageContext>();

    view! {
        <div class="photo-container">
            <img
                id="profilePhoto"
                class="profile-photo"
                alt=name
                src=move || ctx.photo.with(|photo| photo.src.clone())
                style:transform=move || ctx.photo.with(PhotoState::transform)
            />
            {upload.then(|| view! { <PhotoOverlay/> })}
        </div>
    }
}

#[component]
fn PhotoOverlay() -> impl IntoView {
    #[cfg(feature = "csr")]
    let on_click = {
        let ctx = expect_context::<PageContext>();
        let pulse = TimedTask::new();
        let reader: Rc<RefCell<Option<gloo_file::callbacks::FileReader>>> = Rc::default();
        move |_ev: leptos::ev::MouseEvent| {
            let reader_slot = Rc::clone(&reader);
            let pulse = pulse.clone();
            let accept = ctx.config.with_value(|config| config.photo_accept.clone());
            let picked = crate::util::file_picker::pick_file(&accept, move |file| {
                let file_name = file.name();
                let read = gloo_file::callbacks::read_as_data_url(&file, move |result| match result {
                    Ok(data_url) => show_photo(ctx, &pulse, data_url),
                    Err(err) => leptos::logging::warn!("photo {file_name} not read: {err}"),
                });
                // Replacing the slot aborts a read still in flight.
                drop(reader_slot.borrow_mut().replace(read));
            });
            if let Err(err) = picked {
                leptos::logging::warn!("photo picker unavailable: {err}");
            }
        }
    };

    #[cfg(not(feature = "csr"))]
    let on_click = |_ev: leptos::ev::MouseEvent| {};

    view! {
        <div id="photoOverlay" class="photo-overlay" title="Changer la photo" on:click=on_click>
            <span class="photo-overlay__icon">"📷"</span>
        </div>
    }
}

/// Swap in a freshly read photo and schedule the end of its pulse.
pub fn show_photo(ctx: PageContext, pulse: &TimedTask, data_url: String) {
    let Some(seq) = ctx.photo.try_update(|photo| photo.loaded(data_url)) else {
        return;
    };
    let delay = ctx.config.with_value(|config| config.photo_pulse_delay_ms);
    pulse.schedule(delay, move || {
        ctx.photo.update(|photo| {
            photo.settle(seq);
        });
    });
}
