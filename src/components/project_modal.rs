//! Project details modal.
//!
//! DESIGN
//! ======
//! Open and close are two-step: the container shows at once and the content
//! scales in on the next short tick; closing scales out first and hides the
//! container after the transition. Each step carries the sequence number of
//! the transition that scheduled it, so a step superseded by a newer open or
//! close is discarded.

#[cfg(all(test, not(feature = "csr")))]
#[path = "project_modal_test.rs"]
mod project_modal_test;

use leptos::prelude::*;

use crate::state::PageContext;
use crate::state::modal::{CloseTrigger, ModalPhase, ModalState};
use crate::util::timer::TimedTask;

#[component]
pub fn ProjectModal() -> impl IntoView {
    let ctx = expect_context::<PageContext>();

    let step = TimedTask::new();
    let transition = Memo::new(move |_| ctx.modal.with(|modal| (modal.phase, modal.transition_seq)));
    Effect::new(move || {
        let (phase, seq) = transition.get();
        schedule_step(ctx, &step, phase, seq);
    });

    #[cfg(feature = "csr")]
    {
        let _escape = window_event_listener(leptos::ev::keydown, move |ev| {
            if ev.key() == "Escape" {
                close_modal(ctx, CloseTrigger::Escape);
            }
        });
    }

    view! {
        <div
            id="projectModal"
            class="modal"
            style:display=move || ctx.modal.with(ModalState::display)
            on:click=move |_| close_modal(ctx, CloseTrigger::Backdrop)
        >
            <div
                class="modal-content"
                style:transform=move || ctx.modal.with(ModalState::content_transform)
                on:click=|ev: leptos::ev::MouseEvent| ev.stop_propagation()
            >
                <span class="close" title="Fermer" on:click=move |_| close_modal(ctx, CloseTrigger::CloseButton)>
                    "×"
                </span>
                <h2 id="modalTitle">{move || ctx.modal.with(|modal| modal.title.clone())}</h2>
                <p id="modalDescription">{move || ctx.modal.with(|modal| modal.description.clone())}</p>
            </div>
        </div>
    }
}

/// Schedule the delayed half of an open or close transition.
pub fn schedule_step(ctx: PageContext, step: &TimedTask, phase: ModalPhase, seq: u64) {
    let (open_delay, close_delay) =
        ctx.config.with_value(|config| (config.modal_open_delay_ms, config.modal_close_delay_ms));
    match phase {
        ModalPhase::Opening => step.schedule(open_delay, move || {
            ctx.modal.update(|modal| {
                modal.finish_opening(seq);
            });
        }),
        ModalPhase::Closing => step.schedule(close_delay, move || {
            ctx.modal.update(|modal| {
                modal.finish_closing(seq);
            });
        }),
        ModalPhase::Open | ModalPhase::Closed => {}
    }
}

pub fn close_modal(ctx: PageContext, trigger: CloseTrigger) {
    if let Some(Some(seq)) = ctx.modal.try_update(|modal| modal.close()) {
        leptos::logging::log!("project modal closing ({trigger:?}, step {seq})");
    }
}
