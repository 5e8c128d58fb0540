use super::*;
use crate::components::projects_section::open_project;
use crate::config::PageConfig;
use crate::content::RESUME;
use crate::state::catalog::ProjectId;
use crate::state::theme::Theme;

fn context() -> PageContext {
    Owner::new().set();
    PageContext::new(PageConfig::default(), &RESUME, Theme::Light)
}

fn transition(ctx: PageContext) -> (ModalPhase, u64) {
    ctx.modal.with_untracked(|modal| (modal.phase, modal.transition_seq))
}

fn advance(ctx: PageContext, step: &TimedTask) {
    let (phase, seq) = transition(ctx);
    schedule_step(ctx, step, phase, seq);
}

// =============================================================
// Delays
// =============================================================

#[test]
fn open_scales_in_after_open_delay() {
    let ctx = context();
    let step = TimedTask::new();
    open_project(ctx, ProjectId(1));
    advance(ctx, &step);

    assert_eq!(step.pending_delay(), Some(10));
    assert!(step.fire());
    ctx.modal.with_untracked(|modal| {
        assert_eq!(modal.phase, ModalPhase::Open);
        assert_eq!(modal.content_transform(), "scale(1)");
    });
}

#[test]
fn every_close_trigger_hides_after_close_delay() {
    for trigger in [CloseTrigger::CloseButton, CloseTrigger::Backdrop, CloseTrigger::Escape] {
        let ctx = context();
        let step = TimedTask::new();
        open_project(ctx, ProjectId(1));
        advance(ctx, &step);
        step.fire();

        close_modal(ctx, trigger);
        advance(ctx, &step);
        assert_eq!(step.pending_delay(), Some(300));
        assert!(ctx.modal.with_untracked(|modal| modal.visible));

        assert!(step.fire());
        assert_eq!(ctx.modal.with_untracked(ModalState::display), "none");
    }
}

#[test]
fn settled_phases_schedule_nothing() {
    let ctx = context();
    let step = TimedTask::new();
    advance(ctx, &step);
    assert_eq!(step.pending_delay(), None);
}

// =============================================================
// Superseded steps
// =============================================================

#[test]
fn close_during_opening_replaces_scale_in() {
    let ctx = context();
    let step = TimedTask::new();
    open_project(ctx, ProjectId(2));
    advance(ctx, &step);
    close_modal(ctx, CloseTrigger::Escape);
    advance(ctx, &step);

    assert_eq!(step.pending_delay(), Some(300));
    step.fire();
    ctx.modal.with_untracked(|modal| {
        assert_eq!(modal.phase, ModalPhase::Closed);
        assert_eq!(modal.content_transform(), "scale(0.8)");
    });
}
