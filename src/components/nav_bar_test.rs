use super::*;
use crate::config::PageConfig;
use crate::content::RESUME;
use crate::state::theme::Theme;

fn context() -> PageContext {
    Owner::new().set();
    PageContext::new(PageConfig::default(), &RESUME, Theme::Light)
}

fn active_section(ctx: PageContext) -> Option<String> {
    ctx.nav.with_untracked(|nav| nav.active_section_id().map(str::to_owned))
}

fn animation_requests(ctx: PageContext) -> u64 {
    ctx.skills.with_untracked(|skills| skills.request_seq)
}

#[test]
fn first_section_active_on_load() {
    let ctx = context();
    assert_eq!(active_section(ctx).as_deref(), Some("accueil"));
    assert_eq!(animation_requests(ctx), 0);
}

#[test]
fn deep_link_to_skills_requests_animation() {
    let ctx = context();
    reveal_fragment(ctx, "#competences");
    assert_eq!(active_section(ctx).as_deref(), Some("competences"));
    assert_eq!(animation_requests(ctx), 1);
}

#[test]
fn deep_link_to_other_section_leaves_skills_alone() {
    let ctx = context();
    reveal_fragment(ctx, "#projets");
    assert_eq!(active_section(ctx).as_deref(), Some("projets"));
    assert_eq!(animation_requests(ctx), 0);
}

#[test]
fn unknown_fragment_changes_nothing() {
    let ctx = context();
    reveal_fragment(ctx, "#nowhere");
    assert_eq!(active_section(ctx).as_deref(), Some("accueil"));
    assert!(ctx.nav.with_untracked(|nav| nav.is_link_active(0)));
    assert_eq!(animation_requests(ctx), 0);
}

#[test]
fn reselecting_skills_requests_again() {
    let ctx = context();
    reveal_fragment(ctx, "competences");
    reveal_fragment(ctx, "#competences");
    assert_eq!(animation_requests(ctx), 2);
}
