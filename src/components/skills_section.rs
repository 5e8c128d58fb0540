//! Skill bars that fill once the section is seen or selected.
//!
//! SYSTEM CONTEXT
//! ==============
//! Two triggers request the animation: the section crossing the visibility
//! threshold (observed with `IntersectionObserver`) and the skills tab being
//! selected. Both bump `SkillsState::request_seq`; one effect here turns
//! each request into per-bar fills after a short delay.
//!
//! TRADE-OFFS
//! ==========
//! A bar is claimed when its fill is scheduled, so repeated requests inside
//! the delay window never stack timers. Bars stay filled for the life of the
//! page; they do not reset when the section hides.

#[cfg(all(test, not(feature = "csr")))]
#[path = "skills_section_test.rs"]
mod skills_section_test;

#[cfg(feature = "csr")]
use std::cell::RefCell;
#[cfg(feature = "csr")]
use std::rc::Rc;

use leptos::prelude::*;

use crate::state::PageContext;
use crate::state::skills::SkillsState;
#[cfg(feature = "csr")]
use crate::util::visibility::VisibilityObserver;
use crate::util::timer::TimedTask;

#[component]
pub fn SkillsSection(id: &'static str, title: &'static str) -> impl IntoView {
    let ctx = expect_context::<PageContext>();
    let skills = ctx.skills.with_untracked(|state| state.skills.clone());
    let section_ref = NodeRef::<leptos::html::Section>::new();

    let fills: Vec<TimedTask> = skills.iter().map(|_| TimedTask::new()).collect();
    let requests = Memo::new(move |_| ctx.skills.with(|state| state.request_seq));
    Effect::new(move || {
        if requests.get() > 0 {
            schedule_fills(ctx, &fills);
        }
    });

    #[cfg(feature = "csr")]
    {
        let watch: Rc<RefCell<Option<VisibilityObserver>>> = Rc::default();
        Effect::new(move || {
            let Some(section) = section_ref.get() else {
                return;
            };
            if watch.borrow().is_some() {
                return;
            }
            let threshold = ctx.config.with_value(|config| config.skills_visibility_threshold);
            let observed = VisibilityObserver::observe(&section, threshold, move || {
                ctx.skills.update(|state| {
                    state.request_animation();
                });
            });
            match observed {
                Ok(observer) => *watch.borrow_mut() = Some(observer),
                Err(err) => leptos::logging::warn!("skills visibility observer unavailable: {err}"),
            }
        });
    }

    view! {
        <section
            id=id
            class="section"
            class:active=move || ctx.nav.with(|nav| nav.is_section_active(id))
            node_ref=section_ref
        >
            <h2 class="section-title">{title}</h2>
            <div class="skills">
                {skills
                    .into_iter()
                    .enumerate()
                    .map(|(index, skill)| {
                        let level_attr = skill.level_attr();
                        let level_label = format!("{}%", skill.level);
                        view! {
                            <div class="skill" data-level=level_attr>
                                <div class="skill-header">
                                    <span class="skill-name">{skill.name}</span>
                                    <span class="skill-level">{level_label}</span>
                                </div>
                                <div class="skill-bar">
                                    <div
                                        class="skill-progress"
                                        style:width=move || {
                                            ctx.skills.with(|state| state.width(index).unwrap_or_default().to_owned())
                                        }
                                    ></div>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

/// Claim every unfilled bar and schedule its fill on its own task.
pub fn schedule_fills(ctx: PageContext, fills: &[TimedTask]) {
    let delay = ctx.config.with_value(|config| config.skill_fill_delay_ms);
    let pending = ctx.skills.try_update(SkillsState::schedule_pending).unwrap_or_default();
    for index in pending {
        if let Some(task) = fills.get(index) {
            task.schedule(delay, move || {
                ctx.skills.update(|state| {
                    state.fill(index);
                });
            });
        }
    }
}
