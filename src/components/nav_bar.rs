//! Section tabs.
//!
//! DESIGN
//! ======
//! Link clicks never scroll: the default anchor navigation is cancelled and
//! the target section is switched in place. Selecting the skills section
//! also requests the skill bar animation, the same request the visibility
//! observer makes.

#[cfg(test)]
#[path = "nav_bar_test.rs"]
mod nav_bar_test;

use leptos::prelude::*;

use crate::content::SKILLS_SECTION_ID;
use crate::state::PageContext;
use crate::state::navigation::NavOutcome;

#[component]
pub fn NavBar() -> impl IntoView {
    let ctx = expect_context::<PageContext>();
    let links = ctx.nav.with_untracked(|nav| nav.links().to_vec());

    view! {
        <nav class="nav">
            <ul class="nav-list">
                {links
                    .into_iter()
                    .enumerate()
                    .map(|(index, link)| {
                        let on_click = move |ev: leptos::ev::MouseEvent| {
                            ev.prevent_default();
                            let outcome = ctx.nav.try_update(|nav| nav.activate(index));
                            after_navigation(ctx, outcome);
                        };
                        view! {
                            <li>
                                <a
                                    href=link.href
                                    class="nav-link"
                                    class:active=move || ctx.nav.with(|nav| nav.is_link_active(index))
                                    on:click=on_click
                                >
                                    {link.label}
                                </a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </nav>
    }
}

/// Activate the section named by a URL fragment (deep link).
pub fn reveal_fragment(ctx: PageContext, fragment: &str) {
    let outcome = ctx.nav.try_update(|nav| nav.activate_fragment(fragment));
    after_navigation(ctx, outcome);
}

fn after_navigation(ctx: PageContext, outcome: Option<NavOutcome>) {
    match outcome {
        Some(NavOutcome::Activated { section_id }) => {
            if section_id == SKILLS_SECTION_ID {
                ctx.skills.update(|skills| {
                    skills.request_animation();
                });
            }
        }
        Some(NavOutcome::UnknownTarget) => {
            leptos::logging::warn!("nav target has no matching section");
        }
        None => {}
    }
}
