//! Project cards with a details button opening the project modal.

#[cfg(test)]
#[path = "projects_section_test.rs"]
mod projects_section_test;

use leptos::prelude::*;

use crate::components::page_section::PageSection;
use crate::content::ProjectCard;
use crate::state::PageContext;
use crate::state::catalog::ProjectId;

#[component]
pub fn ProjectsSection(id: &'static str, title: &'static str, cards: &'static [ProjectCard]) -> impl IntoView {
    let ctx = expect_context::<PageContext>();

    view! {
        <PageSection id=id title=title>
            <div class="projects-grid">
                {cards
                    .iter()
                    .map(|card| {
                        let project = card.id;
                        view! {
                            <article class="project-card">
                                <h3>{card.title}</h3>
                                <p>{card.summary}</p>
                                <ul class="project-tags">
                                    {card.tags.iter().map(|tag| view! { <li class="tag">{*tag}</li> }).collect_view()}
                                </ul>
                                <button
                                    class="btn project-btn"
                                    type="button"
                                    data-project=project.to_string()
                                    on:click=move |ev| open_project_metadata(ctx, &clicked_project(&ev))
                                >
                                    "Voir les détails"
                                </button>
                            </article>
                        }
                    })
                    .collect_view()}
            </div>
        </PageSection>
    }
}

/// Show the modal for a raw `data-project` value. Non-numeric or unknown
/// ids leave the page untouched.
pub fn open_project_metadata(ctx: PageContext, raw: &str) {
    match ProjectId::parse(raw) {
        Some(project) => open_project(ctx, project),
        None => leptos::logging::warn!("project button carries no usable id: {raw:?}"),
    }
}

#[cfg(feature = "csr")]
fn clicked_project(ev: &leptos::ev::MouseEvent) -> String {
    crate::util::dom::current_target_data(ev, "project").unwrap_or_default()
}

#[cfg(not(feature = "csr"))]
fn clicked_project(_ev: &leptos::ev::MouseEvent) -> String {
    String::new()
}

/// Show the modal for `project`; unknown ids leave the page untouched.
pub fn open_project(ctx: PageContext, project: ProjectId) {
    if ctx.modal.try_update(|modal| modal.open(project)).flatten().is_none() {
        leptos::logging::warn!("no project details for id {project}");
    }
}
