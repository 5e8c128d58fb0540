//! Content section shown only while its nav link is active.

use leptos::prelude::*;

use crate::state::PageContext;

#[component]
pub fn PageSection(id: &'static str, title: &'static str, children: Children) -> impl IntoView {
    let ctx = expect_context::<PageContext>();

    view! {
        <section id=id class="section" class:active=move || ctx.nav.with(|nav| nav.is_section_active(id))>
            <h2 class="section-title">{title}</h2>
            {children()}
        </section>
    }
}
