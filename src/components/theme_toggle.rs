//! Light/dark theme switch button.

use leptos::prelude::*;

use crate::state::PageContext;
use crate::util::storage::BrowserStore;

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ctx = expect_context::<PageContext>();

    let on_click = move |_| {
        let key = ctx.config.with_value(|config| config.theme_storage_key.clone());
        let next = crate::util::theme::toggle(&BrowserStore, &key, ctx.theme.get_untracked());
        ctx.theme.set(next);
    };

    view! {
        <button id="themeToggle" class="theme-toggle" type="button" on:click=on_click>
            {move || ctx.theme.get().toggle_label()}
        </button>
    }
}
