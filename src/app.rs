//! Root application component with the page context provider.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::config::PageConfig;
use crate::content::RESUME;
use crate::pages::resume::ResumePage;
use crate::state::PageContext;
use crate::util::storage::BrowserStore;

/// Root application component.
///
/// Loads configuration, applies the stored theme before first paint, and
/// provides the shared `PageContext` to every component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = PageConfig::load();
    let theme = crate::util::theme::read_preference(&BrowserStore, &config.theme_storage_key);
    crate::util::theme::apply(theme);

    provide_context(PageContext::new(config, &RESUME, theme));

    view! {
        <Title text=format!("{} | CV", RESUME.profile.name)/>
        <ResumePage resume=RESUME/>
    }
}
