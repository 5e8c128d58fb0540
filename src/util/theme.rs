//! Theme initialization and toggle.
//!
//! Reads the visitor's preference from a [`PreferenceStore`] and applies a
//! `data-theme` attribute to the `<html>` element. Toggle writes back to the
//! store and updates that attribute.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort: when storage is unavailable the page starts
//! light every time and toggles only last for the visit.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::state::theme::Theme;
use crate::util::storage::PreferenceStore;

/// Read the stored theme, defaulting to light when absent or unrecognized.
pub fn read_preference(store: &impl PreferenceStore, key: &str) -> Theme {
    store
        .get(key)
        .and_then(|raw| Theme::parse(&raw))
        .unwrap_or_default()
}

/// Apply the `data-theme` attribute on the `<html>` element.
#[cfg(feature = "csr")]
pub fn apply(theme: Theme) {
    if let Err(err) = crate::util::dom::set_root_attribute("data-theme", theme.as_str()) {
        leptos::logging::warn!("theme {} not applied: {err}", theme.as_str());
    }
}

#[cfg(not(feature = "csr"))]
pub fn apply(_theme: Theme) {}

/// Flip the theme, apply it, and persist the new preference.
pub fn toggle(store: &impl PreferenceStore, key: &str, current: Theme) -> Theme {
    let next = current.toggled();
    apply(next);
    if let Err(err) = store.set(key, next.as_str()) {
        leptos::logging::warn!("theme preference not saved: {err}");
    }
    next
}
