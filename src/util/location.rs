//! Deep-link fragment of the page URL.
//!
//! Read once at startup. Tab clicks never write it back: the URL and
//! history stay untouched while the visitor switches sections.

#[cfg(test)]
#[path = "location_test.rs"]
mod location_test;

/// Section id named by a `location.hash` value, `None` when there is none.
#[must_use]
pub fn fragment_from_hash(hash: &str) -> Option<&str> {
    let fragment = hash.strip_prefix('#').unwrap_or(hash).trim();
    if fragment.is_empty() { None } else { Some(fragment) }
}

/// Fragment the page was opened with.
#[cfg(feature = "csr")]
pub fn initial_fragment() -> Option<String> {
    match crate::util::dom::location_hash() {
        Ok(hash) => fragment_from_hash(&hash).map(str::to_owned),
        Err(err) => {
            leptos::logging::warn!("page fragment unreadable: {err}");
            None
        }
    }
}

#[cfg(not(feature = "csr"))]
pub fn initial_fragment() -> Option<String> {
    None
}
