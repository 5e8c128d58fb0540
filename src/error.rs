//! Browser interop failures.
//!
//! ERROR HANDLING
//! ==============
//! None of these reach the visitor. Glue helpers return `PageError` with `?`;
//! the event handler that called them logs a warning and carries on, so a
//! missing element or a refused storage write only disables its own feature.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

#[derive(Debug, thiserror::Error)]
pub enum PageError {
    #[error("browser window unavailable")]
    NoWindow,
    #[error("document unavailable")]
    NoDocument,
    #[error("element not found: {0}")]
    MissingElement(String),
    #[error("local storage unavailable")]
    NoStorage,
    #[error("javascript error: {0}")]
    Js(String),
    #[error("invalid page config: {0}")]
    Config(#[from] serde_json::Error),
}

#[cfg(feature = "csr")]
impl From<wasm_bindgen::JsValue> for PageError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}
