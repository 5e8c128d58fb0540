//! Page configuration: storage key, delays, and effect tuning.
//!
//! SYSTEM CONTEXT
//! ==============
//! Defaults reproduce the page's fixed timings. A host page may override any
//! subset by embedding JSON in `<script id="folio-config"
//! type="application/json">`; unknown keys are ignored and missing keys keep
//! their defaults. A malformed blob is logged and the defaults are used.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::error::PageError;
use crate::util::effects::TiltConfig;

/// Id of the optional JSON config element.
pub const CONFIG_ELEMENT_ID: &str = "folio-config";

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// `localStorage` key holding the theme preference.
    pub theme_storage_key: String,
    /// Fraction of the skills section that must be visible.
    pub skills_visibility_threshold: f64,
    pub skill_fill_delay_ms: u32,
    pub modal_open_delay_ms: u32,
    pub modal_close_delay_ms: u32,
    pub contact_send_delay_ms: u32,
    pub photo_pulse_delay_ms: u32,
    /// `accept` filter of the synthesized file input.
    pub photo_accept: String,
    pub tilt: TiltConfig,
    /// Header translation per scrolled pixel.
    pub parallax_rate: f64,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            theme_storage_key: "theme".to_owned(),
            skills_visibility_threshold: 0.5,
            skill_fill_delay_ms: 200,
            modal_open_delay_ms: 10,
            modal_close_delay_ms: 300,
            contact_send_delay_ms: 2000,
            photo_pulse_delay_ms: 300,
            photo_accept: "image/*".to_owned(),
            tilt: TiltConfig::default(),
            parallax_rate: -0.25,
        }
    }
}

impl PageConfig {
    /// Parse a (possibly partial) JSON override.
    pub fn from_json(raw: &str) -> Result<Self, PageError> {
        let mut config: Self = serde_json::from_str(raw)?;
        config.skills_visibility_threshold = config.skills_visibility_threshold.clamp(0.0, 1.0);
        Ok(config)
    }

    /// Load the embedded override, falling back to defaults.
    pub fn load() -> Self {
        match read_embedded() {
            Ok(Some(config)) => config,
            Ok(None) => Self::default(),
            Err(err) => {
                leptos::logging::warn!("page config ignored: {err}");
                Self::default()
            }
        }
    }
}

#[cfg(feature = "csr")]
fn read_embedded() -> Result<Option<PageConfig>, PageError> {
    let document = crate::util::dom::document()?;
    let Some(element) = document.get_element_by_id(CONFIG_ELEMENT_ID) else {
        return Ok(None);
    };
    let raw = element.text_content().unwrap_or_default();
    if raw.trim().is_empty() {
        return Ok(None);
    }
    PageConfig::from_json(&raw).map(Some)
}

#[cfg(not(feature = "csr"))]
fn read_embedded() -> Result<Option<PageConfig>, PageError> {
    Ok(None)
}
