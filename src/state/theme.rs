//! Theme preference values.
//!
//! The persisted form is the lowercase name (`"light"` / `"dark"`), which is
//! also the value written to the `data-theme` attribute on `<html>`.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// Visual styling mode for the page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Stored and attribute form of the theme.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a stored preference. Anything other than the two known names is
    /// rejected so callers fall back to the default.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Toggle button copy. Names the theme a click would switch *to*.
    #[must_use]
    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Light => "🌙 Mode Sombre",
            Self::Dark => "☀️ Mode Clair",
        }
    }
}
