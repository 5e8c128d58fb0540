//! Pointer-tilt and header-parallax math.
//!
//! Pure functions over plain numbers so the browser glue in
//! `components::page_effects` only measures and writes styles.

#[cfg(test)]
#[path = "effects_test.rs"]
mod effects_test;

use serde::Deserialize;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

/// Client-space bounding box of a card.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl CardRect {
    #[must_use]
    pub fn center(&self) -> Point {
        Point { x: self.left + self.width / 2.0, y: self.top + self.height / 2.0 }
    }
}

/// Tilt tuning, loaded as part of `PageConfig`.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct TiltConfig {
    /// A card reacts while the pointer is closer than this to its center on
    /// both axes.
    pub reach_px: f64,
    pub perspective_px: f64,
    /// Rotation at the viewport edge, in degrees.
    pub amplitude_deg: f64,
}

impl Default for TiltConfig {
    fn default() -> Self {
        Self { reach_px: 200.0, perspective_px: 1000.0, amplitude_deg: 10.0 }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Tilt {
    Neutral,
    Angled { x_deg: f64, y_deg: f64 },
}

impl Tilt {
    /// CSS `transform` value for this tilt.
    #[must_use]
    pub fn to_css(self, perspective_px: f64) -> String {
        match self {
            Self::Neutral => format!("perspective({perspective_px}px) rotateX(0) rotateY(0)"),
            Self::Angled { x_deg, y_deg } => {
                format!("perspective({perspective_px}px) rotateX({x_deg}deg) rotateY({y_deg}deg)")
            }
        }
    }
}

/// Tilt for one card given the pointer position.
///
/// The angle depends on where the pointer sits in the viewport, not on the
/// card; the card only decides whether it reacts at all.
#[must_use]
pub fn card_tilt(pointer: Point, viewport: Viewport, card: CardRect, config: &TiltConfig) -> Tilt {
    if viewport.width <= 0.0 || viewport.height <= 0.0 {
        return Tilt::Neutral;
    }
    let center = card.center();
    let near = (pointer.x - center.x).abs() < config.reach_px && (pointer.y - center.y).abs() < config.reach_px;
    if !near {
        return Tilt::Neutral;
    }
    let nx = pointer.x / viewport.width;
    let ny = pointer.y / viewport.height;
    Tilt::Angled { x_deg: (ny - 0.5) * config.amplitude_deg, y_deg: (nx - 0.5) * -config.amplitude_deg }
}

/// Vertical header offset for a scroll position.
#[must_use]
pub fn parallax_offset(scroll_y: f64, rate: f64) -> f64 {
    scroll_y * rate
}

#[must_use]
pub fn parallax_css(offset_px: f64) -> String {
    format!("translateY({offset_px}px)")
}
