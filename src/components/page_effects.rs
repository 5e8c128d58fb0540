//! Pointer tilt on cards and header parallax.
//!
//! Both effects write inline transforms straight to the DOM on every
//! `mousemove`/`scroll`; nothing here is reactive state.

use leptos::prelude::*;

#[cfg(feature = "csr")]
use crate::error::PageError;
#[cfg(feature = "csr")]
use crate::state::PageContext;
#[cfg(feature = "csr")]
use crate::util::dom;
#[cfg(feature = "csr")]
use crate::util::effects::{Point, TiltConfig, card_tilt, parallax_css, parallax_offset};

/// Elements that tilt toward the pointer.
pub const TILT_SELECTOR: &str = ".project-card, .education-item";
/// Element shifted by the parallax.
pub const PARALLAX_SELECTOR: &str = ".header";

#[component]
pub fn PageEffects() -> impl IntoView {
    #[cfg(feature = "csr")]
    {
        let ctx = expect_context::<PageContext>();
        let tilt = ctx.config.with_value(|config| config.tilt);
        let rate = ctx.config.with_value(|config| config.parallax_rate);

        let _tilt_listener = window_event_listener(leptos::ev::mousemove, move |ev| {
            let pointer = Point { x: f64::from(ev.client_x()), y: f64::from(ev.client_y()) };
            if let Err(err) = tilt_cards(pointer, &tilt) {
                leptos::logging::warn!("card tilt skipped: {err}");
            }
        });
        let _parallax_listener = window_event_listener(leptos::ev::scroll, move |_| {
            if let Err(err) = shift_header(rate) {
                leptos::logging::warn!("header parallax skipped: {err}");
            }
        });
    }
}

#[cfg(feature = "csr")]
fn tilt_cards(pointer: Point, config: &TiltConfig) -> Result<(), PageError> {
    let viewport = dom::viewport()?;
    for card in dom::query_all(TILT_SELECTOR)? {
        let tilt = card_tilt(pointer, viewport, dom::card_rect(&card), config);
        dom::set_transform(&card, &tilt.to_css(config.perspective_px))?;
    }
    Ok(())
}

#[cfg(feature = "csr")]
fn shift_header(rate: f64) -> Result<(), PageError> {
    let header = dom::query(PARALLAX_SELECTOR)?;
    let offset = parallax_offset(dom::scroll_y()?, rate);
    dom::set_transform(&header, &parallax_css(offset))
}
