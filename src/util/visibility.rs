//! `IntersectionObserver` wrapper firing a callback when a target becomes
//! visible past a threshold.

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::error::PageError;

type EntriesCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// Live observer; disconnects when dropped.
pub struct VisibilityObserver {
    observer: IntersectionObserver,
    _callback: EntriesCallback,
}

impl VisibilityObserver {
    /// Call `on_visible` for every entry that is intersecting at or above
    /// `threshold` (0.0..=1.0) of `target`.
    pub fn observe(
        target: &Element,
        threshold: f64,
        mut on_visible: impl FnMut() + 'static,
    ) -> Result<Self, PageError> {
        let callback: EntriesCallback = Closure::new(move |entries: js_sys::Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry = entry.unchecked_into::<IntersectionObserverEntry>();
                if entry.is_intersecting() {
                    on_visible();
                }
            }
        });

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
        observer.observe(target);
        Ok(Self { observer, _callback: callback })
    }
}

impl Drop for VisibilityObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
