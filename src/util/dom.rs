//! Thin `web-sys` helpers returning `PageError` instead of `JsValue`.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Storage, Window};

use crate::error::PageError;
use crate::util::effects::{CardRect, Viewport};

pub fn window() -> Result<Window, PageError> {
    web_sys::window().ok_or(PageError::NoWindow)
}

pub fn document() -> Result<Document, PageError> {
    window()?.document().ok_or(PageError::NoDocument)
}

pub fn local_storage() -> Result<Storage, PageError> {
    window()?.local_storage()?.ok_or(PageError::NoStorage)
}

/// First element matching `selector`.
pub fn query(selector: &str) -> Result<Element, PageError> {
    document()?
        .query_selector(selector)?
        .ok_or_else(|| PageError::MissingElement(selector.to_owned()))
}

/// Every element matching `selector`, in document order.
pub fn query_all(selector: &str) -> Result<Vec<Element>, PageError> {
    let list = document()?.query_selector_all(selector)?;
    Ok((0..list.length())
        .filter_map(|index| list.item(index))
        .filter_map(|node| node.dyn_ref::<Element>().cloned())
        .collect())
}

/// Set an attribute on the `<html>` element.
pub fn set_root_attribute(name: &str, value: &str) -> Result<(), PageError> {
    let root = document()?
        .document_element()
        .ok_or_else(|| PageError::MissingElement("html".to_owned()))?;
    root.set_attribute(name, value)?;
    Ok(())
}

/// Write the inline `transform` of an element.
pub fn set_transform(element: &Element, value: &str) -> Result<(), PageError> {
    let html = element
        .dyn_ref::<HtmlElement>()
        .ok_or_else(|| PageError::MissingElement(element.tag_name()))?;
    html.style().set_property("transform", value)?;
    Ok(())
}

pub fn card_rect(element: &Element) -> CardRect {
    let rect = element.get_bounding_client_rect();
    CardRect { left: rect.left(), top: rect.top(), width: rect.width(), height: rect.height() }
}

pub fn viewport() -> Result<Viewport, PageError> {
    let window = window()?;
    let width = window.inner_width()?.as_f64().unwrap_or(0.0);
    let height = window.inner_height()?.as_f64().unwrap_or(0.0);
    Ok(Viewport { width, height })
}

pub fn scroll_y() -> Result<f64, PageError> {
    Ok(window()?.scroll_y()?)
}

pub fn alert(message: &str) -> Result<(), PageError> {
    window()?.alert_with_message(message)?;
    Ok(())
}

/// `data-<name>` of the element the handler for `event` is attached to.
pub fn current_target_data(event: &web_sys::Event, name: &str) -> Option<String> {
    event
        .current_target()?
        .dyn_ref::<Element>()?
        .get_attribute(&format!("data-{name}"))
}

/// Fragment of the current URL, including its leading `#` (empty if none).
pub fn location_hash() -> Result<String, PageError> {
    Ok(window()?.location().hash()?)
}
