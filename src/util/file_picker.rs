//! Synthesized file-input picker.
//!
//! DESIGN
//! ======
//! A hidden `<input type="file">` is appended to `<body>` and clicked. It
//! stays in the document, listeners attached, until the browser reports the
//! outcome through `change` or `cancel`; only then is the element removed and
//! the listeners released. Relying on a detached input still delivering its
//! `change` event is implementation-defined, so the input is not detached
//! early.
//!
//! The session keeps itself alive through an `Rc` cycle between its closures
//! and its holder. Whichever listener fires first breaks the cycle.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Event, HtmlInputElement};

use crate::error::PageError;
use crate::util::dom;

type Listener = Closure<dyn FnMut(Event)>;
type SessionHolder = Rc<RefCell<Option<PickerSession>>>;

struct PickerSession {
    input: HtmlInputElement,
    _on_change: Listener,
    _on_cancel: Listener,
}

impl PickerSession {
    fn release(holder: &SessionHolder) {
        let session = holder.borrow_mut().take();
        if let Some(session) = session {
            session.input.remove();
            log::debug!("file picker released");
        }
    }
}

/// Open a file picker filtered by `accept` and hand the first chosen file to
/// `on_file`. Cancelling the picker calls nothing.
pub fn pick_file(accept: &str, on_file: impl FnOnce(gloo_file::File) + 'static) -> Result<(), PageError> {
    let document = dom::document()?;
    let body = document.body().ok_or_else(|| PageError::MissingElement("body".to_owned()))?;
    let input = document
        .create_element("input")?
        .dyn_into::<HtmlInputElement>()
        .map_err(|element| PageError::Js(format!("<{}> is not an input", element.tag_name())))?;
    input.set_type("file");
    input.set_accept(accept);
    input.style().set_property("display", "none")?;

    let holder: SessionHolder = Rc::new(RefCell::new(None));

    let on_change: Listener = {
        let holder = Rc::clone(&holder);
        let input = input.clone();
        Closure::once(move |_ev: Event| {
            let file = input.files().and_then(|files| files.get(0));
            PickerSession::release(&holder);
            match file {
                Some(file) => on_file(gloo_file::File::from(file)),
                None => log::debug!("file picker changed without a file"),
            }
        })
    };
    let on_cancel: Listener = {
        let holder = Rc::clone(&holder);
        Closure::once(move |_ev: Event| PickerSession::release(&holder))
    };

    input.add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref())?;
    input.add_event_listener_with_callback("cancel", on_cancel.as_ref().unchecked_ref())?;
    body.append_child(&input)?;

    *holder.borrow_mut() = Some(PickerSession { input: input.clone(), _on_change: on_change, _on_cancel: on_cancel });
    input.click();
    Ok(())
}
