//! DOM helpers.
//!
//! Lookups take the `Document` explicitly so callers never depend on the
//! ambient global. The `get_el!`/`get_input!` macros turn a failed lookup into
//! a `ViewError` naming the selector and return early.

use web_sys::{Document, Element};

pub fn by_id(document: &Document, id: &str) -> Option<Element> {
    document.get_element_by_id(id)
}

/// Lookup for slots the host page may leave out. An empty id disables the slot.
pub fn optional(document: &Document, id: &str) -> Option<Element> {
    if id.is_empty() {
        return None;
    }
    by_id(document, id)
}

pub fn selector(id: &str) -> String {
    format!("#{}", id)
}

pub fn set_text(el: &Element, text: &str) {
    el.set_text_content(Some(text));
}

pub fn add_class(el: &Element, cls: &str) {
    let _ = el.class_list().add_1(cls);
}

pub fn remove_class(el: &Element, cls: &str) {
    let _ = el.class_list().remove_1(cls);
}

pub fn toggle_class(el: &Element, cls: &str) {
    let _ = el.class_list().toggle(cls);
}

macro_rules! get_el {
    ($doc:expr, $id:expr) => {
        $crate::dom::by_id($doc, $id).ok_or_else(|| $crate::error::ViewError::MissingElement {
            selector: $crate::dom::selector($id),
        })?
    };
}

macro_rules! get_input {
    ($doc:expr, $id:expr) => {
        wasm_bindgen::JsCast::dyn_into::<web_sys::HtmlInputElement>(get_el!($doc, $id))
            .map_err(|_| $crate::error::ViewError::WrongElementType {
                selector: $crate::dom::selector($id),
                expected: "an <input>",
            })?
    };
}

/// Attach a click listener that lives for the rest of the page.
/// The enclosing function must return `Result<_, ViewError>`.
macro_rules! on_click {
    ($el:expr, $cb:expr) => {{
        let cb = wasm_bindgen::closure::Closure::wrap(
            Box::new($cb) as Box<dyn FnMut(web_sys::MouseEvent)>
        );
        $el.add_event_listener_with_callback(
            "click",
            wasm_bindgen::JsCast::unchecked_ref(cb.as_ref()),
        )?;
        cb.forget();
    }};
}
