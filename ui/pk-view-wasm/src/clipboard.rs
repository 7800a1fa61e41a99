//! Click-to-copy.
//!
//! Copyable targets are either text nodes (the public key, the hash) or
//! value-bearing fields, so the copied string is the rendered text when there
//! is any and the field value otherwise.

use gloo_console as console;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Element, HtmlElement, HtmlInputElement, HtmlTextAreaElement};

use crate::error::{self, ViewError};

/// Pick the string to copy: `text` unless it is empty, else the field value.
pub fn copy_source(text: &str, value: Option<String>) -> String {
    if text.is_empty() {
        value.unwrap_or_default()
    } else {
        text.to_string()
    }
}

/// The string a click on `el` would put on the clipboard.
pub fn copyable_text(el: &Element) -> String {
    let text = match el.dyn_ref::<HtmlElement>() {
        Some(html) => html.inner_text(),
        None => el.text_content().unwrap_or_default(),
    };
    copy_source(&text, field_value(el))
}

fn field_value(el: &Element) -> Option<String> {
    if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
        return Some(input.value());
    }
    el.dyn_ref::<HtmlTextAreaElement>().map(|t| t.value())
}

/// Write `text` to the system clipboard.
pub async fn write_text(text: &str) -> Result<(), ViewError> {
    let clipboard = gloo_utils::window().navigator().clipboard();
    JsFuture::from(clipboard.write_text(text))
        .await
        .map(|_| ())
        .map_err(|e| ViewError::Clipboard(error::describe(&e)))
}

/// Copy the content of `el` to the clipboard, returning what was copied.
pub async fn copy_element(el: &Element) -> Result<String, ViewError> {
    let text = copyable_text(el);
    write_text(&text).await?;
    Ok(text)
}

/// Copy `el` on every click. The outcome only goes to the console.
pub fn attach_copy(el: &Element) -> Result<(), ViewError> {
    let target = el.clone();
    on_click!(el, move |_: web_sys::MouseEvent| {
        let target = target.clone();
        wasm_bindgen_futures::spawn_local(async move {
            match copy_element(&target).await {
                Ok(text) => console::log!(format!("Copied to clipboard: {}", text)),
                Err(e) => console::warn!(e.to_string()),
            }
        });
    });
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_falls_back_to_value() {
        assert_eq!(copy_source("", Some("secret".into())), "secret");
    }

    #[test]
    fn visible_text_wins_over_value() {
        assert_eq!(copy_source("visible", Some("secret".into())), "visible");
        assert_eq!(copy_source("visible", None), "visible");
    }

    #[test]
    fn nothing_to_copy_yields_empty_string() {
        assert_eq!(copy_source("", None), "");
    }
}
