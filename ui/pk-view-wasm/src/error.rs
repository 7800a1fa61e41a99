//! Error type shared by every fallible operation in the viewer.
//!
//! None of these reach the user: the entry point logs them to the console.

use thiserror::Error;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

#[derive(Debug, Error)]
pub enum ViewError {
    #[error("missing element {selector}")]
    MissingElement { selector: String },

    #[error("element {selector} is not {expected}")]
    WrongElementType {
        selector: String,
        expected: &'static str,
    },

    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: gloo_net::Error,
    },

    #[error("{url} returned {status}: {detail}")]
    Status {
        url: String,
        status: u16,
        detail: String,
    },

    #[error("could not decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: gloo_net::Error,
    },

    #[error("clipboard write failed: {0}")]
    Clipboard(String),

    #[error("DOM error: {0}")]
    Dom(String),
}

impl From<JsValue> for ViewError {
    fn from(value: JsValue) -> Self {
        ViewError::Dom(describe(&value))
    }
}

impl From<ViewError> for JsValue {
    fn from(err: ViewError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}

/// Best-effort human readable text for a thrown JS value.
pub fn describe(value: &JsValue) -> String {
    if let Some(s) = value.as_string() {
        return s;
    }
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    format!("{:?}", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_element_names_selector() {
        let err = ViewError::MissingElement {
            selector: "#data-title".into(),
        };
        assert_eq!(err.to_string(), "missing element #data-title");
    }

    #[test]
    fn status_error_carries_detail() {
        let err = ViewError::Status {
            url: "http://127.0.0.1:80/K1/".into(),
            status: 404,
            detail: "Public key with key: K1 not found".into(),
        };
        assert_eq!(
            err.to_string(),
            "http://127.0.0.1:80/K1/ returned 404: Public key with key: K1 not found"
        );
    }
}
