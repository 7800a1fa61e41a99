//! Public key viewer, WASM frontend.
//!
//! Reads the lookup token from the page URL, fetches the matching record from
//! the key service and renders it, with click-to-copy on the public key and
//! hash and a show/hide toggle on the secret field. Everything that goes wrong
//! is reported to the browser console, never to the page.

#[macro_use]
pub mod dom;

pub mod api;
pub mod clipboard;
pub mod config;
pub mod error;
pub mod reveal;
pub mod url_key;
pub mod view;

use gloo_console as console;
use pk_api_types::KeyRecord;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::Document;

use crate::config::ViewConfig;
use crate::error::ViewError;
use crate::reveal::RevealToggle;
use crate::view::ViewSlots;

/// WASM entry point, called when the module is instantiated.
///
/// Defers to `DOMContentLoaded` if the document is still being parsed.
#[wasm_bindgen(start)]
pub fn start() {
    // Improve panic messages in the browser console
    console_error_panic_hook::set_once();

    let document = gloo_utils::document();
    if document.ready_state() != "loading" {
        initialize_logged(&document);
        return;
    }

    let deferred = document.clone();
    let cb = Closure::once(move || initialize_logged(&deferred));
    match document
        .add_event_listener_with_callback("DOMContentLoaded", cb.as_ref().unchecked_ref())
    {
        Ok(()) => cb.forget(),
        Err(e) => console::error!(error::describe(&e)),
    }
}

fn initialize_logged(document: &Document) {
    if let Err(e) = initialize(document, ViewConfig::load()) {
        console::error!(e.to_string());
    }
}

/// Wire the reveal toggle and start the fetch-and-bind pipeline.
///
/// The two are independent: the pipeline is started even when the toggle's
/// elements are missing, and the toggle stays wired if the fetch fails. The
/// returned error is always the toggle's; pipeline errors, including failing
/// to read the page URL, are logged when they happen.
pub fn initialize(document: &Document, config: ViewConfig) -> Result<(), ViewError> {
    console::log!("pk-view loaded");

    let reveal = RevealToggle::resolve(document, &config.ids).and_then(|t| t.wire());

    let document = document.clone();
    wasm_bindgen_futures::spawn_local(async move {
        let loaded = match document.url() {
            Ok(page_url) => load_and_bind(&document, &config, &page_url).await.map(|_| ()),
            Err(e) => Err(ViewError::from(e)),
        };
        if let Err(e) = loaded {
            console::error!(e.to_string());
        }
    });

    reveal
}

/// Resolve the view, fetch the record for `page_url`'s token and render it.
///
/// On any error the view is left as the page served it.
pub async fn load_and_bind(
    document: &Document,
    config: &ViewConfig,
    page_url: &str,
) -> Result<KeyRecord, ViewError> {
    let slots = ViewSlots::resolve(document, &config.ids)?;

    let token = url_key::extract_token(page_url);
    if token.is_none() {
        console::warn!(format!("no lookup token in {}", page_url));
    }

    let url = api::endpoint_for(&config.endpoint_base, token);
    let record = api::fetch_record(&url).await?;
    console::log!(format!("loaded {:?}", record));

    slots.bind(&record)?;
    Ok(record)
}
