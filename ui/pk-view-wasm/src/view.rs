//! Record → DOM binding.

use pk_api_types::KeyRecord;
use web_sys::{Document, Element, HtmlInputElement};

use crate::clipboard;
use crate::config::ElementIds;
use crate::dom;
use crate::error::ViewError;

/// Targets the record is rendered into, resolved once up front.
///
/// `key` is an input and receives a value; the rest receive text. The
/// supplemental slots are bound only when the page provides them.
pub struct ViewSlots {
    pub title: Element,
    pub pubkey: Element,
    pub sha512: Element,
    pub key: HtmlInputElement,
    pub twitter: Option<Element>,
    pub github: Option<Element>,
    pub timestamp: Option<Element>,
}

impl ViewSlots {
    /// Fails on the first required element that is absent.
    pub fn resolve(document: &Document, ids: &ElementIds) -> Result<Self, ViewError> {
        Ok(ViewSlots {
            title: get_el!(document, &ids.title),
            pubkey: get_el!(document, &ids.pubkey),
            sha512: get_el!(document, &ids.sha512),
            key: get_input!(document, &ids.key),
            twitter: dom::optional(document, &ids.twitter),
            github: dom::optional(document, &ids.github),
            timestamp: dom::optional(document, &ids.timestamp),
        })
    }

    /// Write every field, then make the public key and hash click-to-copy.
    pub fn bind(&self, record: &KeyRecord) -> Result<(), ViewError> {
        dom::set_text(&self.title, &record.title);
        dom::set_text(&self.pubkey, &record.publickey);
        dom::set_text(&self.sha512, &record.hash);
        self.key.set_value(&record.key);

        let extras = [
            (&self.twitter, &record.twitter),
            (&self.github, &record.github),
            (&self.timestamp, &record.timestamp),
        ];
        for (slot, text) in extras {
            if let Some(el) = slot {
                dom::set_text(el, text);
            }
        }

        clipboard::attach_copy(&self.pubkey)?;
        clipboard::attach_copy(&self.sha512)?;
        Ok(())
    }
}
