//! Viewer configuration.
//!
//! Defaults match the stock page and the local service. A page may override
//! any subset by storing JSON under `localStorage["pk_view_config"]`, e.g.
//! `{"endpoint_base": "http://127.0.0.1:8000/"}`.

use gloo_console as console;
use gloo_storage::errors::StorageError;
use gloo_storage::{LocalStorage, Storage};
use serde::Deserialize;

pub const DEFAULT_ENDPOINT_BASE: &str = "http://127.0.0.1:80/";
pub const CONFIG_STORAGE_KEY: &str = "pk_view_config";

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// Prefix the lookup token is appended to. Must carry its own trailing `/`.
    pub endpoint_base: String,
    pub ids: ElementIds,
}

/// Element ids the viewer binds to. Optional slots may be set to `""`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ElementIds {
    pub title: String,
    pub pubkey: String,
    pub sha512: String,
    pub key: String,
    pub overlay: String,
    pub icon: String,
    pub twitter: String,
    pub github: String,
    pub timestamp: String,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            endpoint_base: DEFAULT_ENDPOINT_BASE.to_string(),
            ids: ElementIds::default(),
        }
    }
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            title: "data-title".into(),
            pubkey: "data-pubkey".into(),
            sha512: "data-sha512".into(),
            key: "data-key".into(),
            overlay: "input-overlay".into(),
            icon: "input-icon".into(),
            twitter: "data-twitter".into(),
            github: "data-github".into(),
            timestamp: "data-timestamp".into(),
        }
    }
}

impl ViewConfig {
    /// Defaults, overlaid with the page-local override when one is stored.
    /// A malformed override is logged and ignored.
    pub fn load() -> Self {
        match LocalStorage::get::<ViewConfig>(CONFIG_STORAGE_KEY) {
            Ok(config) => config,
            Err(StorageError::KeyNotFound(_)) => Self::default(),
            Err(err) => {
                console::warn!(format!(
                    "ignoring localStorage[{CONFIG_STORAGE_KEY}]: {err}"
                ));
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_stock_page() {
        let config = ViewConfig::default();
        assert_eq!(config.endpoint_base, "http://127.0.0.1:80/");
        assert_eq!(config.ids.title, "data-title");
        assert_eq!(config.ids.pubkey, "data-pubkey");
        assert_eq!(config.ids.sha512, "data-sha512");
        assert_eq!(config.ids.key, "data-key");
        assert_eq!(config.ids.overlay, "input-overlay");
        assert_eq!(config.ids.icon, "input-icon");
    }

    #[test]
    fn partial_override_keeps_remaining_defaults() {
        let config: ViewConfig =
            serde_json::from_str(r#"{"endpoint_base":"http://10.0.0.2:8000/"}"#).unwrap();
        assert_eq!(config.endpoint_base, "http://10.0.0.2:8000/");
        assert_eq!(config.ids, ElementIds::default());
    }

    #[test]
    fn nested_override_merges_ids() {
        let config: ViewConfig =
            serde_json::from_str(r#"{"ids":{"title":"heading","twitter":""}}"#).unwrap();
        assert_eq!(config.endpoint_base, DEFAULT_ENDPOINT_BASE);
        assert_eq!(config.ids.title, "heading");
        assert_eq!(config.ids.twitter, "");
        assert_eq!(config.ids.pubkey, "data-pubkey");
    }
}
