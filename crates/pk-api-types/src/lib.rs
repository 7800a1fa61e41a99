use serde::Deserialize;
use std::fmt;

/// A published public key as served by `GET /<key>/`.
///
/// `key` is the lookup token the record was stored under and is treated as
/// sensitive: it is masked in the page and never printed by `Debug`.
#[derive(Clone, Deserialize, PartialEq, Eq)]
pub struct KeyRecord {
    pub title: String,
    pub publickey: String,
    /// Hex SHA-512 of `publickey`, computed by the service.
    pub hash: String,
    pub key: String,
    #[serde(default)]
    pub twitter: String,
    #[serde(default)]
    pub github: String,
    /// Milliseconds since the epoch, as a decimal string.
    #[serde(default)]
    pub timestamp: String,
}

impl fmt::Debug for KeyRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyRecord")
            .field("title", &self.title)
            .field("publickey", &self.publickey)
            .field("hash", &self.hash)
            .field("key", &"<redacted>")
            .field("twitter", &self.twitter)
            .field("github", &self.github)
            .field("timestamp", &self.timestamp)
            .finish()
    }
}

/// Error body returned by the service on non-2xx responses.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ServiceError {
    pub detail: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_full_service_response() {
        let body = r#"{
            "_id": "6290c1c5a3b4",
            "title": "Example Ed25519 Public Key",
            "publickey": "ssh-ed25519 AAAAC3NzaC1lZDI1NTE5AAAAIDbiwd0Ssu",
            "twitter": "",
            "github": "octocat",
            "key": "SgzFZB8Rqj",
            "hash": "531f75cb",
            "timestamp": "1653547807789"
        }"#;

        let record: KeyRecord = serde_json::from_str(body).unwrap();
        assert_eq!(record.title, "Example Ed25519 Public Key");
        assert_eq!(record.key, "SgzFZB8Rqj");
        assert_eq!(record.github, "octocat");
        assert_eq!(record.timestamp, "1653547807789");
    }

    #[test]
    fn optional_fields_default_to_empty() {
        let body = r#"{"title":"A","publickey":"B","hash":"C","key":"D"}"#;

        let record: KeyRecord = serde_json::from_str(body).unwrap();
        assert_eq!(record.publickey, "B");
        assert_eq!(record.hash, "C");
        assert!(record.twitter.is_empty());
        assert!(record.github.is_empty());
        assert!(record.timestamp.is_empty());
    }

    #[test]
    fn missing_required_field_is_rejected() {
        let body = r#"{"title":"A","publickey":"B","key":"D"}"#;
        assert!(serde_json::from_str::<KeyRecord>(body).is_err());
    }

    #[test]
    fn not_found_body_is_not_a_record() {
        let body = r#"{"detail":"Public key with key: nope not found"}"#;

        assert!(serde_json::from_str::<KeyRecord>(body).is_err());
        let err: ServiceError = serde_json::from_str(body).unwrap();
        assert_eq!(err.detail, "Public key with key: nope not found");
    }

    #[test]
    fn debug_output_redacts_key() {
        let record = KeyRecord {
            title: "A".into(),
            publickey: "B".into(),
            hash: "C".into(),
            key: "hunter2".into(),
            twitter: String::new(),
            github: String::new(),
            timestamp: String::new(),
        };

        let printed = format!("{record:?}");
        assert!(!printed.contains("hunter2"));
        assert!(printed.contains("<redacted>"));
    }
}
