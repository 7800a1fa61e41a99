//! HTTP client for the key service.
//!
//! One GET per page load, no auth headers, no retry, no timeout.

use gloo_console as console;
use gloo_net::http::Request;
use pk_api_types::{KeyRecord, ServiceError};

use crate::error::ViewError;

/// `base` + `token` + `/`. The token is not encoded; an absent token
/// contributes an empty segment and the request is still made.
pub fn endpoint_for(base: &str, token: Option<&str>) -> String {
    format!("{}{}/", base, token.unwrap_or_default())
}

/// GET `url` and decode the body as a [`KeyRecord`].
pub async fn fetch_record(url: &str) -> Result<KeyRecord, ViewError> {
    console::log!(url);

    let resp = Request::get(url)
        .send()
        .await
        .map_err(|source| ViewError::Request {
            url: url.to_string(),
            source,
        })?;

    if !resp.ok() {
        let body = resp.text().await.unwrap_or_default();
        return Err(ViewError::Status {
            url: url.to_string(),
            status: resp.status(),
            detail: status_detail(&body, &resp.status_text()),
        });
    }

    resp.json::<KeyRecord>()
        .await
        .map_err(|source| ViewError::Decode {
            url: url.to_string(),
            source,
        })
}

/// The service's `detail` message if the body carries one, else the raw body,
/// else the HTTP status text.
fn status_detail(body: &str, status_text: &str) -> String {
    if let Ok(err) = serde_json::from_str::<ServiceError>(body) {
        return err.detail;
    }
    let body = body.trim();
    if body.is_empty() {
        status_text.to_string()
    } else {
        body.to_string()
    }
}
