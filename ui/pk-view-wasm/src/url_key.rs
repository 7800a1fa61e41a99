//! Lookup token extraction from the page address.

/// Everything after the first `?` in `url`, verbatim.
///
/// No percent-decoding and no validation: `"page?"` yields `Some("")`, a
/// fragment after the query stays part of the token, and a URL without `?`
/// yields `None`.
pub fn extract_token(url: &str) -> Option<&str> {
    url.split_once('?').map(|(_, rest)| rest)
}
