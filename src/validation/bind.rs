//! Minimal JSON body binder.
//!
//! Decodes a body into a JSON object and reports required fields that are
//! missing. Field errors are keyed by the names the caller declared, so a
//! route requiring `Name` reports `Name` even though the JSON key is `name`.

use axum::http::{header::CONTENT_TYPE, HeaderMap};
use serde_json::Value;

use crate::negotiation::Format;
use crate::validation::error::{BindError, FieldError, FieldErrors};

/// Reject bodies whose `Content-Type` is not JSON.
///
/// Parameters such as `charset` are ignored. A missing header is accepted.
pub fn content_type_is_json(headers: &HeaderMap) -> Result<(), BindError> {
    let Some(value) = headers.get(CONTENT_TYPE) else {
        return Ok(());
    };
    let content_type = value
        .to_str()
        .map_err(|_| BindError::UnsupportedMediaType("<non-ascii>".to_string()))?;
    let media_type = content_type.split(';').next().unwrap_or_default().trim();

    match Format::from_media_type(media_type) {
        Some(Format::Json) => Ok(()),
        _ => Err(BindError::UnsupportedMediaType(media_type.to_string())),
    }
}

/// Decode `body` and check that every `required` field is present.
///
/// Keys are matched ASCII case-insensitively; a `null` value counts as
/// missing. Missing fields are reported in the order of `required`.
pub fn bind_json(body: &[u8], required: &[&str]) -> Result<Value, BindError> {
    let value: Value = serde_json::from_slice(body).map_err(|e| BindError::Decode(e.to_string()))?;
    let Value::Object(object) = &value else {
        return Err(BindError::Decode("expected a JSON object".to_string()));
    };

    let missing: FieldErrors = required
        .iter()
        .filter(|field| {
            !object
                .iter()
                .any(|(key, v)| key.eq_ignore_ascii_case(field) && !v.is_null())
        })
        .map(|field| (field.to_string(), FieldError::required()))
        .collect();

    if missing.is_empty() {
        Ok(value)
    } else {
        tracing::debug!(missing = ?missing.keys().collect::<Vec<_>>(), "Required fields missing");
        Err(BindError::Fields(missing))
    }
}
