//! Per-format adapters for [`Meta`] bodies.
//!
//! # Responsibilities
//! - Encode a `Meta` map as JSON, XML or plain text
//! - Build the response with the matching `Content-Type`
//!
//! # Design Decisions
//! - `Meta` carries no encoding logic; each format lives here
//! - Every adapter preserves the map's insertion order

mod xml;

use axum::body::Body;
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use serde_json::Value;

use crate::meta::Meta;
use crate::negotiation::Format;

pub use xml::to_xml;

/// Encode `meta` as a JSON object.
pub fn to_json(meta: &Meta) -> Result<Vec<u8>, serde_json::Error> {
    serde_json::to_vec(meta)
}

/// Plain-text rendering.
///
/// A `message` entry is the whole body when present. Otherwise each entry is
/// written as a `key: value` line.
pub fn to_plain(meta: &Meta) -> String {
    if let Some(Value::String(message)) = meta.get("message") {
        return message.clone();
    }

    meta.iter()
        .map(|(key, value)| match value {
            Value::String(s) => format!("{key}: {s}"),
            other => format!("{key}: {other}"),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render `meta` in `format` with the given status.
pub fn format(format: Format, status: StatusCode, meta: &Meta) -> Response {
    let body = match format {
        Format::Json => match to_json(meta) {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::error!(error = %e, "Failed to encode JSON body");
                return StatusCode::INTERNAL_SERVER_ERROR.into_response();
            }
        },
        Format::Xml => to_xml(meta).into_bytes(),
        Format::Plain => to_plain(meta).into_bytes(),
    };

    let mut response = Response::new(Body::from(body));
    *response.status_mut() = status;
    response.headers_mut().insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static(format.media_type()),
    );
    response
}
