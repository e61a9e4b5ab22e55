//! Errors produced while binding and validating request bodies.

use std::fmt;

use indexmap::IndexMap;
use thiserror::Error;

use crate::error::{ErrorKind, FatalError};
use crate::meta::Meta;

/// Failure descriptor for a single field. Only the binder reads its content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Name of the failed rule, e.g. `required`.
    pub tag: String,
}

impl FieldError {
    pub fn required() -> Self {
        Self {
            tag: "required".to_string(),
        }
    }
}

/// Per-field failures keyed by field name, in the order they were reported.
pub type FieldErrors = IndexMap<String, FieldError>;

/// What the binding collaborator returns when a body is rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BindError {
    /// One or more fields failed validation.
    #[error("{} field(s) failed validation", .0.len())]
    Fields(FieldErrors),

    /// Body could not be decoded.
    #[error("malformed request body: {0}")]
    Decode(String),

    /// Body was sent with a media type the binder does not handle.
    #[error("unsupported media type: {0}")]
    UnsupportedMediaType(String),
}

/// Field failures summarized for clients.
///
/// Holds the binder's original error (also its [`Error::source`]), the
/// [`ErrorKind::Bind`] tag and a [`Meta`] with `message` and `fields`
/// entries.
///
/// [`Error::source`]: std::error::Error::source
#[derive(Debug, Clone, PartialEq)]
pub struct AggregatedBindError {
    source: BindError,
    kind: ErrorKind,
    meta: Meta,
}

impl AggregatedBindError {
    pub(crate) fn new(errors: FieldErrors, message: String, fields: Vec<String>) -> Self {
        let meta = Meta::new().with("message", message).with("fields", fields);
        Self {
            source: BindError::Fields(errors),
            kind: ErrorKind::Bind,
            meta,
        }
    }

    /// The binder error this envelope was built from.
    pub fn cause(&self) -> &BindError {
        &self.source
    }

    /// Field errors as reported by the binder.
    pub fn errors(&self) -> Option<&FieldErrors> {
        match &self.source {
            BindError::Fields(errors) => Some(errors),
            _ => None,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn meta(&self) -> &Meta {
        &self.meta
    }

    pub fn message(&self) -> &str {
        self.meta
            .get("message")
            .and_then(|v| v.as_str())
            .unwrap_or_default()
    }

    /// Lower-cased field names.
    pub fn fields(&self) -> Vec<&str> {
        self.meta
            .get("fields")
            .and_then(|v| v.as_array())
            .map(|items| items.iter().filter_map(|v| v.as_str()).collect())
            .unwrap_or_default()
    }
}

impl fmt::Display for AggregatedBindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} error: {}", self.kind.as_str(), self.message())
    }
}

impl std::error::Error for AggregatedBindError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

/// Error returned to a request handler.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RequestError {
    /// Field failures, aggregated.
    #[error(transparent)]
    Bind(AggregatedBindError),

    /// Any other binder error, unchanged.
    #[error(transparent)]
    Other(BindError),

    /// Broken precondition; becomes a 500 at the recovery boundary.
    #[error(transparent)]
    Fatal(#[from] FatalError),
}

impl RequestError {
    pub fn is_fatal(&self) -> bool {
        matches!(self, RequestError::Fatal(_))
    }
}
