//! Representation selection.

use crate::error::FatalError;

/// Pick the representation to render.
///
/// The format-specific `custom` value wins; otherwise the `wildcard` value is
/// used. Both being absent means the route was set up wrong, so it is a
/// [`FatalError`] rather than a per-request error.
pub fn select_representation<T>(custom: Option<T>, wildcard: Option<T>) -> Result<T, FatalError> {
    custom.or(wildcard).ok_or(FatalError::InvalidNegotiation)
}
