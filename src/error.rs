//! Shared error types.
//!
//! Two categories flow through the crate:
//! - Recoverable per-call errors (see [`crate::validation::RequestError`]),
//!   returned as values and rendered as 4xx responses.
//! - [`FatalError`]: broken caller preconditions. These abort the current
//!   request only and are turned into a 500 at the recovery boundary
//!   (`http::recovery`).

use thiserror::Error;

/// Precondition violations raised by programmer or configuration mistakes.
///
/// Never retried and never silently defaulted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FatalError {
    /// A caller passed an argument that breaks the operation's contract.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// Neither a custom nor a wildcard representation was configured.
    #[error("negotiation config is invalid")]
    InvalidNegotiation,
}

/// Classification tag carried by error envelopes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Request body failed to bind or validate.
    Bind,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Bind => "bind",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negotiation_message() {
        assert_eq!(
            FatalError::InvalidNegotiation.to_string(),
            "negotiation config is invalid"
        );
    }

    #[test]
    fn test_invalid_argument_message() {
        let err = FatalError::InvalidArgument("string must not be empty");
        assert_eq!(err.to_string(), "invalid argument: string must not be empty");
    }
}
