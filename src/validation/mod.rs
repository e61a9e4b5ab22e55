//! Request body validation.
//!
//! # Data Flow
//! ```text
//! Request body
//!     → bind.rs (decode + required-field check) → BindError
//!     → aggregate.rs (field list + sentence) → RequestError
//!     → http::recovery (4xx body, or 500 for fatal)
//! ```
//!
//! # Design Decisions
//! - The binder reports an explicit `BindError` variant; no downcasting
//! - Only field failures are reshaped, everything else passes through
//! - Field names are lower-cased for clients, order follows the binder

pub mod aggregate;
pub mod bind;
pub mod error;

pub use aggregate::{aggregate, field_list, to_human};
pub use bind::{bind_json, content_type_is_json};
pub use error::{AggregatedBindError, BindError, FieldError, FieldErrors, RequestError};
