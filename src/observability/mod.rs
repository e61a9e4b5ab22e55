//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (structured log events via `tracing`)
//!
//! HTTP layer adds:
//!     → TraceLayer spans per request
//!     → x-request-id on every request and response
//! ```
//!
//! # Design Decisions
//! - Structured fields rather than formatted strings
//! - Request ID flows through every log line about a request

pub mod logging;
