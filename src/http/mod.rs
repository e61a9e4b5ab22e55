//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack)
//!     → request.rs (request ID)
//!     → recovery.rs (per-request boundary: fatal errors and panics → 500)
//!     → handlers.rs (negotiate / bind + aggregate)
//!     → Send to client
//! ```

pub mod handlers;
pub mod recovery;
pub mod request;
pub mod server;

pub use recovery::{error_format, error_response, with_recovery};
pub use request::{MakeRequestUuidV4, X_REQUEST_ID};
pub use server::{AppServer, AppState};
