//! Routing support.
//!
//! # Data Flow
//! ```text
//! Route registration (at startup):
//!     RouteGroup base path + relative path
//!     → path.rs (compose: join, clean, restore trailing slash)
//!     → axum Router (tree matching lives there)
//! ```
//!
//! # Design Decisions
//! - Paths are composed once at registration, never per request
//! - Composition is deterministic: same inputs always give the same path
//! - Trailing slashes are meaningful (`/users/` and `/users` differ)

pub mod group;
pub mod path;

pub use group::RouteGroup;
pub use path::compose;
