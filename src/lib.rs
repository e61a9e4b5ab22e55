//! Request-handling support for HTTP routing layers.
//!
//! - `routing`: compose route paths under a base path
//! - `negotiation`: parse `Accept` and pick a response representation
//! - `validation`: bind bodies and aggregate field failures into one error
//! - `render`: JSON / XML / plain-text adapters for [`Meta`] bodies
//! - `http`: an Axum server wiring these together behind a recovery boundary

pub mod config;
pub mod error;
pub mod http;
pub mod meta;
pub mod negotiation;
pub mod observability;
pub mod render;
pub mod routing;
pub mod validation;

pub use config::schema::ServerConfig;
pub use error::{ErrorKind, FatalError};
pub use http::AppServer;
pub use meta::Meta;
pub use negotiation::{parse_accept_header, select_representation};
pub use routing::compose;
pub use validation::{aggregate, AggregatedBindError, BindError, RequestError};
