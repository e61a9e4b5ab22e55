//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.
//! Every field has a default, so an empty file is a valid config.

use serde::{Deserialize, Serialize};

use crate::negotiation::Format;

/// Root configuration for the server.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ServerConfig {
    /// Listener configuration.
    pub listener: ListenerConfig,

    /// Route registration settings.
    pub routes: RoutesConfig,

    /// Content negotiation settings.
    pub negotiation: NegotiationConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
        }
    }
}

/// Route registration settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RoutesConfig {
    /// Base path every API route is composed under.
    pub base_path: String,
}

impl Default for RoutesConfig {
    fn default() -> Self {
        Self {
            base_path: "/api".to_string(),
        }
    }
}

/// Content negotiation settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct NegotiationConfig {
    /// Media types offered by negotiated routes, most preferred first.
    pub offered_formats: Vec<String>,
}

impl NegotiationConfig {
    /// Offered formats that map to a known `Format`, in configured order.
    pub fn formats(&self) -> Vec<Format> {
        self.offered_formats
            .iter()
            .filter_map(|media_type| Format::from_media_type(media_type))
            .collect()
    }
}

impl Default for NegotiationConfig {
    fn default() -> Self {
        Self {
            offered_formats: vec![
                Format::Json.media_type().to_string(),
                Format::Xml.media_type().to_string(),
                Format::Plain.media_type().to_string(),
            ],
        }
    }
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Total request timeout in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Default `tracing` filter; `RUST_LOG` takes precedence.
    pub log_filter: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_filter: "routekit=debug,tower_http=debug".to_string(),
        }
    }
}
