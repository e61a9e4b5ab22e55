//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges and formats
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Pure function: `&ServerConfig → Result<(), Vec<ValidationError>>`
//! - Runs before the config is accepted by the server

use std::net::SocketAddr;

use thiserror::Error;

use crate::config::schema::ServerConfig;
use crate::negotiation::Format;

/// A single semantic problem in the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("listener.bind_address {0:?} is not a socket address")]
    BindAddress(String),

    #[error("routes.base_path {0:?} must start with '/'")]
    BasePath(String),

    #[error("negotiation.offered_formats must not be empty")]
    NoOfferedFormats,

    #[error("negotiation.offered_formats contains unknown media type {0:?}")]
    UnknownFormat(String),

    #[error("timeouts.request_secs must be greater than 0")]
    ZeroTimeout,
}

pub fn validate_config(config: &ServerConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::BindAddress(config.listener.bind_address.clone()));
    }

    if !config.routes.base_path.starts_with('/') {
        errors.push(ValidationError::BasePath(config.routes.base_path.clone()));
    }

    if config.negotiation.offered_formats.is_empty() {
        errors.push(ValidationError::NoOfferedFormats);
    }
    for media_type in &config.negotiation.offered_formats {
        if Format::from_media_type(media_type).is_none() {
            errors.push(ValidationError::UnknownFormat(media_type.clone()));
        }
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroTimeout);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
