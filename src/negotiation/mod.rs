//! Content negotiation.
//!
//! # Data Flow
//! ```text
//! Request headers
//!     → accept.rs (Accept → ordered media type list)
//!     → format.rs (first offered format the client accepts)
//!     → choice.rs (format-specific data, else wildcard data)
//!     → render (format adapter)
//! ```
//!
//! # Design Decisions
//! - Header order is preference order; `q=` weights are ignored
//! - No acceptable format → 406, a normal per-request outcome
//! - Missing data for every format is a route setup bug → `FatalError`

pub mod accept;
pub mod choice;
pub mod format;

pub use accept::{accepted_media_types, parse_accept_header};
pub use choice::select_representation;
pub use format::{negotiate_format, Format};

use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};

use crate::error::FatalError;
use crate::meta::Meta;
use crate::render;

/// Formats a route offers and the data to render for each.
#[derive(Debug, Clone, Default)]
pub struct Negotiation {
    pub offered: Vec<Format>,
    pub json: Option<Meta>,
    pub xml: Option<Meta>,
    pub plain: Option<Meta>,
    /// Fallback used for any format without its own data.
    pub data: Option<Meta>,
}

impl Negotiation {
    pub fn new(offered: impl Into<Vec<Format>>) -> Self {
        Self {
            offered: offered.into(),
            ..Default::default()
        }
    }

    pub fn data(mut self, data: Meta) -> Self {
        self.data = Some(data);
        self
    }

    pub fn json(mut self, data: Meta) -> Self {
        self.json = Some(data);
        self
    }

    pub fn xml(mut self, data: Meta) -> Self {
        self.xml = Some(data);
        self
    }

    pub fn plain(mut self, data: Meta) -> Self {
        self.plain = Some(data);
        self
    }

    fn custom(&self, format: Format) -> Option<&Meta> {
        match format {
            Format::Json => self.json.as_ref(),
            Format::Xml => self.xml.as_ref(),
            Format::Plain => self.plain.as_ref(),
        }
    }
}

/// Render the negotiated representation for a request.
pub fn negotiate(headers: &HeaderMap, negotiation: &Negotiation) -> Result<Response, FatalError> {
    let accepted = accepted_media_types(headers);
    let Some(format) = negotiate_format(&accepted, &negotiation.offered)? else {
        tracing::debug!(
            accepted = ?accepted,
            offered = ?negotiation.offered,
            "No acceptable format"
        );
        return Ok(StatusCode::NOT_ACCEPTABLE.into_response());
    };

    let data = select_representation(negotiation.custom(format), negotiation.data.as_ref())?;
    Ok(render::format(format, StatusCode::OK, data))
}
