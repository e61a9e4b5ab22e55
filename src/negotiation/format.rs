//! Response formats and format selection.

use std::fmt;

use crate::error::FatalError;

/// Wildcard media range.
pub const ANY: &str = "*/*";

/// Output formats a route can offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    Json,
    Xml,
    Plain,
}

impl Format {
    /// Canonical media type, used for `Content-Type`.
    pub const fn media_type(&self) -> &'static str {
        match self {
            Format::Json => "application/json",
            Format::Xml => "application/xml",
            Format::Plain => "text/plain",
        }
    }

    /// Map a media type token to a format. Case-insensitive.
    pub fn from_media_type(media_type: &str) -> Option<Self> {
        match media_type.to_ascii_lowercase().as_str() {
            "application/json" => Some(Format::Json),
            "application/xml" | "text/xml" => Some(Format::Xml),
            "text/plain" => Some(Format::Plain),
            _ => None,
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.media_type())
    }
}

/// Choose the format to answer with.
///
/// Walks `accepted` front to back and returns the first offered format it
/// names; `*/*` selects the first offered format. A client that sent no
/// `Accept` entries gets the first offered format. `Ok(None)` means nothing
/// offered is acceptable (406). An empty `offered` list is a route setup
/// mistake and is fatal.
pub fn negotiate_format(
    accepted: &[String],
    offered: &[Format],
) -> Result<Option<Format>, FatalError> {
    let first = offered
        .first()
        .copied()
        .ok_or(FatalError::InvalidArgument("at least one format must be offered"))?;

    if accepted.is_empty() {
        return Ok(Some(first));
    }

    for media_type in accepted {
        if media_type == ANY {
            return Ok(Some(first));
        }
        if let Some(format) = Format::from_media_type(media_type) {
            if offered.contains(&format) {
                return Ok(Some(format));
            }
        }
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn accepted(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_media_type_mapping() {
        assert_eq!(Format::from_media_type("Application/JSON"), Some(Format::Json));
        assert_eq!(Format::from_media_type("text/xml"), Some(Format::Xml));
        assert_eq!(Format::from_media_type("text/html"), None);
        assert_eq!(Format::Plain.to_string(), "text/plain");
    }

    #[test]
    fn test_no_accept_picks_first_offered() {
        let chosen = negotiate_format(&[], &[Format::Xml, Format::Json]).unwrap();
        assert_eq!(chosen, Some(Format::Xml));
    }

    #[test]
    fn test_header_order_wins() {
        let offered = [Format::Json, Format::Xml, Format::Plain];
        let chosen = negotiate_format(
            &accepted(&["text/html", "text/plain", "application/json"]),
            &offered,
        );
        assert_eq!(chosen, Ok(Some(Format::Plain)));
    }

    #[test]
    fn test_wildcard_picks_first_offered() {
        let chosen =
            negotiate_format(&accepted(&["image/png", "*/*"]), &[Format::Plain, Format::Json]);
        assert_eq!(chosen, Ok(Some(Format::Plain)));
    }

    #[test]
    fn test_nothing_acceptable() {
        let chosen = negotiate_format(&accepted(&["text/html"]), &[Format::Json]);
        assert_eq!(chosen, Ok(None));
    }

    #[test]
    fn test_empty_offer_is_fatal() {
        assert!(matches!(
            negotiate_format(&accepted(&["application/json"]), &[]),
            Err(FatalError::InvalidArgument(_))
        ));
    }
}
