//! `Accept` header parsing.

use axum::http::{header::ACCEPT, HeaderMap};

/// Media types listed in an `Accept` header, in order of appearance.
///
/// Parameters (`;q=0.9`, `;charset=...`) are discarded and entries are
/// trimmed. Empty entries are dropped. Quality values are not used for
/// ordering and duplicates are kept.
pub fn parse_accept_header(header: &str) -> Vec<String> {
    header
        .split(',')
        .map(|part| match part.find(';') {
            Some(index) => &part[..index],
            None => part,
        })
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}

/// Media types accepted by the client, read from the request headers.
///
/// A missing or non-UTF-8 header yields an empty list.
pub fn accepted_media_types(headers: &HeaderMap) -> Vec<String> {
    headers
        .get(ACCEPT)
        .and_then(|value| value.to_str().ok())
        .map(parse_accept_header)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_strips_parameters_and_whitespace() {
        assert_eq!(
            parse_accept_header("text/html; q=0.9, application/json"),
            vec!["text/html", "application/json"]
        );
    }

    #[test]
    fn test_empty_header() {
        assert!(parse_accept_header("").is_empty());
        assert!(parse_accept_header(" , ;q=1,").is_empty());
    }

    #[test]
    fn test_keeps_order_and_duplicates() {
        assert_eq!(
            parse_accept_header("application/xml;q=0.1,text/plain,application/xml"),
            vec!["application/xml", "text/plain", "application/xml"]
        );
    }

    #[test]
    fn test_quality_does_not_reorder() {
        let parsed = parse_accept_header("text/plain;q=0.1, application/json;q=1.0");
        assert_eq!(parsed[0], "text/plain");
    }

    #[test]
    fn test_from_headers() {
        let mut headers = HeaderMap::new();
        assert!(accepted_media_types(&headers).is_empty());

        headers.insert(ACCEPT, HeaderValue::from_static("application/json, */*;q=0.8"));
        assert_eq!(accepted_media_types(&headers), vec!["application/json", "*/*"]);
    }
}
