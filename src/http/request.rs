//! Request extraction helpers.
//!
//! # Responsibilities
//! - Parse record ids from the path without rejecting odd input
//! - Decode the creation payload, treating non-JSON or empty bodies as `{}`
//! - Name the request id header shared by the middleware stack

use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::http::{header, HeaderMap, HeaderName, StatusCode};

use crate::http::response::ApiError;
use crate::phonebook::{NewPerson, PersonId};

pub const X_REQUEST_ID: HeaderName = HeaderName::from_static("x-request-id");

/// Parse a path segment as a record id.
///
/// Anything that is not a non-negative integer yields `None`, which matches
/// no record.
pub fn parse_id(raw: &str) -> Option<PersonId> {
    raw.trim().parse().ok()
}

/// Resolve the creation payload from the raw request body.
///
/// A body without a JSON content type, or an empty one, is read as an empty
/// object so it fails the field checks rather than the parsing.
pub fn new_person_payload(
    headers: &HeaderMap,
    body: Result<Bytes, BytesRejection>,
) -> Result<NewPerson, ApiError> {
    let body = match body {
        Ok(body) => body,
        Err(rejection) if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE => {
            return Err(ApiError::PayloadTooLarge);
        }
        Err(rejection) => {
            tracing::debug!(reason = %rejection.body_text(), "Failed to read request body");
            return Err(ApiError::MalformedBody);
        }
    };

    if !is_json(headers) || body.iter().all(u8::is_ascii_whitespace) {
        return Ok(NewPerson::default());
    }

    serde_json::from_slice(&body).map_err(|e| {
        tracing::debug!(reason = %e, "Rejected request body");
        ApiError::MalformedBody
    })
}

/// `application/json` or any `+json` media type, parameters ignored.
fn is_json(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers.get(header::CONTENT_TYPE).and_then(|v| v.to_str().ok())
    else {
        return false;
    };
    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    essence == "application/json"
        || (essence.starts_with("application/") && essence.ends_with("+json"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("42"), Some(42));
        assert_eq!(parse_id(" 7 "), Some(7));
        assert_eq!(parse_id("abc"), None);
        assert_eq!(parse_id("-1"), None);
        assert_eq!(parse_id(""), None);
        assert_eq!(parse_id("1.0"), None);
        assert_eq!(parse_id("1e0"), None);
    }

    fn json_headers(content_type: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::CONTENT_TYPE, content_type.parse().unwrap());
        headers
    }

    #[test]
    fn test_empty_json_body_reads_as_empty_object() {
        let headers = json_headers("application/json");
        for body in ["", "  \n"] {
            let payload = new_person_payload(&headers, Ok(Bytes::from(body))).unwrap();
            assert!(payload.name.is_none() && payload.number.is_none());
        }
    }

    #[test]
    fn test_json_content_type_variants() {
        let body = || Ok(Bytes::from_static(br#"{"name":"A","number":"1"}"#));
        for content_type in [
            "application/json",
            "Application/JSON; charset=utf-8",
            "application/merge-patch+json",
        ] {
            let payload = new_person_payload(&json_headers(content_type), body()).unwrap();
            assert_eq!(payload.name.as_deref(), Some("A"));
        }

        let payload = new_person_payload(&json_headers("text/plain"), body()).unwrap();
        assert!(payload.name.is_none());
        let payload = new_person_payload(&HeaderMap::new(), body()).unwrap();
        assert!(payload.name.is_none());
    }

    #[test]
    fn test_invalid_json_is_malformed() {
        let headers = json_headers("application/json");
        let err = new_person_payload(&headers, Ok(Bytes::from_static(b"{not json"))).unwrap_err();
        assert!(matches!(err, ApiError::MalformedBody));
    }
}
