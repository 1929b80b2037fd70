//! Framework-neutral HTTP request/response entities.
//!
//! Adapters convert their native request type into [`IncomingRequest`] and
//! render [`OutgoingResponse`] back out. Header names in both maps are
//! lowercase.

use std::collections::BTreeMap;

use bytes::Bytes;

pub const CORS_ALLOW_ORIGIN: &str = "*";
pub const CORS_ALLOW_METHODS: &str = "GET, POST, OPTIONS";
pub const CORS_ALLOW_HEADERS: &str = "Content-Type, Authorization";
pub const TEXT_PLAIN_UTF8: &str = "text/plain; charset=utf-8";

/// CORS headers attached to every response.
pub const fn cors_headers() -> [(&'static str, &'static str); 3] {
    [
        ("access-control-allow-origin", CORS_ALLOW_ORIGIN),
        ("access-control-allow-methods", CORS_ALLOW_METHODS),
        ("access-control-allow-headers", CORS_ALLOW_HEADERS),
    ]
}

/// An inbound call as seen by the rewrite pipeline.
#[derive(Debug, Clone, Default)]
pub struct IncomingRequest {
    pub method: String,
    pub headers: BTreeMap<String, String>,
    pub body: Bytes,
}

impl IncomingRequest {
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.headers.insert(name.to_ascii_lowercase(), value.into());
        self
    }

    #[must_use]
    pub fn with_body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = body.into();
        self
    }

    /// `OPTIONS`, in any letter case.
    pub fn is_preflight(&self) -> bool {
        self.method.eq_ignore_ascii_case("OPTIONS")
    }
}

/// The single response produced for each [`IncomingRequest`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingResponse {
    pub status: u16,
    pub headers: BTreeMap<String, String>,
    pub body: String,
}

impl OutgoingResponse {
    fn with_cors(status: u16, body: String) -> Self {
        let headers = cors_headers()
            .into_iter()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect();
        Self {
            status,
            headers,
            body,
        }
    }

    /// 204 reply to a CORS preflight.
    pub fn preflight() -> Self {
        Self::with_cors(204, String::new())
    }

    /// Plain-text response with CORS headers.
    pub fn text(status: u16, body: impl Into<String>) -> Self {
        let mut response = Self::with_cors(status, body.into());
        response
            .headers
            .insert("content-type".to_string(), TEXT_PLAIN_UTF8.to_string());
        response
    }

    /// 200 plain-text response.
    pub fn ok(body: impl Into<String>) -> Self {
        Self::text(200, body)
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preflight_detection_is_case_insensitive() {
        assert!(IncomingRequest::new("OPTIONS").is_preflight());
        assert!(IncomingRequest::new("options").is_preflight());
        assert!(IncomingRequest::new("Options").is_preflight());
        assert!(!IncomingRequest::new("POST").is_preflight());
    }

    #[test]
    fn test_preflight_response() {
        let response = OutgoingResponse::preflight();
        assert_eq!(response.status, 204);
        assert!(response.body.is_empty());
        assert_eq!(response.header("Access-Control-Allow-Origin"), Some("*"));
        assert_eq!(
            response.header("access-control-allow-methods"),
            Some("GET, POST, OPTIONS")
        );
        assert_eq!(
            response.header("access-control-allow-headers"),
            Some("Content-Type, Authorization")
        );
        assert!(response.header("content-type").is_none());
    }

    #[test]
    fn test_text_response_carries_cors_and_content_type() {
        let response = OutgoingResponse::text(400, "Invalid JSON");
        assert_eq!(response.status, 400);
        assert_eq!(response.body, "Invalid JSON");
        assert_eq!(response.header("access-control-allow-origin"), Some("*"));
        assert_eq!(response.header("content-type"), Some(TEXT_PLAIN_UTF8));
    }

    #[test]
    fn test_request_headers_are_lowercased() {
        let request = IncomingRequest::new("POST").with_header("Content-Type", "application/json");
        assert_eq!(
            request.headers.get("content-type").map(String::as_str),
            Some("application/json")
        );
    }
}
