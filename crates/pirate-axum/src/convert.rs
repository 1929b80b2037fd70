//! Conversions between axum types and the core request/response entities.

use std::collections::BTreeMap;

use axum::body::{Body, Bytes};
use axum::http::header::{HeaderName, HeaderValue};
use axum::http::{HeaderMap, Method, StatusCode};
use axum::response::Response;
use pirate_core::domain::cors_headers;
use pirate_core::{IncomingRequest, OutgoingResponse};
use tracing::warn;

/// Build an [`IncomingRequest`] from axum request parts.
///
/// Repeated headers are joined with `", "`. Header values that are not
/// visible ASCII are dropped.
pub fn into_incoming(method: &Method, headers: &HeaderMap, body: Bytes) -> IncomingRequest {
    let mut map: BTreeMap<String, String> = BTreeMap::new();
    for (name, value) in headers {
        let Ok(value) = value.to_str() else {
            continue;
        };
        map.entry(name.as_str().to_string())
            .and_modify(|existing| {
                existing.push_str(", ");
                existing.push_str(value);
            })
            .or_insert_with(|| value.to_string());
    }

    IncomingRequest {
        method: method.as_str().to_string(),
        headers: map,
        body,
    }
}

/// Render an [`OutgoingResponse`] as an axum response.
///
/// Only the headers carried by `response` are set; an empty 204 body gets no
/// content type.
pub fn into_axum_response(response: OutgoingResponse) -> Response {
    let status =
        StatusCode::from_u16(response.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    let mut out = Response::new(Body::from(response.body));
    *out.status_mut() = status;

    let headers = out.headers_mut();
    for (name, value) in response.headers {
        match (
            HeaderName::from_bytes(name.as_bytes()),
            HeaderValue::from_str(&value),
        ) {
            (Ok(name), Ok(value)) => {
                headers.insert(name, value);
            }
            _ => warn!(header = %name, "Dropping invalid response header"),
        }
    }
    out
}

/// Attach the CORS header set to an existing response.
pub fn apply_cors(headers: &mut HeaderMap) {
    for (name, value) in cors_headers() {
        headers.insert(
            HeaderName::from_static(name),
            HeaderValue::from_static(value),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_incoming_joins_repeated_headers() {
        let mut headers = HeaderMap::new();
        headers.append("x-forwarded-for", HeaderValue::from_static("10.0.0.1"));
        headers.append("x-forwarded-for", HeaderValue::from_static("10.0.0.2"));
        headers.insert("content-type", HeaderValue::from_static("application/json"));

        let request = into_incoming(&Method::POST, &headers, Bytes::from_static(b"{}"));

        assert_eq!(request.method, "POST");
        assert_eq!(
            request.headers.get("x-forwarded-for").map(String::as_str),
            Some("10.0.0.1, 10.0.0.2")
        );
        assert_eq!(&request.body[..], b"{}");
    }

    #[test]
    fn test_preflight_has_no_content_type() {
        let response = into_axum_response(OutgoingResponse::preflight());
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        assert!(response.headers().get("content-type").is_none());
        assert_eq!(response.headers()["access-control-allow-origin"], "*");
    }

    #[test]
    fn test_text_response_headers() {
        let response = into_axum_response(OutgoingResponse::text(502, "bad"));
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        assert_eq!(
            response.headers()["content-type"],
            "text/plain; charset=utf-8"
        );
        assert_eq!(
            response.headers()["access-control-allow-methods"],
            "GET, POST, OPTIONS"
        );
    }

    #[test]
    fn test_apply_cors() {
        let mut headers = HeaderMap::new();
        apply_cors(&mut headers);
        assert_eq!(headers.len(), 3);
        assert_eq!(
            headers["access-control-allow-headers"],
            "Content-Type, Authorization"
        );
    }
}
