//! Integration tests against a live server.
//!
//! Verifies over real sockets that:
//! - OPTIONS preflight requests get 204 with the CORS header set
//! - a full rewrite round-trips through the reqwest provider to an upstream
//! - upstream errors surface as 500

mod common;

use axum::Router;
use axum::http::{HeaderMap, StatusCode as AxumStatus};
use axum::routing::post;
use pirate_axum::{REWRITE_PATH, bootstrap};
use pirate_core::testing::FakeProvider;
use reqwest::{Method, StatusCode, header};
use tokio::net::TcpListener;

use common::{GENERIC_ENDPOINT, configured, fake_context, spawn_app};

/// Upstream that checks the bearer token and answers in the `text` shape.
async fn spawn_upstream() -> String {
    async fn chat(headers: HeaderMap, body: String) -> (AxumStatus, String) {
        let authorized = headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            == Some("Bearer live-key");
        if !authorized {
            return (AxumStatus::UNAUTHORIZED, "bad key".to_string());
        }
        let request: serde_json::Value = serde_json::from_str(&body).unwrap();
        let prompt = request["messages"][0]["content"].as_str().unwrap_or_default();
        let reply = serde_json::json!({"choices": [{"text": format!("Yo ho! {prompt}")}]});
        (AxumStatus::OK, reply.to_string())
    }

    let app = Router::new().route("/v1/chat/completions", post(chat));
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}/v1/chat/completions")
}

#[tokio::test]
async fn test_cors_preflight_request() {
    let provider = FakeProvider::new();
    let base_url = spawn_app(fake_context(configured(GENERIC_ENDPOINT), &provider)).await;

    let client = reqwest::Client::new();
    let response = client
        .request(Method::OPTIONS, format!("{base_url}{REWRITE_PATH}"))
        .header(header::ORIGIN, "http://localhost:5173")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .header(
            header::ACCESS_CONTROL_REQUEST_HEADERS,
            "authorization, content-type",
        )
        .send()
        .await
        .expect("Failed to send preflight request");

    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let allow_origin = response
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        .and_then(|v| v.to_str().ok());
    assert_eq!(allow_origin, Some("*"));

    let allow_headers = response
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_HEADERS)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_lowercase();
    assert!(
        allow_headers.contains("authorization"),
        "CORS should allow Authorization header, got: {allow_headers}"
    );
    assert!(
        allow_headers.contains("content-type"),
        "CORS should allow Content-Type header, got: {allow_headers}"
    );
}

#[tokio::test]
async fn test_rewrite_round_trip_through_reqwest_provider() {
    let upstream = spawn_upstream().await;
    let config = pirate_core::ProviderConfig::new()
        .with_endpoint(upstream)
        .with_api_key("live-key");
    let base_url = spawn_app(bootstrap(config).expect("Failed to bootstrap")).await;

    let response = reqwest::Client::new()
        .post(format!("{base_url}{REWRITE_PATH}"))
        .header(header::ORIGIN, "http://localhost:5173")
        .json(&serde_json::json!({"task": "water the plants"}))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::OK);
    assert!(
        response
            .headers()
            .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN)
    );
    assert_eq!(
        response.text().await.unwrap(),
        "Yo ho! Rewrite this task as a pirate: water the plants"
    );
}

#[tokio::test]
async fn test_upstream_rejection_surfaces_as_500() {
    let upstream = spawn_upstream().await;
    let config = pirate_core::ProviderConfig::new()
        .with_endpoint(upstream)
        .with_api_key("wrong-key");
    let base_url = spawn_app(bootstrap(config).expect("Failed to bootstrap")).await;

    let response = reqwest::Client::new()
        .post(format!("{base_url}{REWRITE_PATH}"))
        .body(r#"{"task": "water the plants"}"#)
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = response.text().await.unwrap();
    assert!(
        body.starts_with("Error calling Azure OpenAI: HTTP 401"),
        "unexpected body: {body}"
    );
}
