//! Provider model listing.

use axum::Json;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use pirate_core::RewriteError;
use serde_json::json;
use tracing::debug;

use crate::convert::apply_cors;
use crate::error::HttpError;
use crate::state::AppState;

/// `GET /api/models` - `{"models": [...]}`, empty when the provider fails.
pub async fn list(State(state): State<AppState>) -> Result<Response, HttpError> {
    let credentials = state
        .config
        .credentials()
        .ok_or(RewriteError::ConfigurationMissing)?;

    let models = state
        .models
        .list_models(credentials.endpoint, credentials.api_key)
        .await;
    debug!(count = models.len(), "Listed provider models");

    let mut response = Json(json!({ "models": models })).into_response();
    apply_cors(response.headers_mut());
    Ok(response)
}
