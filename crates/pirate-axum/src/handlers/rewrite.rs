//! The pirate rewrite HTTP function.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, Method};
use axum::response::Response;

use crate::convert::{into_axum_response, into_incoming};
use crate::state::AppState;

/// Any method on the rewrite path. OPTIONS answers the CORS preflight; every
/// other method is treated as a JSON task submission.
pub async fn handle(
    State(state): State<AppState>,
    method: Method,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let request = into_incoming(&method, &headers, body);
    let response = state.rewrite.handle(request).await;
    into_axum_response(response)
}
