//! Route definitions and router construction.

use std::sync::Arc;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::{any, get};
use tower_http::trace::TraceLayer;

use crate::bootstrap::AxumContext;
use crate::handlers;

/// Path of the rewrite function. Every method is routed to it; the pipeline
/// itself decides what OPTIONS and malformed bodies mean.
///
/// The route has no body size cap, so every request reaches the pipeline and
/// leaves with CORS headers.
pub const REWRITE_PATH: &str = "/api/RewritePirate";

/// Create the main router with all routes and request tracing.
pub fn create_router(ctx: AxumContext) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route(
            REWRITE_PATH,
            any(handlers::rewrite::handle).layer(DefaultBodyLimit::disable()),
        )
        .route("/api/models", get(handlers::models::list))
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(ctx))
}
