//! Axum-specific error types and mappings.
//!
//! Bodies are plain text, matching the rewrite function's responses, and
//! every error response carries the CORS header set.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use pirate_core::{OutgoingResponse, RewriteError};
use thiserror::Error;

use crate::convert::into_axum_response;

/// Axum-specific error type.
#[derive(Debug, Error)]
pub enum HttpError {
    /// A pipeline failure, answered with the pipeline's own status and text.
    #[error(transparent)]
    Rewrite(#[from] RewriteError),
}

impl HttpError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Rewrite(err) => StatusCode::from_u16(err.status_code())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let status = self.status();
        into_axum_response(OutgoingResponse::text(status.as_u16(), self.to_string()))
    }
}
