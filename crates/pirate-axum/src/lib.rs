//! Axum adapter for the pirate rewrite adapter.
//!
//! Exposes the rewrite pipeline as an HTTP function, plus model listing and a
//! health probe. All request handling is delegated to `pirate-core`; this
//! crate only converts between axum and core types.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Silence unused dev-dependency warnings; used by tests/
#[cfg(test)]
use http_body_util as _;
#[cfg(test)]
use reqwest as _;
#[cfg(test)]
use tower as _;

pub mod bootstrap;
pub mod convert;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

// Re-export primary types
pub use bootstrap::{AxumContext, ServerConfig, bootstrap, serve, start_server};
pub use error::HttpError;
pub use routes::{REWRITE_PATH, create_router};
pub use state::AppState;
