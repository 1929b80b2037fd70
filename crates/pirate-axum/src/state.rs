//! Shared application state type.

use crate::bootstrap::AxumContext;
use std::sync::Arc;

/// Application state shared across all handlers.
///
/// Everything inside is read-only, so handlers never coordinate.
pub type AppState = Arc<AxumContext>;
