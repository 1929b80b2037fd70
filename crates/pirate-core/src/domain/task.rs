//! Inbound task payload parsing.

use serde_json::Value;
use thiserror::Error;

/// Reasons an inbound body is rejected.
///
/// The `Display` text is the exact response body sent back to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PayloadError {
    /// Body was not UTF-8 or not JSON.
    #[error("Invalid JSON")]
    InvalidJson { detail: String },

    /// `task` missing or empty, or no model could be resolved.
    #[error("Missing task or model")]
    MissingField,
}

/// A validated rewrite request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskPayload {
    pub task: String,
    pub model: String,
}

impl TaskPayload {
    /// Parse a raw request body.
    ///
    /// `model` falls back to `default_model` when absent or empty. Only string
    /// values count; any other JSON type is treated as absent, and a body that
    /// is valid JSON but not an object has no fields at all.
    pub fn from_body(body: &[u8], default_model: &str) -> Result<Self, PayloadError> {
        let text = std::str::from_utf8(body).map_err(|e| PayloadError::InvalidJson {
            detail: e.to_string(),
        })?;
        let value: Value = serde_json::from_str(text).map_err(|e| PayloadError::InvalidJson {
            detail: e.to_string(),
        })?;

        let field = |name: &str| {
            value
                .get(name)
                .and_then(Value::as_str)
                .filter(|s| !s.is_empty())
        };

        let model = field("model").unwrap_or(default_model);
        match field("task") {
            Some(task) if !model.is_empty() => Ok(Self {
                task: task.to_string(),
                model: model.to_string(),
            }),
            _ => Err(PayloadError::MissingField),
        }
    }
}
