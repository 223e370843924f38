//! Typed errors and HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Caller bugs: bad arguments to the envelope builders or malformed request fields.
/// These are never turned into an envelope; they surface as a logged fault.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum PreconditionError {
    #[error("envelope message must not be empty")]
    EmptyMessage,
    #[error("extra field '{0}' collides with a reserved envelope key")]
    ReservedKey(String),
    #[error("errors shown to the user must use status 200, got {0}")]
    ShownToUserStatus(u16),
    #[error("invalid field '{field}': {reason}")]
    InvalidField { field: String, reason: String },
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    MissingVariable(String),
    #[error("invalid value for {name}: {value}")]
    InvalidValue { name: String, value: String },
}

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("view not found: {0}")]
    NotFound(String),
    #[error("view io: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Error, Debug)]
pub enum PublishError {
    #[error("publish serialization: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Precondition(#[from] PreconditionError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error(transparent)]
    Publish(#[from] PublishError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Faults are plain text; envelopes are only built by handlers.
        tracing::error!(error = %self, "request failed");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal Server Error",
        )
            .into_response()
    }
}
