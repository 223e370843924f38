//! Standard response envelope.
//!
//! Every API-style response carries `is_error`, `is_error_shown_to_user` and
//! `message`, plus caller-supplied extra fields merged at the top level. An
//! error that is shown to the user always travels with status 200; other
//! statuses are reserved for errors the client should not display verbatim.

use crate::error::PreconditionError;
use axum::{http::StatusCode, Json};
use serde::Serialize;
use serde_json::{Map, Value};

/// Keys owned by the envelope; `extra` may not use them.
pub const RESERVED_KEYS: [&str; 3] = ["is_error", "is_error_shown_to_user", "message"];

/// Fields are private so every envelope passes the reserved-key check.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Envelope {
    is_error: bool,
    is_error_shown_to_user: bool,
    message: String,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

/// What handlers return for envelope responses.
pub type EnvelopeResponse = (StatusCode, Json<Envelope>);

impl Envelope {
    pub fn error(message: &str, shown_to_user: bool, extra: Option<Map<String, Value>>) -> Result<Self, PreconditionError> {
        Self::build(true, shown_to_user, message, extra)
    }

    pub fn success(message: &str, extra: Option<Map<String, Value>>) -> Result<Self, PreconditionError> {
        Self::build(false, false, message, extra)
    }

    pub fn is_error(&self) -> bool {
        self.is_error
    }

    pub fn is_error_shown_to_user(&self) -> bool {
        self.is_error_shown_to_user
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn extra(&self) -> &Map<String, Value> {
        &self.extra
    }

    fn build(
        is_error: bool,
        is_error_shown_to_user: bool,
        message: &str,
        extra: Option<Map<String, Value>>,
    ) -> Result<Self, PreconditionError> {
        if message.is_empty() {
            return Err(PreconditionError::EmptyMessage);
        }
        let extra = extra.unwrap_or_default();
        if let Some(key) = RESERVED_KEYS.iter().find(|k| extra.contains_key(**k)) {
            return Err(PreconditionError::ReservedKey((*key).to_string()));
        }
        Ok(Envelope {
            is_error,
            is_error_shown_to_user,
            message: message.to_string(),
            extra,
        })
    }
}

#[derive(Clone, Debug)]
pub struct ErrorOptions {
    pub shown_to_user: bool,
    pub status_code: StatusCode,
    pub extra: Option<Map<String, Value>>,
}

impl Default for ErrorOptions {
    fn default() -> Self {
        ErrorOptions {
            shown_to_user: false,
            status_code: StatusCode::OK,
            extra: None,
        }
    }
}

impl ErrorOptions {
    /// Error meant for direct display; status stays 200.
    pub fn shown_to_user() -> Self {
        ErrorOptions {
            shown_to_user: true,
            ..Self::default()
        }
    }

    pub fn with_status(status_code: StatusCode) -> Self {
        ErrorOptions {
            status_code,
            ..Self::default()
        }
    }

    pub fn extra(mut self, extra: Map<String, Value>) -> Self {
        self.extra = Some(extra);
        self
    }
}

/// Build an error envelope response. Nothing is produced when a precondition fails.
pub fn send_error(message: &str, options: ErrorOptions) -> Result<EnvelopeResponse, PreconditionError> {
    if options.shown_to_user && options.status_code != StatusCode::OK {
        return Err(PreconditionError::ShownToUserStatus(options.status_code.as_u16()));
    }
    let envelope = Envelope::error(message, options.shown_to_user, options.extra)?;
    tracing::debug!(status = %options.status_code, shown = options.shown_to_user, text = message, "error envelope");
    Ok((options.status_code, Json(envelope)))
}

/// Build a success envelope response with status 200.
pub fn send_success(message: &str, extra: Option<Map<String, Value>>) -> Result<EnvelopeResponse, PreconditionError> {
    let envelope = Envelope::success(message, extra)?;
    Ok((StatusCode::OK, Json(envelope)))
}
