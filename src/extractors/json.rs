//! JSON body extractor whose rejection is a shown-to-user error envelope.

use crate::envelope::{send_error, ErrorOptions};
use crate::error::AppError;
use async_trait::async_trait;
use axum::{
    extract::{FromRequest, Request},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value;

/// Message sent when the body is missing, not JSON, or lacks the JSON content type.
pub const INVALID_JSON_MESSAGE: &str = "Request body must be JSON.";

/// Like `Json<Value>`, but API clients always get an envelope back.
#[derive(Clone, Debug)]
pub struct EnvelopeJson(pub Value);

#[async_trait]
impl<S> FromRequest<S> for EnvelopeJson
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<Value>::from_request(req, state).await {
            Ok(Json(value)) => Ok(EnvelopeJson(value)),
            Err(rejection) => {
                tracing::debug!(status = %rejection.status(), reason = %rejection.body_text(), "rejected json body");
                Err(match send_error(INVALID_JSON_MESSAGE, ErrorOptions::shown_to_user()) {
                    Ok(envelope) => envelope.into_response(),
                    Err(e) => AppError::from(e).into_response(),
                })
            }
        }
    }
}
