//! JSON API handlers. Every response body is an [`Envelope`](crate::envelope::Envelope).

use crate::collaborators::{Validate, ValidationLevel, LINKED_VIDEO_SEEK_EVENT};
use crate::envelope::{send_error, send_success, EnvelopeResponse, ErrorOptions};
use crate::error::{AppError, PreconditionError};
use crate::extractors::EnvelopeJson;
use crate::query::{mapping_to_query_string, QueryStringOptions};
use crate::state::AppState;
use crate::validity::{optional_string_field, require_number_field, require_string_field};
use axum::{
    extract::{Query, State},
    http::StatusCode,
};
use serde::Serialize;
use serde_json::{json, Map, Value};
use std::collections::HashMap;

pub const YOUTUBE_SEARCH_ENDPOINT: &str = "https://www.googleapis.com/youtube/v3/search";
pub const DEFAULT_MAX_RESULTS: u32 = 10;
pub const MAX_RESULTS_LIMIT: u32 = 50;

/// GET /api/video-search-url?q=...&max_results=...
pub async fn video_search_url(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<EnvelopeResponse, AppError> {
    let q = params.get("q").map(|s| s.trim()).unwrap_or_default();
    if q.is_empty() {
        return Ok(send_error(
            "Please enter something to search for.",
            ErrorOptions::shown_to_user(),
        )?);
    }
    let max_results = match params.get("max_results").map(|s| s.trim()) {
        None | Some("") => DEFAULT_MAX_RESULTS,
        Some(raw) => match raw.parse::<u32>() {
            Ok(n) if (1..=MAX_RESULTS_LIMIT).contains(&n) => n,
            _ => {
                return Ok(send_error(
                    &format!("max_results must be between 1 and {}.", MAX_RESULTS_LIMIT),
                    ErrorOptions::shown_to_user(),
                )?);
            }
        },
    };
    let Some(key) = state.config.youtube_api_key.as_deref() else {
        tracing::warn!("video search requested but no API key is configured");
        return Ok(send_error(
            "Video search is not configured.",
            ErrorOptions::with_status(StatusCode::SERVICE_UNAVAILABLE),
        )?);
    };

    let mut query = Map::new();
    query.insert("part".into(), json!("snippet"));
    query.insert("type".into(), json!("video"));
    query.insert("q".into(), json!(q));
    query.insert("maxResults".into(), json!(max_results));
    query.insert("key".into(), json!(key));
    let search_url = format!(
        "{}?{}",
        YOUTUBE_SEARCH_ENDPOINT,
        mapping_to_query_string(Some(&query), QueryStringOptions::default())
    );

    let mut extra = Map::new();
    extra.insert("search_url".into(), json!(search_url));
    Ok(send_success("Search URL ready.", Some(extra))?)
}

/// Seek position shared with everyone watching the same linked video.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SeekRequest {
    pub video_id: String,
    pub seconds: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub participant: Option<String>,
}

impl SeekRequest {
    pub fn from_body(body: &Map<String, Value>) -> Result<Self, PreconditionError> {
        Ok(SeekRequest {
            video_id: require_string_field(body, "video_id")?,
            seconds: require_number_field(body, "seconds")?,
            participant: optional_string_field(body, "participant"),
        })
    }
}

impl Validate for SeekRequest {
    fn validate(&self, level: ValidationLevel) -> Result<(), PreconditionError> {
        if self.seconds < 0.0 {
            return Err(PreconditionError::InvalidField {
                field: "seconds".into(),
                reason: "must not be negative".into(),
            });
        }
        // YouTube ids are 11 characters from the URL-safe base64 alphabet.
        if level == ValidationLevel::Strict
            && !(self.video_id.len() == 11
                && self
                    .video_id
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'))
        {
            return Err(PreconditionError::InvalidField {
                field: "video_id".into(),
                reason: "not a YouTube video id".into(),
            });
        }
        Ok(())
    }
}

/// POST /api/linked-video/seek
pub async fn linked_video_seek(
    State(state): State<AppState>,
    EnvelopeJson(body): EnvelopeJson,
) -> Result<EnvelopeResponse, AppError> {
    let Some(body) = body.as_object() else {
        return Ok(send_error("Expected a JSON object.", ErrorOptions::shown_to_user())?);
    };
    let request = match SeekRequest::from_body(body).and_then(|r| {
        r.validate(ValidationLevel::Strict)?;
        Ok(r)
    }) {
        Ok(r) => r,
        Err(e) => {
            tracing::debug!(error = %e, "rejected seek");
            return Ok(send_error(&e.to_string(), ErrorOptions::shown_to_user())?);
        }
    };

    let payload = serde_json::to_value(&request).map_err(crate::error::PublishError::from)?;
    state.publisher.publish(LINKED_VIDEO_SEEK_EVENT, payload).await?;
    tracing::info!(video_id = %request.video_id, seconds = request.seconds, "linked video seek");

    let mut extra = Map::new();
    extra.insert("event".into(), json!(LINKED_VIDEO_SEEK_EVENT));
    Ok(send_success("Seek shared.", Some(extra))?)
}
