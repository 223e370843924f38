//! JSON API routes, nested under `/api`.

use crate::handlers::{linked_video_seek, video_search_url};
use crate::state::AppState;
use axum::{routing::get, routing::post, Router};

pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/video-search-url", get(video_search_url))
        .route("/linked-video/seek", post(linked_video_seek))
}
