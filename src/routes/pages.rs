//! Server-rendered pages.

use crate::handlers::{home, metaverse, video_search};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn page_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home))
        .route("/metaverse", get(metaverse))
        .route("/search", get(video_search))
}
