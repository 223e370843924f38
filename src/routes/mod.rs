pub mod api;
pub mod common;
pub mod pages;

pub use api::api_routes;
pub use common::common_routes;
pub use pages::page_routes;

use crate::handlers::not_found;
use crate::state::AppState;
use axum::{extract::DefaultBodyLimit, Router};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Request bodies are small JSON documents.
pub const BODY_LIMIT_BYTES: usize = 64 * 1024;

/// Full application: pages, `/api`, health/version, `/public` assets, 404 fallback.
pub fn app(state: AppState) -> Router {
    let public = ServeDir::new(state.config.public_dir.clone());
    Router::new()
        .merge(page_routes())
        .merge(common_routes())
        .nest("/api", api_routes())
        .nest_service("/public", public)
        .fallback(not_found)
        .layer(DefaultBodyLimit::max(BODY_LIMIT_BYTES))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
