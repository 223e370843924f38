//! Page handlers: each renders one view with a title.

use crate::error::AppError;
use crate::state::AppState;
use crate::views::ViewContext;
use axum::{extract::State, http::StatusCode, response::Html};

async fn render_page(state: &AppState, view: &str, title: String) -> Result<Html<String>, AppError> {
    let mut context = ViewContext::new();
    context.insert("title", title);
    context.insert("site_title", state.config.site_title.clone());
    Ok(state.views.render(view, &context).await?)
}

pub async fn home(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let title = state.config.site_title.clone();
    render_page(&state, "index", title).await
}

pub async fn metaverse(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let title = format!("{} - Metaverse", state.config.site_title);
    render_page(&state, "metaverse", title).await
}

pub async fn video_search(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let title = format!("{} - Video Search", state.config.site_title);
    render_page(&state, "search", title).await
}

pub async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Not Found")
}
