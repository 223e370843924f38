//! Shared application state for all routes. Read-only after startup.

use crate::collaborators::Publisher;
use crate::config::ServerConfig;
use crate::views::ViewRenderer;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    pub views: Arc<ViewRenderer>,
    /// Pub/sub channel for linked video playback.
    pub publisher: Arc<dyn Publisher>,
}

impl AppState {
    pub fn new(config: ServerConfig, publisher: Arc<dyn Publisher>) -> Self {
        let views = ViewRenderer::new(config.views_dir.clone());
        AppState {
            config: Arc::new(config),
            views: Arc::new(views),
            publisher,
        }
    }
}
