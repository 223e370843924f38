//! Server binary: loads `.env`, reads settings, mounts pages, API and assets.

use metaverse_web::{app, env::is_development_mode, AppState, BroadcastPublisher, ProcessEnv, ServerConfig};
use std::sync::Arc;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("metaverse_web=info,tower_http=info")),
        )
        .init();

    let config = ServerConfig::from_env(&ProcessEnv)?;
    let addr = config.socket_addr()?;
    if is_development_mode(&ProcessEnv) {
        tracing::info!("development mode: DEV_ overrides active");
    }
    if config.youtube_api_key.is_none() {
        tracing::warn!("YOUTUBE_API_KEY not set; video search URLs are unavailable");
    }
    tracing::info!(views = %config.views_dir.display(), public = %config.public_dir.display(), "serving");

    let state = AppState::new(config, Arc::new(BroadcastPublisher::default()));
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app(state)).await?;
    Ok(())
}
