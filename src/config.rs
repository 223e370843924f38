//! Server settings read from the environment, honoring the `DEV_` overlay.

use crate::env::{resolve_environment_variable, EnvSource};
use crate::error::ConfigError;
use std::net::SocketAddr;
use std::path::PathBuf;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_SITE_TITLE: &str = "Metaverse";

/// Variable holding the key used to build YouTube search URLs.
pub const YOUTUBE_API_KEY_VAR: &str = "YOUTUBE_API_KEY";

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub views_dir: PathBuf,
    pub public_dir: PathBuf,
    pub site_title: String,
    /// Optional; only the video search URL endpoint needs it.
    pub youtube_api_key: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            host: DEFAULT_HOST.into(),
            port: DEFAULT_PORT,
            views_dir: PathBuf::from("views"),
            public_dir: PathBuf::from("public"),
            site_title: DEFAULT_SITE_TITLE.into(),
            youtube_api_key: None,
        }
    }
}

impl ServerConfig {
    pub fn from_env(source: &impl EnvSource) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let read = |name: &str| {
            resolve_environment_variable(source, name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let port = match read("PORT") {
            Some(p) => p.parse::<u16>().map_err(|_| ConfigError::InvalidValue {
                name: "PORT".into(),
                value: p.clone(),
            })?,
            None => defaults.port,
        };
        Ok(ServerConfig {
            host: read("HOST").unwrap_or(defaults.host),
            port,
            views_dir: read("VIEWS_DIR").map(PathBuf::from).unwrap_or(defaults.views_dir),
            public_dir: read("PUBLIC_DIR").map(PathBuf::from).unwrap_or(defaults.public_dir),
            site_title: read("SITE_TITLE").unwrap_or(defaults.site_title),
            youtube_api_key: read(YOUTUBE_API_KEY_VAR),
        })
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let raw = format!("{}:{}", self.host, self.port);
        raw.parse().map_err(|_| ConfigError::InvalidValue {
            name: "HOST".into(),
            value: self.host.clone(),
        })
    }
}
