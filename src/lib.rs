//! Metaverse web: server-rendered pages plus a small JSON API built on a
//! uniform response envelope.

pub mod collaborators;
pub mod config;
pub mod env;
pub mod envelope;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod query;
pub mod routes;
pub mod state;
pub mod validity;
pub mod views;

pub use collaborators::{BroadcastPublisher, Publisher, Validate, ValidationLevel};
pub use config::ServerConfig;
pub use env::{require_environment_variable, resolve_environment_variable, EnvSource, MapEnv, ProcessEnv};
pub use envelope::{send_error, send_success, Envelope, EnvelopeResponse, ErrorOptions};
pub use error::{AppError, ConfigError, PreconditionError, PublishError, RenderError};
pub use query::{mapping_to_query_string, QueryStringOptions};
pub use routes::app;
pub use state::AppState;
pub use views::ViewRenderer;
