#![recursion_limit = "256"]

mod config;
mod error;
mod routes;

use tracing_subscriber::EnvFilter;

use crate::config::HostConfig;
use crate::error::HostError;

#[tokio::main]
async fn main() -> Result<(), HostError> {
    let dotenv = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    if let Err(e) = dotenv {
        if !e.not_found() {
            tracing::warn!(error = %e, "ignoring unreadable .env");
        }
    }

    let config = HostConfig::from_env()?;
    let app = routes::app(&config)?;
    let listener = tokio::net::TcpListener::bind(config.socket_addr())
        .await
        .map_err(HostError::Bind)?;

    tracing::info!(addr = %config.socket_addr(), "snapgram listening");
    axum::serve(listener, app).await.map_err(HostError::Serve)
}
