//! Host startup errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HostError {
    #[error("invalid {var}: {value:?}")]
    InvalidVar { var: &'static str, value: String },
    #[error("leptos configuration: {0}")]
    Leptos(String),
    #[error("failed to bind: {0}")]
    Bind(std::io::Error),
    #[error("server failed: {0}")]
    Serve(std::io::Error),
}
