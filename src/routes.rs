//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host owns no data. Every Snapgram page is rendered by the Leptos app
//! (SSR shell, then hydration in the browser), and the compiled WASM, JS and
//! CSS bundle is served from the site root's `pkg/` directory. All reads and
//! writes go from the browser straight to the hosted backend service.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::path::{Path, PathBuf};

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::HostConfig;
use crate::error::HostError;

/// Full application router: Leptos SSR routes plus static assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[package.metadata.leptos]` section).
pub fn app(config: &HostConfig) -> Result<Router, HostError> {
    let conf = get_configuration(None).map_err(|e| HostError::Leptos(e.to_string()))?;
    let mut leptos_options = conf.leptos_options;
    if let Some(root) = &config.site_root {
        leptos_options.site_root = root.to_string_lossy().as_ref().into();
    }
    let site_root = PathBuf::from(leptos_options.site_root.as_ref());
    tracing::info!(site_root = %site_root.display(), "serving leptos app");

    let routes = generate_route_list(client::app::App);
    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options);

    Ok(static_routes(&site_root).merge(leptos_router).layer(TraceLayer::new_for_http()))
}

/// Health probe plus the compiled client bundle under `/pkg` and any other
/// file in the site root as a fallback.
fn static_routes(site_root: &Path) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .nest_service("/pkg", ServeDir::new(site_root.join("pkg")))
        .fallback_service(ServeDir::new(site_root))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
