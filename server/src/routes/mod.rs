//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Binds the health probe and static asset directories, and stitches Leptos
//! SSR rendering of the dashboard under a single Axum router.


use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::error::ServerError;

/// Non-Leptos routes: health probe and static media.
fn service_routes(config: &ServerConfig) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .nest_service("/assets", ServeDir::new(&config.assets_dir))
}

/// Full application router: service routes, Leptos SSR at `/`, and the
/// hydration bundle under `/pkg`.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[package.metadata.leptos]` section or `LEPTOS_*` variables).
pub fn app(config: &ServerConfig) -> Result<Router, ServerError> {
    let conf = get_configuration(None).map_err(|e| ServerError::LeptosConfig(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);
    tracing::debug!(count = routes.len(), "leptos routes generated");

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    // Serve Leptos static assets (WASM, CSS, JS) from the site root /pkg directory.
    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(service_routes(config)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
