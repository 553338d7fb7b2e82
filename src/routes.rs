//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Binds the health check and the compiled client assets, and stitches them
//! with Leptos SSR rendering under a single Axum router. Every SSR render is
//! given the runtime [`AppConfig`](client::config::AppConfig) through context.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

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

/// Routes that do not depend on Leptos.
fn base_routes() -> Router {
    Router::new().route("/healthz", get(healthz))
}

/// Full host: health check, `/pkg` assets and the SSR app.
pub fn app(config: &ServerConfig, leptos_options: LeptosOptions) -> Router {
    let routes = generate_route_list(client::app::App);
    let app_config = config.app_config();
    let provide_config = move || provide_context(app_config.clone());

    // Unknown paths still render the app so the router shows its not-found view.
    let leptos_router = Router::new()
        .leptos_routes_with_context(&leptos_options, routes, provide_config.clone(), {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .fallback(leptos_axum::file_and_error_handler_with_context(
            provide_config,
            client::app::shell,
        ))
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    base_routes()
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
