//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module stitches the Leptos SSR page, the built static assets and a
//! handful of plain HTTP endpoints under a single Axum router. The page is
//! rendered at `/` and hydrated by the WASM bundle served from `/pkg`.

pub mod cv;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Plain HTTP endpoints that need no rendering.
fn service_routes() -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/cv", get(cv::download))
        .route("/cv/view", get(cv::view))
}

/// Full application router: SSR page at `/`, assets under `/pkg`, and the
/// remaining site root (copied `public/` assets) as the fallback.
pub fn app(leptos_options: &LeptosOptions) -> Router {
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    service_routes()
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join(leptos_options.site_pkg_dir.as_ref())))
        .fallback_service(ServeDir::new(&site_root_path))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

pub(crate) async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
