//! Router assembly.
//!
//! The portfolio page is rendered by Leptos SSR at `/` and hydrated by the
//! `client` WASM bundle served from `/pkg`. Static assets live under the
//! configured assets directory: project thumbnails at `/IMAGES` and the
//! downloadable CV at `/cv`.

use std::path::PathBuf;

use axum::http::{HeaderValue, header};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router, middleware};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

/// Static asset routes rooted at the configured assets directory.
fn asset_routes(config: &ServerConfig) -> Router {
    let images = ServeDir::new(config.assets_dir.join("IMAGES"));
    let cv = Router::new()
        .fallback_service(ServeDir::new(config.assets_dir.join("cv")))
        .layer(middleware::map_response(force_download));

    Router::new()
        .route("/healthz", get(healthz))
        .nest_service("/IMAGES", images)
        .nest("/cv", cv)
}

/// Full application: SSR page, hydration bundle, and static assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[[workspace.metadata.leptos]]` section).
pub fn app(config: &ServerConfig) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    let router = asset_routes(config)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(TraceLayer::new_for_http());

    Ok(if config.compression { router.layer(CompressionLayer::new()) } else { router })
}

/// Mark successful CV responses as downloads instead of inline documents.
async fn force_download(mut response: Response) -> Response {
    if response.status().is_success() {
        response
            .headers_mut()
            .insert(header::CONTENT_DISPOSITION, HeaderValue::from_static("attachment"));
    }
    response
}

async fn healthz() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
