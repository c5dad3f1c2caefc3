// src/pipeline/serve_static.rs

//! Minimal file server for an exported tree.

use std::path::Path;

use axum::{
    Router,
    handler::HandlerWithoutStateExt,
    http::StatusCode,
    response::{Html, IntoResponse},
};
use tower_http::services::ServeDir;

use crate::error::{AppError, Result};
use crate::models::Config;
use crate::pipeline::serve::shutdown_signal;
use crate::routing::LegacyRoutes;
use crate::web::with_site_layers;

const NOT_FOUND_PAGE: &str = "<!DOCTYPE html><html lang=\"id\"><head><meta charset=\"utf-8\">\
<title>Halaman Tidak Ditemukan</title></head><body><h1>Halaman Tidak Ditemukan</h1>\
<p>Halaman yang Anda cari tidak tersedia.</p><p><a href=\"/\">Kembali ke Beranda</a></p></body></html>";

/// Router serving `root`, with `assets_dir` under `/assets`.
///
/// Directories resolve to their `index.html`; unknown paths get a 404 page.
/// The legacy redirect rules and security headers apply as on the live site.
pub fn create_static_router(root: &Path, assets_dir: &Path, config: &Config) -> Router {
    let files = ServeDir::new(root)
        .append_index_html_on_directories(true)
        .not_found_service(not_found.into_service());

    let router = Router::new()
        .nest_service("/assets", ServeDir::new(assets_dir))
        .fallback_service(files);

    with_site_layers(router, LegacyRoutes::from_config(&config.routing))
}

async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Html(NOT_FOUND_PAGE))
}

/// Serve `root` on the configured address until Ctrl-C.
pub async fn run_static_server(config: &Config, root: &Path) -> Result<()> {
    if !root.is_dir() {
        return Err(AppError::config(format!(
            "Export directory does not exist: {}",
            root.display()
        )));
    }

    let addr = config.server.socket_addr()?;
    let app = create_static_router(root, &config.server.assets_dir, config);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    log::info!(
        "Serving {} on http://{}",
        root.display(),
        listener.local_addr()?
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}
