// src/web/router.rs

use std::sync::Arc;

use axum::{Router, middleware, routing::get};
use tower_http::{compression::CompressionLayer, services::ServeDir, trace::TraceLayer};

use crate::models::{Announcement, Article};
use crate::routing::{LegacyRoutes, legacy_redirect};
use crate::web::{AppState, Post};
use crate::web::handlers::{self, directory, home, media, posts};

/// Build the site router with every page, static assets and middleware.
pub fn create_router(state: AppState) -> Router {
    let routes = LegacyRoutes::from_config(&state.config.routing);
    let assets = ServeDir::new(&state.config.server.assets_dir);

    let router = Router::new()
        .route("/", get(home::index))
        .route("/health", get(handlers::health));

    // Posts, one listing and detail route per entry of `POST_LISTINGS`
    let router = post_routes::<Announcement>(post_routes::<Article>(router))
        // Directory
        .route("/jadwal", get(directory::schedule))
        .route("/mahasiswa", get(directory::students))
        .route("/dokumen", get(directory::documents))
        // Media
        .route("/galeri", get(media::gallery))
        .route("/video", get(media::videos))
        .nest_service("/assets", assets)
        .fallback(handlers::not_found);

    with_site_layers(router, routes).with_state(state)
}

fn post_routes<P: Post>(router: Router<AppState>) -> Router<AppState> {
    router
        .route(&format!("/{}", P::PATH), get(posts::list::<P>))
        .route(
            &format!("/{}/detail/:id/:tag", P::PATH),
            get(posts::detail::<P>),
        )
}

/// Legacy redirects, security headers, compression and request logging.
///
/// Shared by the dynamic site and the static snapshot server.
pub fn with_site_layers<S>(router: Router<S>, routes: LegacyRoutes) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    // Middleware (applied in reverse order)
    router
        .layer(middleware::from_fn_with_state(
            Arc::new(routes),
            legacy_redirect,
        ))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}
