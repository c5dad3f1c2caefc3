// src/routing/middleware.rs

//! Axum middleware applying the legacy URL rules.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{HeaderMap, HeaderValue, header},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};

use crate::routing::rules::{LegacyRoutes, RequestTarget, RouteDecision};

/// Attach the fixed security headers to a pass-through response.
pub fn apply_security_headers(headers: &mut HeaderMap) {
    headers.insert(header::X_FRAME_OPTIONS, HeaderValue::from_static("DENY"));
    headers.insert(
        header::X_CONTENT_TYPE_OPTIONS,
        HeaderValue::from_static("nosniff"),
    );
    headers.insert(
        header::REFERRER_POLICY,
        HeaderValue::from_static("strict-origin-when-cross-origin"),
    );
}

/// Redirect legacy URL shapes, otherwise continue and decorate the response.
///
/// Paths under an excluded prefix pass through untouched.
pub async fn legacy_redirect(
    State(routes): State<Arc<LegacyRoutes>>,
    request: Request,
    next: Next,
) -> Response {
    let uri = request.uri();
    if routes.is_excluded(uri.path()) {
        return next.run(request).await;
    }

    // Fragments never reach the server over HTTP; the listing pages forward
    // them as a query instead.
    let target = RequestTarget::new(uri.path(), uri.query(), None);
    if let RouteDecision::Redirect(location) = routes.evaluate(&target) {
        log::debug!("Redirecting legacy URL {} -> {}", uri, location);
        return Redirect::temporary(&location).into_response();
    }

    let mut response = next.run(request).await;
    apply_security_headers(response.headers_mut());
    response
}
