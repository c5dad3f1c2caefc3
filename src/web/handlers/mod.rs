// src/web/handlers/mod.rs

//! Page handlers.

pub mod directory;
pub mod home;
pub mod media;
pub mod posts;

use axum::{Json, extract::State, response::Response};
use serde_json::{Value, json};

use crate::web::AppState;

/// Liveness probe.
pub async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Fallback for unknown paths.
pub async fn not_found(State(state): State<AppState>) -> Response {
    state.not_found()
}
