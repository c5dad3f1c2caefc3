// src/web/state.rs

//! Shared state handed to every handler.

use std::sync::Arc;

use axum::http::StatusCode;
use axum::response::Response;

use crate::error::Result;
use crate::models::{Announcement, Article, Config};
use crate::services::{ApiClient, DetailCache};
use crate::web::response::render_with_status;
use crate::web::views::MessageTemplate;

/// Application state: configuration, backend client and detail caches.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub api: ApiClient,
    pub articles: DetailCache<Article>,
    pub announcements: DetailCache<Announcement>,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        let api = ApiClient::new(&config.api)?;
        Ok(Self {
            articles: DetailCache::from_config(&config.cache),
            announcements: DetailCache::from_config(&config.cache),
            api,
            config: Arc::new(config),
        })
    }

    pub fn site_name(&self) -> String {
        self.config.site.name.clone()
    }

    /// The "page not found" page, status 404.
    pub fn not_found(&self) -> Response {
        self.message(
            StatusCode::NOT_FOUND,
            "Halaman Tidak Ditemukan",
            "Halaman yang Anda cari tidak tersedia atau telah dipindahkan.",
        )
    }

    /// A page holding a single message.
    pub fn message(&self, status: StatusCode, title: &str, message: &str) -> Response {
        render_with_status(
            status,
            &MessageTemplate {
                site_name: self.site_name(),
                title: title.to_string(),
                active: "",
                message: message.to_string(),
            },
        )
    }
}
