// src/web/handlers/home.rs

use axum::{extract::State, response::Response};

use crate::models::{Announcement, Article, GalleryImage};
use crate::services::Store;
use crate::web::post::Post;
use crate::web::response::render;
use crate::web::views::{GalleryCard, HomeTemplate};
use crate::web::AppState;

/// `/`: latest news, announcements and photos, fetched concurrently.
///
/// Each section fails independently.
pub async fn index(State(state): State<AppState>) -> Response {
    let news_store = Store::<Article>::new(&state.api);
    let announcements_store = Store::<Announcement>::new(&state.api);
    let gallery_store = Store::<GalleryImage>::new(&state.api);
    let (news, announcements, gallery) = tokio::join!(
        news_store.list(),
        announcements_store.list(),
        gallery_store.list(),
    );
    let limit = state.config.site.home_items;

    render(&HomeTemplate {
        site_name: state.site_name(),
        title: "Beranda".to_string(),
        active: "",
        news_error: news.error_message(),
        news: news
            .data
            .unwrap_or_default()
            .iter()
            .take(limit)
            .map(Post::card)
            .collect(),
        announcements_error: announcements.error_message(),
        announcements: announcements
            .data
            .unwrap_or_default()
            .iter()
            .take(limit)
            .map(Post::card)
            .collect(),
        gallery_error: gallery.error_message(),
        gallery: gallery
            .data
            .unwrap_or_default()
            .iter()
            .take(limit * 2)
            .map(GalleryCard::from)
            .collect(),
    })
}
