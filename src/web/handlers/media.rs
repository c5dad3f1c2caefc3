// src/web/handlers/media.rs

//! Photo gallery and video pages.

use axum::{
    extract::{Query, State},
    response::Response,
};

use crate::listing::{FilterState, Paginator};
use crate::models::{GalleryImage, Video};
use crate::services::{Resource, Store};
use crate::web::response::render;
use crate::web::views::{GalleryCard, GalleryTemplate, PaginationView, VideoCard, VideosTemplate};
use crate::web::AppState;

/// Gallery pages hold twice as many items as text listings.
const GALLERY_PAGE_FACTOR: usize = 2;

/// `/galeri`: photo grid opened in a lightbox, filterable by year.
pub async fn gallery(
    State(state): State<AppState>,
    Query(filter): Query<FilterState>,
) -> Response {
    let resource = Store::<GalleryImage>::new(&state.api).list().await;
    let error = resource.error_message();
    let images = resource.data.unwrap_or_default();

    let matched = filter.apply(&images);
    let paginator = Paginator::new(
        matched.len(),
        state.config.site.per_page * GALLERY_PAGE_FACTOR,
        filter.page(),
    );
    let path = format!("/{}", GalleryImage::PATH);

    render(&GalleryTemplate {
        site_name: state.site_name(),
        title: GalleryImage::LABEL.to_string(),
        active: GalleryImage::PATH,
        cards: paginator
            .slice(&matched)
            .iter()
            .map(|image| GalleryCard::from(*image))
            .collect(),
        error,
        years: filter.year_options(&images),
        pagination: PaginationView::build(&path, &paginator, &filter),
    })
}

/// `/video`: video cards played in an embedded modal.
pub async fn videos(
    State(state): State<AppState>,
    Query(filter): Query<FilterState>,
) -> Response {
    let resource = Store::<Video>::new(&state.api).list().await;
    let error = resource.error_message();
    let videos = resource.data.unwrap_or_default();

    let matched = filter.apply(&videos);
    let paginator = Paginator::new(matched.len(), state.config.site.per_page, filter.page());
    let path = format!("/{}", Video::PATH);

    render(&VideosTemplate {
        site_name: state.site_name(),
        title: Video::LABEL.to_string(),
        active: Video::PATH,
        cards: paginator
            .slice(&matched)
            .iter()
            .map(|video| VideoCard::from(*video))
            .collect(),
        error,
        query: filter.q.clone().unwrap_or_default(),
        pagination: PaginationView::build(&path, &paginator, &filter),
    })
}
