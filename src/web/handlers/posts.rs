// src/web/handlers/posts.rs

//! Listing and detail pages for articles and announcements.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Response,
};

use crate::listing::{FilterState, Paginator};
use crate::routing::normalize_tag;
use crate::services::Store;
use crate::share::ShareLinks;
use crate::web::post::Post;
use crate::web::response::render;
use crate::web::views::{PaginationView, PostDetailTemplate, PostListTemplate};
use crate::web::AppState;

/// `/<listing>`: filterable, paginated cards.
pub async fn list<P: Post>(
    State(state): State<AppState>,
    Query(filter): Query<FilterState>,
) -> Response {
    let resource = Store::<P>::new(&state.api).list().await;
    let error = resource.error_message();
    let items = resource.data.unwrap_or_default();

    let matched = filter.apply(&items);
    let paginator = Paginator::new(matched.len(), state.config.site.per_page, filter.page());
    let listing = format!("/{}", P::PATH);

    render(&PostListTemplate {
        site_name: state.site_name(),
        title: P::LABEL.to_string(),
        active: P::PATH,
        cards: paginator.slice(&matched).iter().map(|post| post.card()).collect(),
        total: matched.len(),
        error,
        query: filter.q.clone().unwrap_or_default(),
        categories: filter.category_options(&items),
        years: filter.year_options(&items),
        pagination: PaginationView::build(&listing, &paginator, &filter),
        listing,
    })
}

/// `/<listing>/detail/:id/:tag`: one record with related items and share links.
///
/// The record and the related listing are fetched concurrently. The record
/// is served from the detail cache while fresh.
pub async fn detail<P: Post>(
    State(state): State<AppState>,
    Path((id, tag)): Path<(String, String)>,
) -> Response {
    let Ok(id) = id.parse::<u64>() else {
        return state.not_found();
    };

    let store = Store::<P>::new(&state.api);
    let (detail, related) = tokio::join!(
        store.detail_cached(P::cache(&state), id, &tag),
        store.list()
    );

    if detail.is_not_found() {
        return state.not_found();
    }
    let error = detail.error_message();
    let Some(post) = detail.data else {
        return state.message(
            StatusCode::BAD_GATEWAY,
            P::LABEL,
            error.as_deref().unwrap_or_default(),
        );
    };

    let site = &state.config.site;
    let canonical_path = post
        .detail_path()
        .unwrap_or_else(|| format!("/{}/detail/{}/{}", P::PATH, id, normalize_tag(&tag)));
    let canonical_url = site.absolute_url(&canonical_path);

    let share = match ShareLinks::new(&canonical_url, post.title()) {
        Ok(links) => links.links(),
        Err(e) => {
            log::warn!("No share links for {}: {}", canonical_url, e);
            Vec::new()
        }
    };

    let related_error = related.error_message();
    let related = related
        .data
        .unwrap_or_default()
        .iter()
        .filter(|other| other.id() != id)
        .take(site.related_items)
        .map(|other| other.card())
        .collect();

    render(&PostDetailTemplate {
        site_name: state.site_name(),
        title: post.title().to_string(),
        active: P::PATH,
        listing: format!("/{}", P::PATH),
        listing_label: P::LABEL.to_string(),
        description: post.summary(state.config.export.description_length),
        og_image: post
            .image()
            .map(str::to_string)
            .or_else(|| site.default_image.clone()),
        post: post.view(),
        canonical_url,
        share,
        related,
        related_error,
    })
}
