// src/web/post.rs

//! Shared page behaviour of articles and announcements.

use crate::listing::Filterable;
use crate::models::{Announcement, Article};
use crate::services::{DetailCache, Resource};
use crate::utils::text::format_date;
use crate::web::AppState;
use crate::web::views::{PostCard, PostView};

/// Plain-text length of card excerpts.
pub const EXCERPT_LENGTH: usize = 140;

/// A content type with listing and detail pages.
pub trait Post: Resource + Filterable {
    /// Detail cache for this type.
    fn cache(state: &AppState) -> &DetailCache<Self>;

    fn id(&self) -> u64;
    fn title(&self) -> &str;
    fn tag(&self) -> &str;
    fn published_at(&self) -> Option<&str>;
    fn detail_path(&self) -> Option<String>;
    fn summary(&self, max_chars: usize) -> String;
    fn view(&self) -> PostView;

    fn image(&self) -> Option<&str> {
        None
    }

    fn card(&self) -> PostCard {
        PostCard {
            title: self.title().to_string(),
            href: self.detail_path(),
            excerpt: self.summary(EXCERPT_LENGTH),
            image: self.image().map(str::to_string),
            date: self.published_at().map(format_date).unwrap_or_default(),
            tag: self.tag().to_string(),
        }
    }
}

impl Post for Article {
    fn cache(state: &AppState) -> &DetailCache<Self> {
        &state.articles
    }

    fn id(&self) -> u64 {
        self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn tag(&self) -> &str {
        &self.tag
    }

    fn published_at(&self) -> Option<&str> {
        self.published_at.as_deref()
    }

    fn detail_path(&self) -> Option<String> {
        Article::detail_path(self)
    }

    fn summary(&self, max_chars: usize) -> String {
        Article::summary(self, max_chars)
    }

    fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }

    fn view(&self) -> PostView {
        PostView {
            title: self.title.clone(),
            tag: self.tag.clone(),
            date: self.published_at().map(format_date).unwrap_or_default(),
            author: self.author.clone(),
            content: self.content.clone(),
            image: self.image.clone(),
            attachment: None,
        }
    }
}

impl Post for Announcement {
    fn cache(state: &AppState) -> &DetailCache<Self> {
        &state.announcements
    }

    fn id(&self) -> u64 {
        self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn tag(&self) -> &str {
        &self.tag
    }

    fn published_at(&self) -> Option<&str> {
        self.published_at.as_deref()
    }

    fn detail_path(&self) -> Option<String> {
        Announcement::detail_path(self)
    }

    fn summary(&self, max_chars: usize) -> String {
        Announcement::summary(self, max_chars)
    }

    fn view(&self) -> PostView {
        PostView {
            title: self.title.clone(),
            tag: self.tag.clone(),
            date: self.published_at().map(format_date).unwrap_or_default(),
            author: None,
            content: self.content.clone(),
            image: None,
            attachment: self.attachment.clone(),
        }
    }
}
