// src/web/views.rs

//! Askama templates and the view models they render.

use askama::Template;

use crate::listing::{FilterState, PageItem, Paginator, SelectOption};
use crate::models::{Document, GalleryImage, ScheduleEntry, Student, Video};
use crate::share::ShareLink;
use crate::utils::text::format_date;

// ============================================================================
// View models
// ============================================================================

/// Card for an article or announcement.
#[derive(Debug, Clone)]
pub struct PostCard {
    pub title: String,
    /// Missing when the record has no tag
    pub href: Option<String>,
    pub excerpt: String,
    pub image: Option<String>,
    pub date: String,
    pub tag: String,
}

/// Full article or announcement.
#[derive(Debug, Clone)]
pub struct PostView {
    pub title: String,
    pub tag: String,
    pub date: String,
    pub author: Option<String>,
    /// Trusted backend markup, rendered unescaped
    pub content: String,
    pub image: Option<String>,
    pub attachment: Option<String>,
}

#[derive(Debug, Clone)]
pub struct GalleryCard {
    pub title: String,
    pub image_url: String,
    pub caption: String,
    pub date: String,
}

#[derive(Debug, Clone)]
pub struct VideoCard {
    pub title: String,
    pub embed_url: String,
    pub thumbnail: Option<String>,
    pub description: String,
    pub date: String,
}

#[derive(Debug, Clone)]
pub struct StudentCard {
    pub name: String,
    pub nim: String,
    pub program: String,
    pub cohort: String,
    pub email: Option<String>,
    pub photo: Option<String>,
    pub initials: String,
}

#[derive(Debug, Clone)]
pub struct DocumentRow {
    pub title: String,
    pub category: String,
    pub file_url: String,
    pub extension: String,
    pub date: String,
}

#[derive(Debug, Clone)]
pub struct ScheduleRow {
    pub time: String,
    pub course: String,
    pub lecturer: String,
    pub room: String,
    pub class_group: String,
}

#[derive(Debug, Clone)]
pub struct ScheduleGroup {
    pub day: String,
    pub rows: Vec<ScheduleRow>,
}

impl From<&GalleryImage> for GalleryCard {
    fn from(image: &GalleryImage) -> Self {
        Self {
            title: image.title.clone(),
            image_url: image.image_url.clone(),
            caption: image.caption.clone().unwrap_or_default(),
            date: image.published_at.as_deref().map(format_date).unwrap_or_default(),
        }
    }
}

impl From<&Video> for VideoCard {
    fn from(video: &Video) -> Self {
        Self {
            title: video.title.clone(),
            embed_url: video.embed_url(),
            thumbnail: video.thumbnail_url(),
            description: video.description.clone().unwrap_or_default(),
            date: video.published_at.as_deref().map(format_date).unwrap_or_default(),
        }
    }
}

impl From<&Student> for StudentCard {
    fn from(student: &Student) -> Self {
        Self {
            name: student.name.clone(),
            nim: student.nim.clone(),
            program: student.program.clone(),
            cohort: student.cohort.map(|c| c.to_string()).unwrap_or_default(),
            email: student.email.clone(),
            photo: student.photo.clone(),
            initials: student.initials(),
        }
    }
}

impl From<&Document> for DocumentRow {
    fn from(document: &Document) -> Self {
        Self {
            title: document.title.clone(),
            category: document.category.clone(),
            file_url: document.file_url.clone(),
            extension: document.extension().unwrap_or_else(|| "FILE".to_string()),
            date: document.published_at.as_deref().map(format_date).unwrap_or_default(),
        }
    }
}

impl From<&ScheduleEntry> for ScheduleRow {
    fn from(entry: &ScheduleEntry) -> Self {
        Self {
            time: entry.time_range(),
            course: entry.course.clone(),
            lecturer: entry.lecturer.clone(),
            room: entry.room.clone(),
            class_group: entry.class_group.clone().unwrap_or_default(),
        }
    }
}

/// One link of the pagination bar; `href` is `None` for gaps and the
/// current page.
#[derive(Debug, Clone)]
pub struct PageLink {
    pub label: String,
    pub href: Option<String>,
    pub current: bool,
}

#[derive(Debug, Clone, Default)]
pub struct PaginationView {
    pub prev: Option<String>,
    pub next: Option<String>,
    pub links: Vec<PageLink>,
}

impl PaginationView {
    /// Links for `paginator`, keeping the filters of `state`.
    pub fn build(base_path: &str, paginator: &Paginator, state: &FilterState) -> Self {
        let href = |page: usize| format!("{base_path}{}", state.query_string(page));

        let links = paginator
            .window()
            .into_iter()
            .map(|item| match item {
                PageItem::Page(page) => PageLink {
                    label: page.to_string(),
                    href: (page != paginator.page()).then(|| href(page)),
                    current: page == paginator.page(),
                },
                PageItem::Gap => PageLink {
                    label: "…".to_string(),
                    href: None,
                    current: false,
                },
            })
            .collect();

        Self {
            prev: paginator.prev().map(href),
            next: paginator.next().map(href),
            links,
        }
    }

    /// Whether there is more than one page to link to.
    pub fn is_visible(&self) -> bool {
        self.links.len() > 1
    }
}

// ============================================================================
// Pages
// ============================================================================

#[derive(Template)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub site_name: String,
    pub title: String,
    pub active: &'static str,
    pub news: Vec<PostCard>,
    pub news_error: Option<String>,
    pub announcements: Vec<PostCard>,
    pub announcements_error: Option<String>,
    pub gallery: Vec<GalleryCard>,
    pub gallery_error: Option<String>,
}

#[derive(Template)]
#[template(path = "posts.html")]
pub struct PostListTemplate {
    pub site_name: String,
    pub title: String,
    pub active: &'static str,
    /// Listing path, e.g. `/berita`
    pub listing: String,
    pub cards: Vec<PostCard>,
    pub total: usize,
    pub error: Option<String>,
    pub query: String,
    pub categories: Vec<SelectOption>,
    pub years: Vec<SelectOption>,
    pub pagination: PaginationView,
}

#[derive(Template)]
#[template(path = "post_detail.html")]
pub struct PostDetailTemplate {
    pub site_name: String,
    pub title: String,
    pub active: &'static str,
    pub listing: String,
    pub listing_label: String,
    pub post: PostView,
    pub description: String,
    pub canonical_url: String,
    pub og_image: Option<String>,
    pub share: Vec<ShareLink>,
    pub related: Vec<PostCard>,
    pub related_error: Option<String>,
}

#[derive(Template)]
#[template(path = "schedule.html")]
pub struct ScheduleTemplate {
    pub site_name: String,
    pub title: String,
    pub active: &'static str,
    pub groups: Vec<ScheduleGroup>,
    pub total: usize,
    pub error: Option<String>,
    pub query: String,
    pub days: Vec<SelectOption>,
}

#[derive(Template)]
#[template(path = "students.html")]
pub struct StudentsTemplate {
    pub site_name: String,
    pub title: String,
    pub active: &'static str,
    pub cards: Vec<StudentCard>,
    pub total: usize,
    pub error: Option<String>,
    pub query: String,
    pub programs: Vec<SelectOption>,
    pub cohorts: Vec<SelectOption>,
    pub pagination: PaginationView,
}

#[derive(Template)]
#[template(path = "documents.html")]
pub struct DocumentsTemplate {
    pub site_name: String,
    pub title: String,
    pub active: &'static str,
    pub rows: Vec<DocumentRow>,
    pub total: usize,
    pub error: Option<String>,
    pub query: String,
    pub categories: Vec<SelectOption>,
    pub pagination: PaginationView,
}

#[derive(Template)]
#[template(path = "gallery.html")]
pub struct GalleryTemplate {
    pub site_name: String,
    pub title: String,
    pub active: &'static str,
    pub cards: Vec<GalleryCard>,
    pub error: Option<String>,
    pub years: Vec<SelectOption>,
    pub pagination: PaginationView,
}

#[derive(Template)]
#[template(path = "videos.html")]
pub struct VideosTemplate {
    pub site_name: String,
    pub title: String,
    pub active: &'static str,
    pub cards: Vec<VideoCard>,
    pub error: Option<String>,
    pub query: String,
    pub pagination: PaginationView,
}

/// Not-found and error pages.
#[derive(Template)]
#[template(path = "message.html")]
pub struct MessageTemplate {
    pub site_name: String,
    pub title: String,
    pub active: &'static str,
    pub message: String,
}

// ============================================================================
// Static export
// ============================================================================

/// Crawler-facing snapshot of one article.
#[derive(Template)]
#[template(path = "export/article.html")]
pub struct SnapshotTemplate {
    pub site_name: String,
    pub title: String,
    pub description: String,
    pub canonical_url: String,
    pub og_image: Option<String>,
    pub published_at: Option<String>,
    pub post: PostView,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pagination_view_links() {
        let state = FilterState {
            q: Some("wisuda".to_string()),
            ..Default::default()
        };
        let view = PaginationView::build("/berita", &Paginator::new(50, 10, 2), &state);

        assert_eq!(view.prev.as_deref(), Some("/berita?q=wisuda"));
        assert_eq!(view.next.as_deref(), Some("/berita?q=wisuda&page=3"));
        assert!(view.is_visible());

        let current: Vec<_> = view.links.iter().filter(|l| l.current).collect();
        assert_eq!(current.len(), 1);
        assert_eq!(current[0].label, "2");
        assert!(current[0].href.is_none());
    }

    #[test]
    fn test_single_page_hidden() {
        let view = PaginationView::build("/galeri", &Paginator::new(3, 10, 1), &FilterState::default());
        assert!(!view.is_visible());
        assert!(view.prev.is_none() && view.next.is_none());
    }
}
