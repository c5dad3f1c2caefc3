//! News articles and announcements.

use serde::{Deserialize, Serialize};

use crate::listing::Filterable;
use crate::services::Resource;
use crate::utils::text;

/// Listings that have a detail page, and so may carry legacy URLs.
pub const POST_LISTINGS: [&str; 2] = [Article::PATH, Announcement::PATH];

/// A news article (`berita`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Article {
    #[serde(deserialize_with = "super::deserialize_id")]
    pub id: u64,

    pub title: String,

    /// Category label, also used as the human-readable URL segment
    #[serde(default)]
    pub tag: String,

    /// Body markup as stored by the backend
    #[serde(default)]
    pub content: String,

    #[serde(default)]
    pub excerpt: Option<String>,

    /// Cover image URL
    #[serde(default)]
    pub image: Option<String>,

    #[serde(default)]
    pub author: Option<String>,

    #[serde(default)]
    pub published_at: Option<String>,
}

impl Article {
    /// Canonical detail path, `None` when the tag is missing.
    pub fn detail_path(&self) -> Option<String> {
        super::detail_path(Self::PATH, self.id, &self.tag)
    }

    /// Short plain-text summary: the excerpt if present, else the stripped body.
    pub fn summary(&self, max_chars: usize) -> String {
        let source = match self.excerpt.as_deref() {
            Some(excerpt) if !excerpt.trim().is_empty() => excerpt,
            _ => &self.content,
        };
        text::truncate(&text::strip_html(source), max_chars)
    }
}

impl Resource for Article {
    const PATH: &'static str = "berita";
    const LABEL: &'static str = "Berita";
}

impl Filterable for Article {
    fn search_text(&self) -> String {
        format!("{} {}", self.title, text::strip_html(&self.content))
    }

    fn category(&self) -> Option<&str> {
        Some(self.tag.as_str()).filter(|tag| !tag.is_empty())
    }

    fn year(&self) -> Option<i32> {
        self.published_at.as_deref().and_then(text::year_of)
    }
}

/// An announcement (`pengumuman`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Announcement {
    #[serde(deserialize_with = "super::deserialize_id")]
    pub id: u64,

    pub title: String,

    #[serde(default)]
    pub tag: String,

    #[serde(default)]
    pub content: String,

    /// Downloadable file linked from the announcement
    #[serde(default)]
    pub attachment: Option<String>,

    #[serde(default)]
    pub published_at: Option<String>,
}

impl Announcement {
    /// Canonical detail path, `None` when the tag is missing.
    pub fn detail_path(&self) -> Option<String> {
        super::detail_path(Self::PATH, self.id, &self.tag)
    }

    pub fn summary(&self, max_chars: usize) -> String {
        text::truncate(&text::strip_html(&self.content), max_chars)
    }
}

impl Resource for Announcement {
    const PATH: &'static str = "pengumuman";
    const LABEL: &'static str = "Pengumuman";
}

impl Filterable for Announcement {
    fn search_text(&self) -> String {
        format!("{} {}", self.title, text::strip_html(&self.content))
    }

    fn category(&self) -> Option<&str> {
        Some(self.tag.as_str()).filter(|tag| !tag.is_empty())
    }

    fn year(&self) -> Option<i32> {
        self.published_at.as_deref().and_then(text::year_of)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_article() -> Article {
        Article {
            id: 7,
            title: "Wisuda Periode II".to_string(),
            tag: "Pengumuman Umum".to_string(),
            content: "<p>Wisuda akan <b>dilaksanakan</b> di aula.</p>".to_string(),
            excerpt: None,
            image: None,
            author: Some("Humas".to_string()),
            published_at: Some("2026-10-01T08:00:00Z".to_string()),
        }
    }

    #[test]
    fn test_deserialize_string_id_and_missing_fields() {
        let article: Article =
            serde_json::from_str(r#"{"id": "12", "title": "Seminar"}"#).unwrap();
        assert_eq!(article.id, 12);
        assert_eq!(article.tag, "");
        assert!(article.detail_path().is_none());
    }

    #[test]
    fn test_detail_path() {
        assert_eq!(
            sample_article().detail_path(),
            Some("/berita/detail/7/pengumuman-umum".to_string())
        );
    }

    #[test]
    fn test_summary_strips_markup() {
        assert_eq!(
            sample_article().summary(200),
            "Wisuda akan dilaksanakan di aula."
        );
    }

    #[test]
    fn test_summary_prefers_excerpt() {
        let mut article = sample_article();
        article.excerpt = Some("Ringkasan singkat".to_string());
        assert_eq!(article.summary(200), "Ringkasan singkat");
    }

    #[test]
    fn test_filterable_fields() {
        let article = sample_article();
        assert_eq!(article.category(), Some("Pengumuman Umum"));
        assert_eq!(article.year(), Some(2026));
        assert!(article.search_text().contains("dilaksanakan"));
    }

    #[test]
    fn test_announcement_detail_path() {
        let announcement: Announcement = serde_json::from_str(
            r#"{"id": 3, "title": "Libur", "tag": "Akademik", "content": "Libur nasional"}"#,
        )
        .unwrap();
        assert_eq!(
            announcement.detail_path(),
            Some("/pengumuman/detail/3/akademik".to_string())
        );
    }
}
