// src/export/mod.rs

//! Static snapshots of news articles for crawlers.
//!
//! Each article with a usable tag becomes
//! `berita/detail/<id>/<tag>/index.html`, where `<tag>` is the decoded
//! normalized tag, so a static server resolves the canonical URL directly.

use askama::Template;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::{AppError, Result};
use crate::models::{Article, SiteConfig};
use crate::routing::{decode_tag, normalize_tag};
use crate::services::Resource;
use crate::utils::text::parse_date;
use crate::web::Post;
use crate::web::views::SnapshotTemplate;

/// Storage key of the sitemap.
pub const SITEMAP_KEY: &str = "sitemap.xml";

/// Storage key of the export summary.
pub const SUMMARY_KEY: &str = "export.json";

/// One rendered snapshot, ready to be written.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub key: String,
    pub url: String,
    pub lastmod: Option<String>,
    pub html: String,
}

/// Why an article produced no snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    MissingTag,
    /// Decoded tag is not a usable directory name
    UnsafeTag,
}

/// Storage key of an article's snapshot.
pub fn snapshot_key(article: &Article) -> std::result::Result<String, SkipReason> {
    if article.tag.trim().is_empty() {
        return Err(SkipReason::MissingTag);
    }
    let directory = decode_tag(&normalize_tag(&article.tag)).map_err(|_| SkipReason::UnsafeTag)?;
    if directory.contains(['/', '\\']) || directory == "." || directory == ".." {
        return Err(SkipReason::UnsafeTag);
    }
    Ok(format!(
        "{}/detail/{}/{}/index.html",
        Article::PATH,
        article.id,
        directory
    ))
}

/// Render the snapshot of one article.
///
/// Fails for articles [`snapshot_key`] would skip.
pub fn render_snapshot(
    article: &Article,
    site: &SiteConfig,
    description_length: usize,
) -> Result<Snapshot> {
    let key = snapshot_key(article).map_err(|reason| {
        AppError::validation(format!("Article {} not exportable: {:?}", article.id, reason))
    })?;
    let path = article
        .detail_path()
        .ok_or_else(|| AppError::validation(format!("Article {} has no tag", article.id)))?;
    let url = site.absolute_url(&path);
    let lastmod = article
        .published_at
        .as_deref()
        .and_then(parse_date)
        .map(|d| d.format("%Y-%m-%d").to_string());

    let html = SnapshotTemplate {
        site_name: site.name.clone(),
        title: article.title.clone(),
        description: article.summary(description_length),
        canonical_url: url.clone(),
        og_image: article.image.clone().or_else(|| site.default_image.clone()),
        published_at: article.published_at.clone(),
        post: article.view(),
    }
    .render()?;

    Ok(Snapshot {
        key,
        url,
        lastmod,
        html,
    })
}

/// A `<url>` entry of the sitemap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SitemapEntry {
    pub loc: String,
    pub lastmod: Option<String>,
}

#[derive(Template)]
#[template(path = "export/sitemap.xml")]
struct SitemapTemplate<'a> {
    entries: &'a [SitemapEntry],
}

/// Render `sitemap.xml` for the given entries.
pub fn render_sitemap(entries: &[SitemapEntry]) -> Result<String> {
    Ok(SitemapTemplate { entries }.render()?)
}

/// Outcome of an export run, written as `export.json`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ExportSummary {
    pub generated_at: Option<DateTime<Utc>>,
    pub total: usize,
    pub written: usize,
    pub skipped: usize,
    pub failed: usize,
    pub pages: Vec<String>,
}

impl ExportSummary {
    pub fn new(total: usize) -> Self {
        Self {
            generated_at: Some(Utc::now()),
            total,
            ..Self::default()
        }
    }
}
