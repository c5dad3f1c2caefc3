// src/models/mod.rs

//! Domain models for the site.
//!
//! Every content type mirrors a backend JSON shape. Records are read-only
//! snapshots; the backend owns their lifecycle.

mod article;
mod config;
mod directory;
mod envelope;
mod media;

// Re-export all public types
pub use article::{Announcement, Article, POST_LISTINGS};
pub use config::{
    ApiConfig, CacheConfig, Config, ExportConfig, RoutingConfig, ServerConfig, SiteConfig,
};
pub use directory::{Document, ScheduleEntry, Student, WEEKDAYS};
pub use envelope::{DetailEnvelope, ListEnvelope};
pub use media::{GalleryImage, Video};

use serde::{Deserialize, Deserializer};

use crate::routing::normalize_tag;

/// Canonical detail path for a record, if it carries a usable tag.
///
/// Records without a tag render without a link.
pub fn detail_path(listing: &str, id: u64, tag: &str) -> Option<String> {
    if tag.trim().is_empty() {
        return None;
    }
    Some(format!("/{listing}/detail/{id}/{}", normalize_tag(tag)))
}

/// Accept record ids sent either as JSON numbers or numeric strings.
pub(crate) fn deserialize_id<'de, D>(deserializer: D) -> std::result::Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Number(u64),
        Text(String),
    }

    match RawId::deserialize(deserializer)? {
        RawId::Number(id) => Ok(id),
        RawId::Text(text) => text.trim().parse().map_err(serde::de::Error::custom),
    }
}

/// Accept free text that some endpoints send as a number (e.g. student NIM).
pub(crate) fn deserialize_text<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawText {
        Number(i64),
        Text(String),
    }

    Ok(match RawText::deserialize(deserializer)? {
        RawText::Number(n) => n.to_string(),
        RawText::Text(text) => text,
    })
}
