//! Gallery images and videos.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::listing::Filterable;
use crate::services::Resource;
use crate::utils::text;

/// A gallery photo (`galeri`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GalleryImage {
    #[serde(deserialize_with = "super::deserialize_id")]
    pub id: u64,

    pub title: String,

    pub image_url: String,

    #[serde(default)]
    pub caption: Option<String>,

    #[serde(default)]
    pub published_at: Option<String>,
}

impl Resource for GalleryImage {
    const PATH: &'static str = "galeri";
    const LABEL: &'static str = "Galeri";
}

impl Filterable for GalleryImage {
    fn search_text(&self) -> String {
        format!("{} {}", self.title, self.caption.as_deref().unwrap_or(""))
    }

    fn year(&self) -> Option<i32> {
        self.published_at.as_deref().and_then(text::year_of)
    }
}

/// A video (`video`), usually hosted on YouTube.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Video {
    #[serde(deserialize_with = "super::deserialize_id")]
    pub id: u64,

    pub title: String,

    /// Watch URL as entered in the backend
    pub url: String,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub published_at: Option<String>,
}

impl Video {
    /// YouTube video id for watch, short and embed URL forms.
    pub fn youtube_id(&self) -> Option<String> {
        let parsed = Url::parse(&self.url).ok()?;
        let host = parsed.host_str()?.trim_start_matches("www.").to_lowercase();

        let id = match host.as_str() {
            "youtu.be" => parsed.path_segments()?.next().map(str::to_string),
            "youtube.com" | "m.youtube.com" | "youtube-nocookie.com" => {
                let mut segments = parsed.path_segments()?;
                match segments.next() {
                    Some("watch") => parsed
                        .query_pairs()
                        .find(|(key, _)| key == "v")
                        .map(|(_, value)| value.into_owned()),
                    Some("embed") | Some("shorts") | Some("live") => {
                        segments.next().map(str::to_string)
                    }
                    _ => None,
                }
            }
            _ => None,
        };

        id.filter(|id| !id.is_empty())
    }

    /// URL for the player iframe; non-YouTube links are embedded as-is.
    pub fn embed_url(&self) -> String {
        match self.youtube_id() {
            Some(id) => format!("https://www.youtube.com/embed/{id}"),
            None => self.url.clone(),
        }
    }

    /// Preview image, only known for YouTube videos.
    pub fn thumbnail_url(&self) -> Option<String> {
        self.youtube_id()
            .map(|id| format!("https://img.youtube.com/vi/{id}/hqdefault.jpg"))
    }
}

impl Resource for Video {
    const PATH: &'static str = "video";
    const LABEL: &'static str = "Video";
}

impl Filterable for Video {
    fn search_text(&self) -> String {
        format!("{} {}", self.title, self.description.as_deref().unwrap_or(""))
    }

    fn year(&self) -> Option<i32> {
        self.published_at.as_deref().and_then(text::year_of)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn video(url: &str) -> Video {
        Video {
            id: 1,
            title: "Profil Fakultas".to_string(),
            url: url.to_string(),
            description: None,
            published_at: None,
        }
    }

    #[test]
    fn test_youtube_watch_url() {
        let v = video("https://www.youtube.com/watch?v=abc123&t=10s");
        assert_eq!(v.youtube_id(), Some("abc123".to_string()));
        assert_eq!(v.embed_url(), "https://www.youtube.com/embed/abc123");
        assert_eq!(
            v.thumbnail_url(),
            Some("https://img.youtube.com/vi/abc123/hqdefault.jpg".to_string())
        );
    }

    #[test]
    fn test_youtube_short_and_embed_urls() {
        assert_eq!(
            video("https://youtu.be/xyz789").youtube_id(),
            Some("xyz789".to_string())
        );
        assert_eq!(
            video("https://www.youtube.com/embed/qwe456").youtube_id(),
            Some("qwe456".to_string())
        );
    }

    #[test]
    fn test_other_host_embeds_as_is() {
        let v = video("https://vimeo.com/12345");
        assert_eq!(v.youtube_id(), None);
        assert_eq!(v.embed_url(), "https://vimeo.com/12345");
        assert_eq!(v.thumbnail_url(), None);
    }
}
