// src/share.rs

//! Social share links for detail pages.

use url::Url;

use crate::error::Result;
use crate::utils::url::with_query;

/// A labelled share target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareLink {
    pub network: &'static str,
    pub href: String,
}

/// Share URLs for one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareLinks {
    pub facebook: String,
    pub twitter: String,
    pub whatsapp: String,
    pub telegram: String,
    pub linkedin: String,
}

impl ShareLinks {
    /// Build share URLs for an absolute page URL and its title.
    pub fn new(page_url: &str, title: &str) -> Result<Self> {
        // Only absolute URLs are shareable.
        let page_url = Url::parse(page_url)?.to_string();
        let message = format!("{title} {page_url}");

        Ok(Self {
            facebook: endpoint(
                "https://www.facebook.com/sharer/sharer.php",
                [("u", page_url.as_str())],
            ),
            twitter: endpoint(
                "https://twitter.com/intent/tweet",
                [("url", page_url.as_str()), ("text", title)],
            ),
            whatsapp: endpoint("https://api.whatsapp.com/send", [("text", message.as_str())]),
            telegram: endpoint(
                "https://t.me/share/url",
                [("url", page_url.as_str()), ("text", title)],
            ),
            linkedin: endpoint(
                "https://www.linkedin.com/sharing/share-offsite/",
                [("url", page_url.as_str())],
            ),
        })
    }

    /// Links in display order.
    pub fn links(&self) -> Vec<ShareLink> {
        vec![
            ShareLink { network: "Facebook", href: self.facebook.clone() },
            ShareLink { network: "X", href: self.twitter.clone() },
            ShareLink { network: "WhatsApp", href: self.whatsapp.clone() },
            ShareLink { network: "Telegram", href: self.telegram.clone() },
            ShareLink { network: "LinkedIn", href: self.linkedin.clone() },
        ]
    }
}

fn endpoint<'a, const N: usize>(base: &str, pairs: [(&'a str, &'a str); N]) -> String {
    match Url::parse(base) {
        Ok(url) => with_query(url, pairs).to_string(),
        Err(_) => base.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn links() -> ShareLinks {
        ShareLinks::new(
            "https://fakultas.example.ac.id/berita/detail/7/pengumuman-umum",
            "Wisuda & Yudisium",
        )
        .unwrap()
    }

    #[test]
    fn test_facebook() {
        assert_eq!(
            links().facebook,
            "https://www.facebook.com/sharer/sharer.php?u=https%3A%2F%2Ffakultas.example.ac.id%2Fberita%2Fdetail%2F7%2Fpengumuman-umum"
        );
    }

    #[test]
    fn test_title_is_encoded() {
        let twitter = links().twitter;
        assert!(twitter.starts_with("https://twitter.com/intent/tweet?url="));
        assert!(twitter.ends_with("&text=Wisuda+%26+Yudisium"));
    }

    #[test]
    fn test_whatsapp_combines_title_and_url() {
        let parsed = Url::parse(&links().whatsapp).unwrap();
        let text = parsed
            .query_pairs()
            .find(|(k, _)| k == "text")
            .map(|(_, v)| v.into_owned())
            .unwrap();
        assert_eq!(
            text,
            "Wisuda & Yudisium https://fakultas.example.ac.id/berita/detail/7/pengumuman-umum"
        );
    }

    #[test]
    fn test_relative_url_rejected() {
        assert!(ShareLinks::new("/berita/detail/7/a", "x").is_err());
    }

    #[test]
    fn test_links_order() {
        let networks: Vec<_> = links().links().iter().map(|l| l.network).collect();
        assert_eq!(networks, vec!["Facebook", "X", "WhatsApp", "Telegram", "LinkedIn"]);
    }
}
