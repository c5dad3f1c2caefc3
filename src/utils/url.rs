// src/utils/url.rs

//! URL manipulation utilities.

use url::Url;

use crate::error::Result;

/// Append a resource path to a base URL, keeping the base's own path.
///
/// Unlike [`Url::join`], a base without a trailing slash is treated as a
/// directory.
///
/// # Examples
/// ```
/// use faculty::utils::url::join;
///
/// assert_eq!(
///     join("https://example.ac.id/api", "berita/detail/7").unwrap().as_str(),
///     "https://example.ac.id/api/berita/detail/7"
/// );
/// ```
pub fn join(base: &str, path: &str) -> Result<Url> {
    let joined = format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    );
    Ok(Url::parse(&joined)?)
}

/// Return `url` with the given query pairs appended, skipping empty values.
pub fn with_query<'a>(mut url: Url, pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Url {
    let pairs: Vec<_> = pairs.into_iter().filter(|(_, v)| !v.is_empty()).collect();
    if !pairs.is_empty() {
        url.query_pairs_mut().extend_pairs(pairs);
    }
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_without_trailing_slash() {
        assert_eq!(
            join("https://example.ac.id/api", "/berita").unwrap().as_str(),
            "https://example.ac.id/api/berita"
        );
    }

    #[test]
    fn test_join_with_trailing_slash() {
        assert_eq!(
            join("https://example.ac.id/api/", "berita").unwrap().as_str(),
            "https://example.ac.id/api/berita"
        );
    }

    #[test]
    fn test_join_invalid_base() {
        assert!(join("not a url", "berita").is_err());
    }

    #[test]
    fn test_with_query_skips_empty() {
        let url = Url::parse("https://example.ac.id/share").unwrap();
        let url = with_query(url, [("u", "https://a.b/c d"), ("text", "")]);
        assert_eq!(url.as_str(), "https://example.ac.id/share?u=https%3A%2F%2Fa.b%2Fc+d");
    }
}
