// src/routing/tag.rs

//! Tag normalization for URL segments.

use std::sync::OnceLock;

use regex::Regex;

use crate::error::{AppError, Result};

static WHITESPACE: OnceLock<Regex> = OnceLock::new();
static ESCAPE: OnceLock<Regex> = OnceLock::new();

fn whitespace() -> &'static Regex {
    WHITESPACE.get_or_init(|| Regex::new(r"\s+").expect("whitespace pattern compiles"))
}

fn escape() -> &'static Regex {
    ESCAPE.get_or_init(|| Regex::new(r"%[0-9A-Fa-f]{2}").expect("escape pattern compiles"))
}

/// Normalize a tag for use as a URL segment.
///
/// Lowercases, replaces every whitespace run with a single hyphen, then
/// percent-encodes the UTF-8 bytes (unreserved `A-Z a-z 0-9 - _ . ~` are
/// kept). Input that is itself a well-formed encoded segment is decoded
/// first, so `normalize_tag(normalize_tag(t)) == normalize_tag(t)`.
///
/// # Examples
/// ```
/// use faculty::routing::normalize_tag;
///
/// assert_eq!(normalize_tag("Berita  Kampus"), "berita-kampus");
/// assert_eq!(normalize_tag("Pengumuman%20Umum"), "pengumuman-umum");
/// ```
pub fn normalize_tag(raw: &str) -> String {
    let text = decode_tag(raw).unwrap_or_else(|_| raw.to_string());
    let lowered = text.to_lowercase();
    let hyphenated = whitespace().replace_all(&lowered, "-");
    urlencoding::encode(&hyphenated).into_owned()
}

/// Strictly percent-decode a URL segment.
///
/// Fails when a `%` is not followed by two hex digits or when the decoded
/// bytes are not valid UTF-8.
pub fn decode_tag(segment: &str) -> Result<String> {
    if escape().replace_all(segment, "").contains('%') {
        return Err(AppError::encoding(segment, "incomplete percent escape"));
    }
    urlencoding::decode(segment)
        .map(|decoded| decoded.into_owned())
        .map_err(|e| AppError::encoding(segment, e))
}
