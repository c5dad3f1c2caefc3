// src/utils/text.rs

//! Text helpers for turning backend markup into display strings.

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use scraper::Html;
use unicode_segmentation::UnicodeSegmentation;

const MONTHS_ID: [&str; 12] = [
    "Januari",
    "Februari",
    "Maret",
    "April",
    "Mei",
    "Juni",
    "Juli",
    "Agustus",
    "September",
    "Oktober",
    "November",
    "Desember",
];

/// Collapse every whitespace run into a single space and trim.
pub fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Plain text content of an HTML fragment.
pub fn strip_html(html: &str) -> String {
    let fragment = Html::parse_fragment(html);
    let text: Vec<&str> = fragment.root_element().text().collect();
    collapse_whitespace(&text.join(" "))
}

/// Cut `s` to at most `max_chars` graphemes, ending on a word boundary
/// with an ellipsis when anything was dropped.
pub fn truncate(s: &str, max_chars: usize) -> String {
    let graphemes: Vec<&str> = s.graphemes(true).collect();
    if graphemes.len() <= max_chars {
        return s.to_string();
    }
    if max_chars == 0 {
        return String::new();
    }

    let head = graphemes[..max_chars - 1].concat();
    let cut = match head.rfind(' ') {
        Some(idx) if idx > head.len() / 2 => &head[..idx],
        _ => head.as_str(),
    };
    format!("{}…", cut.trim_end())
}

/// Parse the date part of a backend timestamp.
///
/// Accepts `YYYY-MM-DD`, RFC 3339 and `YYYY-MM-DD HH:MM:SS`.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return Some(dt.date());
    }
    raw.get(..10)
        .and_then(|head| NaiveDate::parse_from_str(head, "%Y-%m-%d").ok())
}

/// Year of a backend timestamp.
pub fn year_of(raw: &str) -> Option<i32> {
    parse_date(raw).map(|d| d.year())
}

/// Long Indonesian date, e.g. "18 Oktober 2026". Unparseable input is
/// returned unchanged.
pub fn format_date(raw: &str) -> String {
    match parse_date(raw) {
        Some(date) => format!(
            "{} {} {}",
            date.day(),
            MONTHS_ID[date.month0() as usize],
            date.year()
        ),
        None => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_html() {
        assert_eq!(
            strip_html("<p>Halo <strong>dunia</strong></p>\n<p>kedua</p>"),
            "Halo dunia kedua"
        );
    }

    #[test]
    fn test_truncate_short_unchanged() {
        assert_eq!(truncate("pendek", 10), "pendek");
    }

    #[test]
    fn test_truncate_word_boundary() {
        let out = truncate("Pendaftaran wisuda dibuka minggu depan", 20);
        assert_eq!(out, "Pendaftaran wisuda…");
        assert!(out.graphemes(true).count() <= 20);
    }

    #[test]
    fn test_parse_date_formats() {
        let expected = NaiveDate::from_ymd_opt(2026, 10, 18);
        assert_eq!(parse_date("2026-10-18"), expected);
        assert_eq!(parse_date("2026-10-18T07:30:00+07:00"), expected);
        assert_eq!(parse_date("2026-10-18 07:30:00"), expected);
        assert_eq!(parse_date("kemarin"), None);
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2026-10-18"), "18 Oktober 2026");
        assert_eq!(format_date("-"), "-");
    }
}
