//! Filter form state for listing pages.

use std::collections::BTreeSet;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

/// Fields a listing can be filtered on.
pub trait Filterable {
    /// Free text matched against the search box.
    fn search_text(&self) -> String;

    /// Category label for the category dropdown.
    fn category(&self) -> Option<&str> {
        None
    }

    /// Year for the year dropdown.
    fn year(&self) -> Option<i32> {
        None
    }
}

/// Filter values read from the query string.
///
/// Blank or unparsable values are treated as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    #[serde(default, deserialize_with = "lenient")]
    pub q: Option<String>,

    #[serde(default, deserialize_with = "lenient")]
    pub category: Option<String>,

    #[serde(default, deserialize_with = "lenient")]
    pub year: Option<i32>,

    #[serde(default, deserialize_with = "lenient")]
    pub page: Option<usize>,
}

/// One `<option>` of a filter dropdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub selected: bool,
}

impl FilterState {
    /// Requested page, 1-based.
    pub fn page(&self) -> usize {
        self.page.unwrap_or(1).max(1)
    }

    /// Whether any filter (not counting the page) is set.
    pub fn is_active(&self) -> bool {
        self.q.is_some() || self.category.is_some() || self.year.is_some()
    }

    pub fn matches<T: Filterable>(&self, item: &T) -> bool {
        if let Some(q) = &self.q {
            let needle = q.to_lowercase();
            if !item.search_text().to_lowercase().contains(&needle) {
                return false;
            }
        }
        if let Some(category) = &self.category {
            match item.category() {
                Some(c) if c.trim().eq_ignore_ascii_case(category.trim()) => {}
                _ => return false,
            }
        }
        if let Some(year) = self.year {
            if item.year() != Some(year) {
                return false;
            }
        }
        true
    }

    /// Items passing every active filter, in their original order.
    pub fn apply<'a, T: Filterable>(&self, items: &'a [T]) -> Vec<&'a T> {
        items.iter().filter(|item| self.matches(*item)).collect()
    }

    /// Query string for a link to `page` that keeps the current filters.
    pub fn query_string(&self, page: usize) -> String {
        let mut serializer = url::form_urlencoded::Serializer::new(String::new());
        if let Some(q) = &self.q {
            serializer.append_pair("q", q);
        }
        if let Some(category) = &self.category {
            serializer.append_pair("category", category);
        }
        if let Some(year) = self.year {
            serializer.append_pair("year", &year.to_string());
        }
        if page > 1 {
            serializer.append_pair("page", &page.to_string());
        }
        let query = serializer.finish();
        if query.is_empty() {
            String::new()
        } else {
            format!("?{query}")
        }
    }

    /// Distinct categories of `items`, sorted, marking the selected one.
    pub fn category_options<T: Filterable>(&self, items: &[T]) -> Vec<SelectOption> {
        let values: BTreeSet<&str> = items
            .iter()
            .filter_map(|item| item.category())
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .collect();

        values
            .into_iter()
            .map(|value| SelectOption {
                value: value.to_string(),
                selected: self
                    .category
                    .as_deref()
                    .is_some_and(|c| c.trim().eq_ignore_ascii_case(value)),
            })
            .collect()
    }

    /// Distinct years of `items`, newest first, marking the selected one.
    pub fn year_options<T: Filterable>(&self, items: &[T]) -> Vec<SelectOption> {
        let years: BTreeSet<i32> = items.iter().filter_map(|item| item.year()).collect();
        years
            .into_iter()
            .rev()
            .map(|year| SelectOption {
                value: year.to_string(),
                selected: self.year == Some(year),
            })
            .collect()
    }
}

fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.and_then(|s| {
        let s = s.trim();
        if s.is_empty() { None } else { s.parse().ok() }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Item {
        title: &'static str,
        category: &'static str,
        year: i32,
    }

    impl Filterable for Item {
        fn search_text(&self) -> String {
            self.title.to_string()
        }
        fn category(&self) -> Option<&str> {
            Some(self.category)
        }
        fn year(&self) -> Option<i32> {
            Some(self.year)
        }
    }

    fn items() -> Vec<Item> {
        vec![
            Item { title: "Wisuda Periode I", category: "Akademik", year: 2025 },
            Item { title: "Lomba Robotik", category: "Prestasi", year: 2026 },
            Item { title: "Jadwal Wisuda", category: "akademik", year: 2026 },
        ]
    }

    fn parse(query: &str) -> FilterState {
        serde_json::from_value(serde_json::Value::Object(
            url::form_urlencoded::parse(query.as_bytes())
                .map(|(k, v)| (k.into_owned(), serde_json::Value::String(v.into_owned())))
                .collect(),
        ))
        .unwrap()
    }

    #[test]
    fn test_blank_values_are_absent() {
        let state = parse("q=&category=%20&year=&page=");
        assert_eq!(state, FilterState::default());
        assert_eq!(state.page(), 1);
        assert!(!state.is_active());
    }

    #[test]
    fn test_invalid_numbers_are_absent() {
        let state = parse("year=abc&page=-2");
        assert_eq!(state.year, None);
        assert_eq!(state.page(), 1);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let state = FilterState { q: Some("WISUDA".into()), ..Default::default() };
        let data = items();
        assert_eq!(state.apply(&data).len(), 2);
    }

    #[test]
    fn test_combined_filters() {
        let state = FilterState {
            q: Some("wisuda".into()),
            category: Some("Akademik".into()),
            year: Some(2026),
            page: None,
        };
        let data = items();
        let result = state.apply(&data);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].title, "Jadwal Wisuda");
    }

    #[test]
    fn test_query_string_keeps_filters() {
        let state = FilterState {
            q: Some("lomba robot".into()),
            category: None,
            year: Some(2026),
            page: Some(4),
        };
        assert_eq!(state.query_string(2), "?q=lomba+robot&year=2026&page=2");
        assert_eq!(state.query_string(1), "?q=lomba+robot&year=2026");
        assert_eq!(FilterState::default().query_string(1), "");
    }

    #[test]
    fn test_options() {
        let state = FilterState { year: Some(2025), ..Default::default() };
        let data = items();

        let categories = state.category_options(&data);
        let values: Vec<_> = categories.iter().map(|o| o.value.as_str()).collect();
        assert_eq!(values, vec!["Akademik", "Prestasi", "akademik"]);

        let years = state.year_options(&data);
        assert_eq!(years[0].value, "2026");
        assert!(!years[0].selected);
        assert!(years[1].selected);
    }
}
