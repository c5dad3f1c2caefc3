// src/routing/rules.rs

//! Legacy URL migration rules.
//!
//! Evaluation is a pure function of `(path, query, fragment)`. For each
//! configured listing, in order, first match wins:
//!
//! 1. `/<listing>#fst-<id>/<tag>` redirects to the canonical detail path.
//! 2. `/<listing>/detail?id=<id>&tag=<tag>` redirects to the canonical detail path.
//! 3. `/<listing>/detail/<id>/<tag>` redirects only when the tag is not in
//!    normalized form, or to `/<listing>` when the tag cannot be decoded.
//! 4. Anything else continues to the page handlers.

use std::sync::OnceLock;

use regex::Regex;

use crate::models::RoutingConfig;
use crate::routing::tag::{decode_tag, normalize_tag};

/// The parts of a request URL the rules look at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTarget<'a> {
    pub path: &'a str,
    pub query: Option<&'a str>,
    pub fragment: Option<&'a str>,
}

impl<'a> RequestTarget<'a> {
    pub fn new(path: &'a str, query: Option<&'a str>, fragment: Option<&'a str>) -> Self {
        Self {
            path,
            query,
            fragment,
        }
    }

    /// Split a raw request target such as `/berita?x=1#fst-1/a`.
    pub fn parse(raw: &'a str) -> Self {
        let (rest, fragment) = match raw.split_once('#') {
            Some((rest, fragment)) => (rest, Some(fragment)),
            None => (raw, None),
        };
        let (path, query) = match rest.split_once('?') {
            Some((path, query)) => (path, Some(query)),
            None => (rest, None),
        };
        Self::new(path, query, fragment)
    }
}

/// Outcome of evaluating the rules for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteDecision {
    /// Send the client to this path (query and fragment cleared)
    Redirect(String),
    /// Hand the request to the page handlers
    Continue,
}

/// The configured legacy URL rule set.
#[derive(Debug, Clone)]
pub struct LegacyRoutes {
    listings: Vec<String>,
    excluded_prefixes: Vec<String>,
}

impl LegacyRoutes {
    pub fn new(listings: Vec<String>, excluded_prefixes: Vec<String>) -> Self {
        Self {
            listings,
            excluded_prefixes,
        }
    }

    pub fn from_config(config: &RoutingConfig) -> Self {
        Self::new(config.listings.clone(), config.excluded_prefixes.clone())
    }

    /// Whether the routing layer stays out of this path entirely.
    pub fn is_excluded(&self, path: &str) -> bool {
        self.excluded_prefixes
            .iter()
            .any(|prefix| {
                let prefix = prefix.trim_end_matches('/');
                path.strip_prefix(prefix)
                    .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
            })
    }

    /// Decide between redirect and pass-through.
    pub fn evaluate(&self, target: &RequestTarget<'_>) -> RouteDecision {
        self.listings
            .iter()
            .find_map(|listing| Self::evaluate_listing(listing, target))
            .unwrap_or(RouteDecision::Continue)
    }

    fn evaluate_listing(listing: &str, target: &RequestTarget<'_>) -> Option<RouteDecision> {
        let listing_path = format!("/{listing}");
        let detail_path = format!("{listing_path}/detail");

        if target.path == listing_path {
            let (id, tag) = target.fragment.and_then(parse_fragment)?;
            return Some(RouteDecision::Redirect(canonical(listing, id, &normalize_tag(tag))));
        }

        if target.path == detail_path {
            let (id, tag) = target.query.and_then(parse_query)?;
            let id = urlencoding::encode(&id).into_owned();
            return Some(RouteDecision::Redirect(canonical(listing, &id, &normalize_tag(&tag))));
        }

        let rest = target.path.strip_prefix(&format!("{detail_path}/"))?;
        let (id, tag) = rest.split_once('/')?;
        if id.is_empty() || tag.is_empty() || tag.contains('/') {
            return None;
        }

        if decode_tag(tag).is_err() {
            return Some(RouteDecision::Redirect(listing_path));
        }
        let normalized = normalize_tag(tag);
        (normalized != tag).then(|| RouteDecision::Redirect(canonical(listing, id, &normalized)))
    }
}

static LEGACY_FRAGMENT: OnceLock<Regex> = OnceLock::new();

fn canonical(listing: &str, id: &str, tag: &str) -> String {
    format!("/{listing}/detail/{id}/{tag}")
}

/// Extract `(id, tag)` from a `fst-<id>/<tag>` fragment.
fn parse_fragment(fragment: &str) -> Option<(&str, &str)> {
    let fragment = fragment.strip_prefix('#').unwrap_or(fragment);
    let caps = LEGACY_FRAGMENT
        .get_or_init(|| Regex::new(r"^fst-(\d+)/(.+)$").expect("fragment pattern compiles"))
        .captures(fragment)?;
    Some((caps.get(1)?.as_str(), caps.get(2)?.as_str()))
}

/// Extract non-empty `id` and `tag` query parameters.
fn parse_query(query: &str) -> Option<(String, String)> {
    let mut id = None;
    let mut tag = None;
    for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
        match key.as_ref() {
            "id" if id.is_none() && !value.trim().is_empty() => id = Some(value.into_owned()),
            "tag" if tag.is_none() && !value.trim().is_empty() => tag = Some(value.into_owned()),
            _ => {}
        }
    }
    Some((id?, tag?))
}
