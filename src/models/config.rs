//! Application configuration structures.

use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Listener settings for the page server
    #[serde(default)]
    pub server: ServerConfig,

    /// Remote REST backend settings
    #[serde(default)]
    pub api: ApiConfig,

    /// Presentation settings
    #[serde(default)]
    pub site: SiteConfig,

    /// Detail record cache
    #[serde(default)]
    pub cache: CacheConfig,

    /// Legacy URL migration rules
    #[serde(default)]
    pub routing: RoutingConfig,

    /// Static snapshot export
    #[serde(default)]
    pub export: ExportConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        url::Url::parse(&self.api.base_url)?;
        url::Url::parse(&self.site.base_url)?;

        if self.api.user_agent.trim().is_empty() {
            return Err(AppError::validation("api.user_agent is empty"));
        }
        if self.api.timeout_secs == 0 {
            return Err(AppError::validation("api.timeout_secs must be > 0"));
        }
        if self.site.per_page == 0 {
            return Err(AppError::validation("site.per_page must be > 0"));
        }
        if self.cache.detail_ttl_secs == 0 {
            return Err(AppError::validation("cache.detail_ttl_secs must be > 0"));
        }
        if self.export.concurrency == 0 {
            return Err(AppError::validation("export.concurrency must be > 0"));
        }
        if self.routing.listings.is_empty() {
            return Err(AppError::validation("No routing.listings defined"));
        }
        for listing in &self.routing.listings {
            if listing.is_empty() || listing.contains('/') {
                return Err(AppError::validation(format!(
                    "routing.listings entry '{listing}' must be a single path segment"
                )));
            }
            if !super::POST_LISTINGS.contains(&listing.as_str()) {
                return Err(AppError::validation(format!(
                    "routing.listings entry '{listing}' has no detail page (expected one of {})",
                    super::POST_LISTINGS.join(", ")
                )));
            }
        }
        for prefix in &self.routing.excluded_prefixes {
            if !prefix.starts_with('/') {
                return Err(AppError::validation(format!(
                    "routing.excluded_prefixes entry '{prefix}' must start with '/'"
                )));
            }
        }
        self.server.socket_addr()?;
        Ok(())
    }
}

/// Page server listener settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "defaults::host")]
    pub host: String,

    #[serde(default = "defaults::port")]
    pub port: u16,

    /// Directory of stylesheets and images served under `/assets`
    #[serde(default = "defaults::assets_dir")]
    pub assets_dir: PathBuf,
}

impl ServerConfig {
    /// Parse host and port into a bindable address.
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| AppError::config(format!("invalid server address: {e}")))
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: defaults::host(),
            port: defaults::port(),
            assets_dir: defaults::assets_dir(),
        }
    }
}

/// Remote REST backend settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL every resource path is appended to
    #[serde(default = "defaults::api_base_url")]
    pub base_url: String,

    /// User-Agent header for backend requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::api_base_url(),
            user_agent: defaults::user_agent(),
            timeout_secs: defaults::timeout(),
        }
    }
}

/// Presentation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Site name shown in the header and page titles
    #[serde(default = "defaults::site_name")]
    pub name: String,

    /// Public origin used for canonical and share URLs
    #[serde(default = "defaults::site_base_url")]
    pub base_url: String,

    /// Default OpenGraph image for pages without one
    #[serde(default)]
    pub default_image: Option<String>,

    /// Items per listing page
    #[serde(default = "defaults::per_page")]
    pub per_page: usize,

    /// Items per section on the home page
    #[serde(default = "defaults::home_items")]
    pub home_items: usize,

    /// Related items under a detail page
    #[serde(default = "defaults::related_items")]
    pub related_items: usize,
}

impl SiteConfig {
    /// Absolute public URL for a site path.
    pub fn absolute_url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: defaults::site_name(),
            base_url: defaults::site_base_url(),
            default_image: None,
            per_page: defaults::per_page(),
            home_items: defaults::home_items(),
            related_items: defaults::related_items(),
        }
    }
}

/// Detail record cache settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Lifetime of a cached detail record in seconds
    #[serde(default = "defaults::detail_ttl")]
    pub detail_ttl_secs: u64,

    /// Upper bound on cached records per content type
    #[serde(default = "defaults::max_entries")]
    pub max_entries: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            detail_ttl_secs: defaults::detail_ttl(),
            max_entries: defaults::max_entries(),
        }
    }
}

/// Legacy URL migration settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutingConfig {
    /// Listing segments whose detail URLs are normalized
    #[serde(default = "defaults::listings")]
    pub listings: Vec<String>,

    /// Path prefixes the routing layer never touches
    #[serde(default = "defaults::excluded_prefixes")]
    pub excluded_prefixes: Vec<String>,
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            listings: defaults::listings(),
            excluded_prefixes: defaults::excluded_prefixes(),
        }
    }
}

/// Static export settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Directory snapshots are written to and served from
    #[serde(default = "defaults::output_dir")]
    pub output_dir: PathBuf,

    /// Maximum concurrent snapshot writes
    #[serde(default = "defaults::export_concurrency")]
    pub concurrency: usize,

    /// Length limit for meta descriptions, in characters
    #[serde(default = "defaults::description_length")]
    pub description_length: usize,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: defaults::output_dir(),
            concurrency: defaults::export_concurrency(),
            description_length: defaults::description_length(),
        }
    }
}

mod defaults {
    use std::path::PathBuf;

    // Server defaults
    pub fn host() -> String {
        "0.0.0.0".into()
    }
    pub fn port() -> u16 {
        3000
    }
    pub fn assets_dir() -> PathBuf {
        PathBuf::from("assets")
    }

    // API defaults
    pub fn api_base_url() -> String {
        "http://localhost:8000/api".into()
    }
    pub fn user_agent() -> String {
        "Mozilla/5.0 (compatible; faculty-site/0.1)".into()
    }
    pub fn timeout() -> u64 {
        15
    }

    // Site defaults
    pub fn site_name() -> String {
        "Fakultas".into()
    }
    pub fn site_base_url() -> String {
        "http://localhost:3000".into()
    }
    pub fn per_page() -> usize {
        9
    }
    pub fn home_items() -> usize {
        3
    }
    pub fn related_items() -> usize {
        4
    }

    // Cache defaults
    pub fn detail_ttl() -> u64 {
        300
    }
    pub fn max_entries() -> u64 {
        1_000
    }

    // Routing defaults
    pub fn listings() -> Vec<String> {
        vec!["berita".into(), "pengumuman".into()]
    }
    pub fn excluded_prefixes() -> Vec<String> {
        vec!["/api".into(), "/assets".into(), "/favicon.ico".into()]
    }

    // Export defaults
    pub fn output_dir() -> PathBuf {
        PathBuf::from("out")
    }
    pub fn export_concurrency() -> usize {
        8
    }
    pub fn description_length() -> usize {
        160
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_default_config_ok() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn validate_rejects_empty_user_agent() {
        let mut config = Config::default();
        config.api.user_agent = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_zero_per_page() {
        let mut config = Config::default();
        config.site.per_page = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_nested_listing() {
        let mut config = Config::default();
        config.routing.listings = vec!["berita/lama".to_string()];
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_listing_without_detail_page() {
        let mut config = Config::default();
        config.routing.listings.push("agenda".to_string());
        assert!(config.validate().is_err());

        config.routing.listings = vec!["pengumuman".to_string()];
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_rejects_bad_base_url() {
        let mut config = Config::default();
        config.api.base_url = "not a url".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn partial_toml_falls_back_to_defaults() {
        let config: Config = toml::from_str(
            r#"
            [site]
            name = "Fakultas Teknik"

            [api]
            base_url = "https://api.example.ac.id"
            "#,
        )
        .unwrap();

        assert_eq!(config.site.name, "Fakultas Teknik");
        assert_eq!(config.site.per_page, 9);
        assert_eq!(config.api.timeout_secs, 15);
        assert_eq!(config.routing.listings, vec!["berita", "pengumuman"]);
    }

    #[test]
    fn absolute_url_joins_single_slash() {
        let mut site = SiteConfig::default();
        site.base_url = "https://fakultas.example.ac.id/".to_string();
        assert_eq!(
            site.absolute_url("/berita/detail/1/kampus"),
            "https://fakultas.example.ac.id/berita/detail/1/kampus"
        );
    }
}
