//! Storage abstractions for exported snapshots.
//!
//! Keys are `/`-separated paths relative to the storage root:
//!
//! ```text
//! out/
//! ├── export.json                          # Summary of the last export
//! ├── sitemap.xml                          # Every exported detail page
//! └── berita/
//!     └── detail/
//!         └── 42/
//!             └── berita-kampus/
//!                 └── index.html           # Crawler-facing snapshot
//! ```

pub mod local;

use async_trait::async_trait;

use crate::error::Result;

// Re-export for convenience
pub use local::LocalStorage;

/// Trait for snapshot storage backends.
#[async_trait]
pub trait SnapshotStorage: Send + Sync {
    /// Write `bytes` under `key`, replacing any previous content atomically.
    async fn write(&self, key: &str, bytes: &[u8]) -> Result<()>;

    /// Read the content under `key`, `None` if absent.
    async fn read(&self, key: &str) -> Result<Option<Vec<u8>>>;
}
