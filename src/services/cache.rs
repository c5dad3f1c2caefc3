// src/services/cache.rs

//! Time-boxed cache of viewed detail records.
//!
//! One entry per `(id, tag)`, holding the record and the time it was
//! fetched. Entries are only written by the fetch that produced them and
//! expire after a fixed interval, checked on read.

use std::time::Duration;

use chrono::{DateTime, Utc};
use moka::future::Cache;

use crate::models::CacheConfig;

/// A cached record with its fetch time.
#[derive(Debug, Clone)]
pub struct CachedDetail<T> {
    pub data: T,
    pub timestamp: DateTime<Utc>,
}

/// Detail cache for one content type.
#[derive(Clone)]
pub struct DetailCache<T> {
    entries: Cache<(u64, String), CachedDetail<T>>,
    ttl: Duration,
}

impl<T: Clone + Send + Sync + 'static> DetailCache<T> {
    pub fn new(ttl: Duration, max_entries: u64) -> Self {
        let entries = Cache::builder()
            .max_capacity(max_entries)
            .time_to_live(ttl)
            .build();
        Self { entries, ttl }
    }

    pub fn from_config(config: &CacheConfig) -> Self {
        Self::new(
            Duration::from_secs(config.detail_ttl_secs),
            config.max_entries,
        )
    }

    /// Return the entry for `(id, tag)` if it is younger than the TTL.
    pub async fn get(&self, id: u64, tag: &str) -> Option<CachedDetail<T>> {
        let key = (id, tag.to_string());
        let entry = self.entries.get(&key).await?;
        if self.is_fresh(&entry) {
            Some(entry)
        } else {
            self.entries.invalidate(&key).await;
            None
        }
    }

    /// Store a freshly fetched record, stamped with the current time.
    pub async fn insert(&self, id: u64, tag: &str, data: T) {
        let entry = CachedDetail {
            data,
            timestamp: Utc::now(),
        };
        self.entries.insert((id, tag.to_string()), entry).await;
    }

    pub fn is_fresh(&self, entry: &CachedDetail<T>) -> bool {
        let age = Utc::now().signed_duration_since(entry.timestamp);
        age.to_std().map(|age| age < self.ttl).unwrap_or(true)
    }
}
