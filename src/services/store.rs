// src/services/store.rs

//! Generic remote resource state.
//!
//! One [`RemoteResource`] shape (data, loading flag, error) serves every
//! content type; [`Store`] binds it to an injected [`ApiClient`].

use std::future::Future;
use std::marker::PhantomData;

use serde::de::DeserializeOwned;

use crate::error::{AppError, Result};
use crate::routing::normalize_tag;
use crate::services::{ApiClient, DetailCache};

/// A backend content type.
pub trait Resource: DeserializeOwned + Clone + Send + Sync + 'static {
    /// Backend path segment, also the site listing segment
    const PATH: &'static str;

    /// Human-readable name used in headings and messages
    const LABEL: &'static str;
}

/// Why a fetch produced no data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceError {
    /// The backend has no such record
    NotFound,
    /// Any other failure; holds the message shown to visitors
    Failed(String),
}

impl ResourceError {
    fn from_error(label: &str, error: &AppError) -> Self {
        if error.is_not_found() {
            Self::NotFound
        } else {
            Self::Failed(format!(
                "Gagal memuat {}. Silakan coba beberapa saat lagi.",
                label.to_lowercase()
            ))
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::NotFound => "Data tidak ditemukan.",
            Self::Failed(message) => message,
        }
    }
}

/// State of one fetched resource.
#[derive(Debug, Clone)]
pub struct RemoteResource<T> {
    pub label: &'static str,
    pub data: Option<T>,
    pub loading: bool,
    pub error: Option<ResourceError>,
}

impl<T> RemoteResource<T> {
    /// Nothing fetched yet.
    pub fn idle(label: &'static str) -> Self {
        Self {
            label,
            data: None,
            loading: false,
            error: None,
        }
    }

    /// Already-known data, e.g. from the detail cache.
    pub fn ready(label: &'static str, data: T) -> Self {
        Self {
            data: Some(data),
            ..Self::idle(label)
        }
    }

    /// Mark a fetch as started, clearing a previous error.
    pub fn begin(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Record the outcome of a fetch. Failures keep the previous data.
    pub fn settle(&mut self, result: Result<T>) {
        self.loading = false;
        match result {
            Ok(data) => {
                self.data = Some(data);
                self.error = None;
            }
            Err(error) => {
                if error.is_not_found() {
                    log::info!("{} not found: {}", self.label, error);
                } else {
                    log::warn!("Failed to fetch {}: {}", self.label, error);
                }
                self.error = Some(ResourceError::from_error(self.label, &error));
            }
        }
    }

    /// Run a fetch through `begin`/`settle`. No retries.
    pub async fn fetch<F>(&mut self, future: F)
    where
        F: Future<Output = Result<T>>,
    {
        self.begin();
        let result = future.await;
        self.settle(result);
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self.error, Some(ResourceError::NotFound))
    }

    pub fn error_message(&self) -> Option<String> {
        self.error.as_ref().map(|e| e.message().to_string())
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> RemoteResource<U> {
        RemoteResource {
            label: self.label,
            data: self.data.map(f),
            loading: self.loading,
            error: self.error,
        }
    }
}

/// Typed access to one content type.
pub struct Store<'a, R> {
    api: &'a ApiClient,
    _resource: PhantomData<R>,
}

impl<'a, R: Resource> Store<'a, R> {
    pub fn new(api: &'a ApiClient) -> Self {
        Self {
            api,
            _resource: PhantomData,
        }
    }

    /// Fetch the whole collection.
    pub async fn list(&self) -> RemoteResource<Vec<R>> {
        let mut resource = RemoteResource::idle(R::LABEL);
        resource.fetch(self.api.list::<R>()).await;
        resource
    }

    /// Fetch one record.
    pub async fn detail(&self, id: u64) -> RemoteResource<R> {
        let mut resource = RemoteResource::idle(R::LABEL);
        resource.fetch(self.api.detail::<R>(id)).await;
        resource
    }

    /// Fetch one record, reusing a fresh cache entry for `(id, tag)`.
    pub async fn detail_cached(&self, cache: &DetailCache<R>, id: u64, tag: &str) -> RemoteResource<R> {
        let tag = normalize_tag(tag);
        if let Some(entry) = cache.get(id, &tag).await {
            log::debug!("{} {} served from cache", R::LABEL, id);
            return RemoteResource::ready(R::LABEL, entry.data);
        }

        let resource = self.detail(id).await;
        if let Some(data) = &resource.data {
            cache.insert(id, &tag, data.clone()).await;
        }
        resource
    }
}
