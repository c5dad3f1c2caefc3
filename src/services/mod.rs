//! Service layer for the site.
//!
//! This module contains the data access used by the pages:
//! - Backend access (`ApiClient`)
//! - Generic per-resource state (`Store`, `RemoteResource`)
//! - Detail record cache (`DetailCache`)

mod api;
mod cache;
mod store;

pub use api::ApiClient;
pub use cache::{CachedDetail, DetailCache};
pub use store::{RemoteResource, Resource, ResourceError, Store};
