// src/web/mod.rs

//! Server-rendered site.
//!
//! Handlers fetch from the backend through [`crate::services::Store`], map
//! records to view models and render Askama templates. Fetch failures are
//! shown inline; a missing record renders the not-found page.

pub mod handlers;
pub mod post;
pub mod response;
pub mod router;
pub mod state;
pub mod views;

pub use post::Post;
pub use router::{create_router, with_site_layers};
pub use state::AppState;
