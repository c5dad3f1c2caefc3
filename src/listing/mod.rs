//! Listing page logic: filter state and pagination.
//!
//! Collections are fetched whole from the backend, then filtered and paged
//! here before rendering.

mod filter;
mod pagination;

pub use filter::{FilterState, Filterable, SelectOption};
pub use pagination::{PageItem, Paginator};
