// src/lib.rs

//! Faculty website library
//!
//! Server-rendered pages over a remote REST backend, legacy URL migration,
//! and a static snapshot export for crawlers.

pub mod error;
pub mod export;
pub mod listing;
pub mod models;
pub mod pipeline;
pub mod routing;
pub mod services;
pub mod share;
pub mod storage;
pub mod utils;
pub mod web;
