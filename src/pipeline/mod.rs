//! Pipeline entry points for the CLI commands.
//!
//! - `run_server`: Serve the dynamic site
//! - `run_export`: Write static article snapshots
//! - `run_static_server`: Serve an exported tree

pub mod export;
pub mod serve;
pub mod serve_static;

pub use export::run_export;
pub use serve::run_server;
pub use serve_static::{create_static_router, run_static_server};
