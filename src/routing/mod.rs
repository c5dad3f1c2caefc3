//! Request-routing layer.
//!
//! Runs before page handlers: migrates legacy URL shapes to the canonical
//! detail path `/<listing>/detail/<id>/<tag>` and decorates every other
//! response with fixed security headers.
//!
//! - [`tag`]: tag normalization and strict percent-decoding
//! - [`rules`]: the pure redirect decision
//! - [`middleware`]: the axum layer applying the decision

pub mod middleware;
pub mod rules;
pub mod tag;

pub use middleware::{apply_security_headers, legacy_redirect};
pub use rules::{LegacyRoutes, RequestTarget, RouteDecision};
pub use tag::{decode_tag, normalize_tag};
