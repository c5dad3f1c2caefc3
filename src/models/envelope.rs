//! Response envelopes accepted from the backend.
//!
//! Endpoints answer either with the bare payload or wrap it in `{"data": ...}`.

use serde::Deserialize;

/// A list response.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ListEnvelope<T> {
    Wrapped { data: Vec<T> },
    Bare(Vec<T>),
}

impl<T> ListEnvelope<T> {
    pub fn into_items(self) -> Vec<T> {
        match self {
            Self::Wrapped { data } | Self::Bare(data) => data,
        }
    }
}

/// A single-record response.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum DetailEnvelope<T> {
    Wrapped { data: T },
    Bare(T),
}

impl<T> DetailEnvelope<T> {
    pub fn into_inner(self) -> T {
        match self {
            Self::Wrapped { data } | Self::Bare(data) => data,
        }
    }
}
