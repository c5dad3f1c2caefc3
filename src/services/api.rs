// src/services/api.rs

//! Remote REST backend client.
//!
//! Path conventions: `/<resource>` lists a content type and
//! `/<resource>/detail/<id>` returns a single record.

use serde::de::DeserializeOwned;

use crate::error::{AppError, Result};
use crate::models::{ApiConfig, DetailEnvelope, ListEnvelope};
use crate::services::Resource;
use crate::utils::http::create_async_client;
use crate::utils::url::join;

/// Thin wrapper over `reqwest` bound to the backend base URL.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    client: reqwest::Client,
}

impl ApiClient {
    /// Create a client with the configured user agent and timeout.
    pub fn new(config: &ApiConfig) -> Result<Self> {
        // Reject a bad base URL up front rather than on the first request.
        url::Url::parse(&config.base_url)?;
        Ok(Self {
            base_url: config.base_url.clone(),
            client: create_async_client(config)?,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET `{base_url}/{path}` and decode the JSON body.
    ///
    /// Non-success statuses become [`AppError::Status`].
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = join(&self.base_url, path)?;
        log::debug!("GET {}", url);

        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(AppError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Fetch every record of a content type.
    pub async fn list<R: Resource>(&self) -> Result<Vec<R>> {
        let envelope: ListEnvelope<R> = self.get_json(R::PATH).await?;
        Ok(envelope.into_items())
    }

    /// Fetch one record by id.
    pub async fn detail<R: Resource>(&self, id: u64) -> Result<R> {
        let envelope: DetailEnvelope<R> =
            self.get_json(&format!("{}/detail/{}", R::PATH, id)).await?;
        Ok(envelope.into_inner())
    }
}
