//! Company structure loader.
//!
//! DESIGN
//! ======
//! The structure is fetched exactly once per run. A failed fetch is logged
//! and leaves the grid empty; nothing retries. The payload is only required
//! to be a JSON array; the shape of each entry is not checked.

#[cfg(test)]
#[path = "structure_test.rs"]
mod structure_test;

use std::time::Duration;

use serde_json::Value;

const CONNECT_TIMEOUT_SECS: u64 = 5;

#[derive(Debug, thiserror::Error)]
pub enum StructureError {
    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),

    /// The request never produced a response.
    #[error("request failed: {0}")]
    Request(String),

    /// The endpoint answered with a non-success status.
    #[error("unexpected status {status}")]
    Status { status: u16 },

    /// The body was not a JSON array.
    #[error("response parse failed: {0}")]
    Parse(String),
}

/// Outcome of the one-shot structure fetch. The scene is built only once
/// [`StructureClient::load`] has settled into one of these.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    Loaded(Vec<Value>),
    Failed(String),
}

impl LoadState {
    /// Entries to lay out; empty unless the fetch succeeded.
    #[must_use]
    pub fn entries(&self) -> &[Value] {
        match self {
            Self::Loaded(entries) => entries,
            Self::Failed(_) => &[],
        }
    }
}

pub struct StructureClient {
    http: reqwest::Client,
    endpoint: String,
}

impl StructureClient {
    /// # Errors
    ///
    /// Returns [`StructureError::HttpClientBuild`] if the TLS backend cannot
    /// be initialised.
    pub fn new(endpoint: &str, timeout: Duration) -> Result<Self, StructureError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS).min(timeout))
            .build()
            .map_err(|e| StructureError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, endpoint: endpoint.to_string() })
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetch the structure entries.
    ///
    /// # Errors
    ///
    /// Returns [`StructureError`] on transport failure, a non-2xx status, or
    /// a body that is not a JSON array.
    pub async fn fetch(&self) -> Result<Vec<Value>, StructureError> {
        let response = self
            .http
            .get(&self.endpoint)
            .send()
            .await
            .map_err(|e| StructureError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(StructureError::Status { status: status.as_u16() });
        }

        let text = response
            .text()
            .await
            .map_err(|e| StructureError::Request(e.to_string()))?;
        serde_json::from_str::<Vec<Value>>(&text).map_err(|e| StructureError::Parse(e.to_string()))
    }

    /// Fetch once and settle into a terminal [`LoadState`], logging the outcome.
    pub async fn load(&self) -> LoadState {
        tracing::info!(endpoint = %self.endpoint, "fetching company structure");
        match self.fetch().await {
            Ok(entries) => {
                tracing::info!(count = entries.len(), "company structure loaded");
                LoadState::Loaded(entries)
            }
            Err(e) => {
                tracing::error!(endpoint = %self.endpoint, error = %e, "company structure fetch failed");
                LoadState::Failed(e.to_string())
            }
        }
    }
}
