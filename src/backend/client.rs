//! NexusLink read-API client implementation.
//!
//! Fetches the candidate and idea collections from the thin HTTP backend.

use crate::backend::models::{
    ApiCandidateFields, ApiIdeaFields, CandidateRecord, IdeaRecord, candidates_from_mapping,
    ideas_from_mapping,
};
use crate::config::Config;
use anyhow::{Context, Result};
use reqwest::Client;
use std::collections::HashMap;
use std::time::Duration;

/// Failure of a backend fetch.
///
/// The message is shown verbatim in the view; there is no retry and no
/// distinction between transient and permanent failure.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The request could not be sent or the response body not read/decoded
    #[error("Could not reach backend at {url}: {source}")]
    Transport {
        /// Requested URL
        url: String,
        /// Underlying transport error
        #[source]
        source: reqwest::Error,
    },
    /// The backend answered with a non-success status
    #[error("Backend error ({status}): {body}")]
    Backend {
        /// HTTP status code
        status: reqwest::StatusCode,
        /// Response body text
        body: String,
    },
}

/// HTTP client for the NexusLink read-aggregation API.
#[derive(Debug, Clone)]
pub struct BackendClient {
    /// HTTP client for API requests
    client: Client,
    /// Base URL of the backend, without trailing slash
    base_url: String,
}

impl BackendClient {
    /// Create a new backend client from configuration.
    ///
    /// # Arguments
    /// * `config` - Application configuration
    ///
    /// # Returns
    /// * `Result<BackendClient>` - New client or error
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: config.backend_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetch the full candidate collection.
    ///
    /// # Returns
    /// * `Result<Vec<CandidateRecord>, FetchError>` - Master list, newest
    ///   submission first, or the failure to surface to the user
    ///
    /// # Details
    /// One request per page visit; the caller decides what a failure means
    /// (here: a terminal error state for the candidates view).
    pub async fn fetch_candidates(&self) -> Result<Vec<CandidateRecord>, FetchError> {
        let mapping: HashMap<String, ApiCandidateFields> = self.fetch_mapping("students").await?;
        Ok(candidates_from_mapping(mapping))
    }

    /// Fetch the full idea collection, newest submission first.
    pub async fn fetch_ideas(&self) -> Result<Vec<IdeaRecord>, FetchError> {
        let mapping: HashMap<String, ApiIdeaFields> = self.fetch_mapping("ideas").await?;
        Ok(ideas_from_mapping(mapping))
    }

    /// GET a collection resource and decode its id-to-fields mapping.
    async fn fetch_mapping<T: serde::de::DeserializeOwned>(
        &self,
        resource: &str,
    ) -> Result<HashMap<String, T>, FetchError> {
        let url = format!("{}/{}", self.base_url, resource);

        let response =
            self.client
                .get(&url)
                .send()
                .await
                .map_err(|source| FetchError::Transport {
                    url: url.clone(),
                    source,
                })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::Backend { status, body });
        }

        response
            .json()
            .await
            .map_err(|source| FetchError::Transport { url, source })
    }
}
