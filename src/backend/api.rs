//! HTTP client for the search backend API

use std::time::Duration;

use reqwest::{Client, StatusCode};
use thiserror::Error;

use super::types::{Candidate, FeedbackRequest, FeedbackType, HealthResponse, SearchRequest, SearchResponse};
use crate::config::BackendSettings;

/// Errors surfaced by backend calls
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("backend returned {0}")]
    Status(StatusCode),
}

/// Client for the candidate search service
#[derive(Debug, Clone)]
pub struct BackendClient {
    client: Client,
    base_url: String,
}

impl BackendClient {
    pub fn new(settings: &BackendSettings) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: format!("{}/api/v1", settings.base_url.trim_end_matches('/')),
        }
    }

    /// Run a candidate search.
    ///
    /// A 404 means the backend found nothing for the query; the UI treats
    /// that as an empty result set, not a failure.
    pub async fn search(&self, request: &SearchRequest) -> Result<Vec<Candidate>, BackendError> {
        let url = format!("{}/search", self.base_url);
        tracing::info!(query = %request.query, "Searching candidates");

        let response = self.client.post(&url).json(request).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            tracing::info!("Search returned no candidates");
            return Ok(Vec::new());
        }
        if !response.status().is_success() {
            return Err(BackendError::Status(response.status()));
        }

        let body: SearchResponse = response.json().await?;
        tracing::info!(count = body.results.len(), "Search complete");
        Ok(body.results)
    }

    /// Send per-candidate feedback. The acknowledgement body is opaque;
    /// only the status matters.
    pub async fn send_feedback(
        &self,
        candidate_id: &str,
        feedback_type: FeedbackType,
        reason: Option<String>,
    ) -> Result<(), BackendError> {
        let url = format!("{}/feedback", self.base_url);
        let request = FeedbackRequest {
            candidate_id: candidate_id.to_string(),
            feedback_type,
            reason,
        };

        let response = self.client.post(&url).json(&request).send().await?;

        if !response.status().is_success() {
            return Err(BackendError::Status(response.status()));
        }
        Ok(())
    }

    /// Check backend health
    pub async fn health_check(&self) -> Result<HealthResponse, BackendError> {
        let url = format!("{}/health", self.base_url);
        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(BackendError::Status(response.status()));
        }
        Ok(response.json().await?)
    }
}
