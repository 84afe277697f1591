//! Practicum homework status API client

use std::sync::Arc;

use async_trait::async_trait;

use crate::fetcher::StatusFetcher;
use crate::homework::FetchResult;
use crate::io::HttpClient;
use crate::HomeworkBotError;

/// Client for the `homework_statuses` endpoint
pub struct PracticumClient {
    endpoint: String,
    authorization: String,
    http: Arc<dyn HttpClient>,
}

impl std::fmt::Debug for PracticumClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PracticumClient")
            .field("endpoint", &self.endpoint)
            .finish()
    }
}

impl PracticumClient {
    pub fn new(endpoint: &str, token: &str, http: Arc<dyn HttpClient>) -> Self {
        tracing::debug!("Created PracticumClient for {}", endpoint);

        Self {
            endpoint: endpoint.to_string(),
            authorization: format!("OAuth {}", token),
            http,
        }
    }
}

#[async_trait]
impl StatusFetcher for PracticumClient {
    async fn fetch(&self, from_date: i64) -> crate::Result<FetchResult> {
        let from_date = from_date.to_string();
        tracing::debug!("Requesting statuses from {} since {}", self.endpoint, from_date);

        let response = self
            .http
            .get(
                &self.endpoint,
                &[("from_date", from_date.as_str())],
                &[("Authorization", self.authorization.as_str())],
            )
            .await
            .map_err(|e| HomeworkBotError::Connectivity(e.to_string()))?;

        if response.status != 200 {
            return Err(HomeworkBotError::Connectivity(format!(
                "{} returned status {}",
                self.endpoint, response.status
            )));
        }

        let body: serde_json::Value = serde_json::from_str(&response.body).map_err(|e| {
            HomeworkBotError::Connectivity(format!("Failed to decode response: {}", e))
        })?;

        Ok(FetchResult::new(body))
    }
}
