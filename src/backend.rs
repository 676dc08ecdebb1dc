use reqwest::{Client, StatusCode};
use thiserror::Error;
use tokio::time::{timeout, Duration};

use crate::api::{QueryRequest, RecipeResponse};

pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:8000/api/query";

pub struct BackendConfig {
    url: String,
    timeout_ms: Option<u64>,
}

impl BackendConfig {
    pub fn new(url: impl Into<String>, timeout_ms: Option<u64>) -> Self {
        Self {
            url: url.into(),
            timeout_ms,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

/// The single failure kind of an outbound recipe call. Variants only record
/// the cause; callers treat them all alike.
#[derive(Debug, Error)]
pub enum CallFailed {
    #[error("failed to reach recipe backend: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("recipe backend did not answer within {0} ms")]
    Timeout(u64),
    #[error("recipe backend answered with status {0}")]
    Status(StatusCode),
    #[error("recipe backend returned an unreadable body: {0}")]
    Decode(#[source] reqwest::Error),
}

pub struct RecipeBackend {
    client: Client,
    config: BackendConfig,
}

impl RecipeBackend {
    pub fn new(config: BackendConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    /// POSTs `{"query": ...}` and decodes a recipe from any 2xx answer.
    /// A configured timeout bounds the whole exchange, body included.
    pub async fn fetch_recipe(&self, query: &str) -> Result<RecipeResponse, CallFailed> {
        match self.config.timeout_ms {
            Some(ms) => timeout(Duration::from_millis(ms), self.exchange(query))
                .await
                .map_err(|_| CallFailed::Timeout(ms))?,
            None => self.exchange(query).await,
        }
    }

    async fn exchange(&self, query: &str) -> Result<RecipeResponse, CallFailed> {
        let body = QueryRequest {
            query: query.to_string(),
        };
        let response = self
            .client
            .post(&self.config.url)
            .json(&body)
            .send()
            .await
            .map_err(CallFailed::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(CallFailed::Status(status));
        }

        response
            .json::<RecipeResponse>()
            .await
            .map_err(CallFailed::Decode)
    }
}
