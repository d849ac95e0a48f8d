//! HTTP client for the classifier sidecar
//!
//! Talks to the model server's small REST surface:
//! - `GET {base_url}/health`
//! - `POST {base_url}/predict` with `{"tokens": [...]}`, returning
//!   `{"labels": [0|1, ...]}`

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::{Classifier, ClassifierError};

/// Configuration for the classifier client
#[derive(Debug, Clone)]
pub struct ClassifierConfig {
    /// Base URL of the model server (e.g., "http://localhost:8090")
    pub base_url: String,
    /// Request timeout in milliseconds
    pub request_timeout_ms: u64,
    /// Maximum retry attempts for a prediction
    pub max_retries: u32,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8090".to_string(),
            request_timeout_ms: 5000,
            max_retries: 3,
        }
    }
}

/// REST client for the external classifier
pub struct ClassifierClient {
    client: Client,
    config: ClassifierConfig,
}

#[derive(Serialize)]
struct PredictRequest<'a> {
    tokens: &'a [String],
}

#[derive(Deserialize)]
struct PredictResponse {
    labels: Vec<u8>,
}

impl ClassifierClient {
    /// Create a new client with the given configuration
    pub fn new(config: ClassifierConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_millis(config.request_timeout_ms))
            .build()
            .expect("Failed to create HTTP client");

        Self { client, config }
    }

    /// Get the current configuration
    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    fn map_send_error(e: reqwest::Error) -> ClassifierError {
        if e.is_timeout() {
            ClassifierError::Timeout
        } else if e.is_connect() {
            ClassifierError::Unavailable
        } else {
            ClassifierError::Request(e)
        }
    }

    async fn predict_once(&self, tokens: &[String]) -> Result<Vec<u8>, ClassifierError> {
        let url = format!("{}/predict", self.config.base_url);
        let body = PredictRequest { tokens };

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(Self::map_send_error)?;

        if response.status().is_success() {
            let result: PredictResponse =
                response.json().await.map_err(ClassifierError::Request)?;
            Ok(result.labels)
        } else {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            Err(ClassifierError::Api {
                status: status.as_u16(),
                message: text,
            })
        }
    }
}

#[async_trait]
impl Classifier for ClassifierClient {
    async fn predict(&self, tokens: &[String]) -> Result<Vec<u8>, ClassifierError> {
        let mut last_error = ClassifierError::Unavailable;

        for attempt in 0..self.config.max_retries.max(1) {
            if attempt > 0 {
                // Exponential backoff: 1s, 4s, 9s...
                let delay = std::time::Duration::from_secs((attempt as u64).pow(2));
                tokio::time::sleep(delay).await;
            }

            match self.predict_once(tokens).await {
                Ok(labels) => return Ok(labels),
                // A non-success status is not transient; don't retry it
                Err(e @ ClassifierError::Api { .. }) => return Err(e),
                Err(e) => {
                    tracing::debug!(attempt, error = %e, "Classifier predict attempt failed");
                    last_error = e;
                }
            }
        }

        Err(last_error)
    }

    async fn health_check(&self) -> Result<(), ClassifierError> {
        let url = format!("{}/health", self.config.base_url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(Self::map_send_error)?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(ClassifierError::Unavailable)
        }
    }
}
