//! External message classifier
//!
//! The trained classifier is not part of this service; it lives behind an
//! HTTP sidecar that exposes `predict(tokens) -> label_vector`. The service
//! runs fine without it, falling back to the demo behavior on the classify
//! endpoint.

mod client;

pub use client::{ClassifierClient, ClassifierConfig};

use async_trait::async_trait;
use thiserror::Error;

/// Seam for the external classifier
///
/// The returned label vector must have one 0/1 entry per dataset category,
/// in table order. Callers validate the length against the loaded dataset.
#[async_trait]
pub trait Classifier: Send + Sync {
    /// Predict a binary label vector for the given tokens
    async fn predict(&self, tokens: &[String]) -> Result<Vec<u8>, ClassifierError>;

    /// Check if the classifier is reachable
    async fn health_check(&self) -> Result<(), ClassifierError>;
}

/// Errors from the classifier integration
#[derive(Debug, Error)]
pub enum ClassifierError {
    /// Classifier service not reachable
    #[error("Classifier unavailable")]
    Unavailable,

    /// Request exceeded the configured timeout
    #[error("Classifier request timed out")]
    Timeout,

    /// Underlying HTTP error
    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),

    /// Classifier returned a non-success status
    #[error("Classifier API error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// Label vector does not match the dataset's category count
    #[error("Label vector length mismatch: expected {expected}, got {got}")]
    LabelLength { expected: usize, got: usize },
}
