//! Data Transfer Objects
//!
//! Request and response types for the API endpoints.
//! These types are serialized/deserialized to/from JSON.
//! Chart figures are defined in [`crate::charts`] and reused here directly.

use serde::{Deserialize, Serialize};

use crate::charts::BarFigure;

// ============================================
// OVERVIEW DTOs
// ============================================

/// Dataset summary shown in the page header
#[derive(Debug, Serialize)]
pub struct OverviewResponse {
    /// Number of messages in the dataset
    pub samples: usize,
    /// Distinct genres, first-appearance order
    pub genres: Vec<String>,
    /// Number of classification categories
    pub category_count: usize,
}

// ============================================
// CHART DTOs
// ============================================

/// Query parameters for the category chart
#[derive(Debug, Deserialize)]
pub struct CategoryChartParams {
    /// Genre to filter on; defaults to the configured startup genre
    #[serde(default)]
    pub genre: Option<String>,
}

// ============================================
// TOKENIZE DTOs
// ============================================

/// Tokenize request
#[derive(Debug, Deserialize)]
pub struct TokenizeRequest {
    /// Raw message text
    pub message: String,
}

/// Tokenize response
#[derive(Debug, Serialize)]
pub struct TokenizeResponse {
    /// Normalized tokens
    pub tokens: Vec<String>,
    /// Tokens joined with ", " for display
    pub echo: String,
}

// ============================================
// CLASSIFY DTOs
// ============================================

/// Classify request
#[derive(Debug, Deserialize)]
pub struct ClassifyRequest {
    /// Raw message text
    pub message: String,
}

/// Where a classification result came from
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ClassificationSource {
    /// The external classifier's prediction
    Model,
    /// Random demo labels (classifier absent or failed)
    Demo,
}

/// Classify response
#[derive(Debug, Serialize)]
pub struct ClassifyResponse {
    /// Horizontal bar figure over all categories
    pub figure: BarFigure,
    /// Display labels of the selected categories
    pub categories: Vec<String>,
    /// Whether the labels came from the model or the demo fallback
    pub source: ClassificationSource,
}

// ============================================
// HEALTH DTOs
// ============================================

/// Full health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall status: healthy, degraded
    pub status: String,
    /// Dataset status
    pub dataset: String,
    /// Classifier status: ok, unavailable, disabled
    pub classifier: String,
    /// Server uptime in seconds
    pub uptime_seconds: u64,
    /// Application version
    pub version: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification_source_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&ClassificationSource::Model).unwrap(),
            "\"model\""
        );
        assert_eq!(
            serde_json::to_string(&ClassificationSource::Demo).unwrap(),
            "\"demo\""
        );
    }
}
