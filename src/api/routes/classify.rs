//! Classify Route
//!
//! The second reactive callback of the dashboard: turn a message into a
//! per-category bar figure. Predictions come from the external classifier
//! when one is configured; otherwise (or when the classifier fails) the
//! figure is filled with random demo labels, and the response says so.
//!
//! - POST /api/v1/classify

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::dto::{ClassificationSource, ClassifyRequest, ClassifyResponse};
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::charts;
use crate::classifier::ClassifierError;
use crate::text;

/// POST /api/v1/classify
///
/// Classify a message against the dataset's categories and return a
/// horizontal bar figure of the result.
pub async fn classify_message(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ClassifyRequest>,
) -> ApiResult<Json<ClassifyResponse>> {
    if req.message.trim().is_empty() {
        return Err(ApiError::Validation("message cannot be empty".to_string()));
    }

    let tokens = text::tokenize(&req.message);
    let category_count = state.dataset.categories().len();

    let (labels, source) = match &state.classifier {
        Some(classifier) => match predict(classifier.as_ref(), &tokens, category_count).await {
            Ok(labels) => (labels, ClassificationSource::Model),
            Err(e) => {
                tracing::warn!(error = %e, "Classifier prediction failed, using demo labels");
                (charts::demo_labels(category_count), ClassificationSource::Demo)
            }
        },
        None => (charts::demo_labels(category_count), ClassificationSource::Demo),
    };

    let category_labels = state.dataset.category_labels();
    let categories: Vec<String> = category_labels
        .iter()
        .zip(&labels)
        .filter(|(_, &flag)| flag != 0)
        .map(|(label, _)| label.clone())
        .collect();

    let figure = charts::classification_bar(&category_labels, &labels);

    tracing::debug!(source = ?source, selected = categories.len(), "Classified message");

    Ok(Json(ClassifyResponse {
        figure,
        categories,
        source,
    }))
}

/// Run a prediction and validate the label vector length
async fn predict(
    classifier: &dyn crate::classifier::Classifier,
    tokens: &[String],
    expected: usize,
) -> Result<Vec<u8>, ClassifierError> {
    let labels = classifier.predict(tokens).await?;
    if labels.len() != expected {
        return Err(ClassifierError::LabelLength {
            expected,
            got: labels.len(),
        });
    }
    Ok(labels)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::Orientation;
    use crate::classifier::Classifier;
    use crate::config::ApiConfig;
    use crate::dataset::{Dataset, MessageRecord};
    use async_trait::async_trait;

    struct FixedClassifier(Vec<u8>);

    #[async_trait]
    impl Classifier for FixedClassifier {
        async fn predict(&self, _tokens: &[String]) -> Result<Vec<u8>, ClassifierError> {
            Ok(self.0.clone())
        }

        async fn health_check(&self) -> Result<(), ClassifierError> {
            Ok(())
        }
    }

    struct FailingClassifier;

    #[async_trait]
    impl Classifier for FailingClassifier {
        async fn predict(&self, _tokens: &[String]) -> Result<Vec<u8>, ClassifierError> {
            Err(ClassifierError::Unavailable)
        }

        async fn health_check(&self) -> Result<(), ClassifierError> {
            Err(ClassifierError::Unavailable)
        }
    }

    fn dataset() -> Arc<Dataset> {
        Arc::new(Dataset::new(
            vec![
                "water".to_string(),
                "shelter".to_string(),
                "medical_help".to_string(),
            ],
            vec![MessageRecord {
                id: 1,
                message: "need water".to_string(),
                genre: "direct".to_string(),
                flags: vec![1, 0, 0],
            }],
        ))
    }

    fn request(message: &str) -> Json<ClassifyRequest> {
        Json(ClassifyRequest {
            message: message.to_string(),
        })
    }

    #[tokio::test]
    async fn test_classify_without_classifier_uses_demo() {
        let state = Arc::new(AppState::new(dataset(), ApiConfig::default()));
        let Json(resp) = classify_message(State(state), request("we need water"))
            .await
            .unwrap();

        assert_eq!(resp.source, ClassificationSource::Demo);
        assert_eq!(resp.figure.labels, vec!["Water", "Shelter", "Medical Help"]);
        assert_eq!(resp.figure.orientation, Orientation::Horizontal);
        assert_eq!(resp.figure.values.len(), 3);
    }

    #[tokio::test]
    async fn test_classify_uses_model_prediction() {
        let state = Arc::new(AppState::with_classifier(
            dataset(),
            ApiConfig::default(),
            Arc::new(FixedClassifier(vec![1, 0, 1])),
        ));
        let Json(resp) = classify_message(State(state), request("we need water"))
            .await
            .unwrap();

        assert_eq!(resp.source, ClassificationSource::Model);
        assert_eq!(resp.figure.values, vec![1, 0, 1]);
        assert_eq!(resp.categories, vec!["Water", "Medical Help"]);
    }

    #[tokio::test]
    async fn test_classifier_failure_falls_back_to_demo() {
        let state = Arc::new(AppState::with_classifier(
            dataset(),
            ApiConfig::default(),
            Arc::new(FailingClassifier),
        ));
        let Json(resp) = classify_message(State(state), request("we need water"))
            .await
            .unwrap();

        assert_eq!(resp.source, ClassificationSource::Demo);
        assert_eq!(resp.figure.values.len(), 3);
    }

    #[tokio::test]
    async fn test_label_length_mismatch_falls_back_to_demo() {
        let state = Arc::new(AppState::with_classifier(
            dataset(),
            ApiConfig::default(),
            // Wrong length: dataset has 3 categories
            Arc::new(FixedClassifier(vec![1])),
        ));
        let Json(resp) = classify_message(State(state), request("we need water"))
            .await
            .unwrap();

        assert_eq!(resp.source, ClassificationSource::Demo);
    }

    #[tokio::test]
    async fn test_empty_message_rejected() {
        let state = Arc::new(AppState::new(dataset(), ApiConfig::default()));
        let err = classify_message(State(state), request(""))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
    }
}
