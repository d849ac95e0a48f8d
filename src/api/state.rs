//! Application State
//!
//! Shared state accessible by all API handlers.
//! Wrapped in Arc for thread-safe sharing across async tasks.

use crate::charts::{self, BarFigure, PieFigure};
use crate::classifier::Classifier;
use crate::config::ApiConfig;
use crate::dataset::Dataset;
use std::sync::Arc;
use std::time::Instant;

/// Figures built once from the dataset at startup
#[derive(Debug, Clone)]
pub struct StaticFigures {
    /// Genre distribution donut
    pub genre_pie: PieFigure,
    /// Category distribution bar for the default genre
    pub category_bar: BarFigure,
}

impl StaticFigures {
    /// Build the startup figures from the loaded dataset
    pub fn build(dataset: &Dataset, default_genre: &str) -> Self {
        Self {
            genre_pie: charts::genre_pie(dataset),
            category_bar: charts::category_bar(dataset, Some(default_genre)),
        }
    }
}

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// The loaded message table (read-only)
    pub dataset: Arc<Dataset>,
    /// Prebuilt startup figures
    pub figures: Arc<StaticFigures>,
    /// API configuration
    pub config: Arc<ApiConfig>,
    /// External classifier, when configured
    pub classifier: Option<Arc<dyn Classifier>>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    /// Create a new AppState without a classifier
    pub fn new(dataset: Arc<Dataset>, config: ApiConfig) -> Self {
        let figures = StaticFigures::build(&dataset, &config.default_genre);
        Self {
            dataset,
            figures: Arc::new(figures),
            config: Arc::new(config),
            classifier: None,
            start_time: Instant::now(),
        }
    }

    /// Create AppState with an external classifier
    pub fn with_classifier(
        dataset: Arc<Dataset>,
        config: ApiConfig,
        classifier: Arc<dyn Classifier>,
    ) -> Self {
        let mut state = Self::new(dataset, config);
        state.classifier = Some(classifier);
        state
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }

    /// Check if a classifier is configured
    pub fn has_classifier(&self) -> bool {
        self.classifier.is_some()
    }
}
