//! # Reliefboard
//!
//! Disaster Response Dashboard - a single-page web dashboard over
//! precomputed disaster-message statistics, with a message classification
//! demo.
//!
//! ## How it works
//!
//! At startup the service loads the `model_data` feature table from SQLite
//! into memory and builds the static figures (genre donut, category bar).
//! Two reactive endpoints drive the page: one echoes the normalized tokens
//! of a message, the other renders a per-category classification figure,
//! backed by an optional external classifier with a random demo fallback.
//!
//! ## Modules
//!
//! - [`dataset`]: The in-memory message table and its statistics
//! - [`text`]: Tokenization and lemmatization
//! - [`classifier`]: The external classifier integration
//! - [`charts`]: Figure objects and builders
//! - [`api`]: HTTP server with Axum
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use reliefboard::api::{serve, AppState};
//! use reliefboard::config::Config;
//! use reliefboard::dataset::load_dataset;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load_default();
//!
//!     let dataset = Arc::new(load_dataset(std::path::Path::new(
//!         &config.dataset.database_path,
//!     ))?);
//!
//!     let state = AppState::new(dataset, config.api.clone());
//!     serve(state, &config.api).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod charts;
pub mod classifier;
pub mod config;
pub mod dataset;
pub mod text;

// Re-export top-level types for convenience
pub use dataset::{
    display_label, load_dataset, CategoryCount, Dataset, DatasetError, DatasetResult, GenreCount,
    MessageRecord,
};

pub use text::{join_tokens, lemmatize, tokenize};

pub use classifier::{Classifier, ClassifierClient, ClassifierConfig, ClassifierError};

pub use charts::{BarFigure, Orientation, PieFigure};

pub use api::{build_router, serve, ApiError, AppState, StaticFigures};

pub use config::{
    ApiConfig, ClassifierSettings, Config, ConfigError, DatasetConfig, LoggingConfig,
};
