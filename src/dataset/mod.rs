//! Disaster message dataset
//!
//! In-memory representation of the precomputed feature table that backs the
//! dashboard. The table is loaded once from SQLite at startup and never
//! mutated afterwards; every chart and statistic is derived from it.

mod error;
mod loader;
mod stats;
mod types;

pub use error::{DatasetError, DatasetResult};
pub use loader::load_dataset;
pub use stats::{CategoryCount, GenreCount};
pub use types::{display_label, Dataset, MessageRecord};
