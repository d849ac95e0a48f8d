//! Dataset error types
//!
//! Defines all errors that can occur while loading the feature table.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading or reading the dataset
#[derive(Error, Debug)]
pub enum DatasetError {
    /// Database file does not exist
    #[error("Database file not found: {0:?}")]
    FileNotFound(PathBuf),

    /// Underlying SQLite error
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// The feature table is missing from the database
    #[error("Table not found: {0}")]
    TableNotFound(String),

    /// A fixed column (id, message, genre) is missing
    #[error("Missing column: {0}")]
    MissingColumn(String),

    /// The table has no category columns beyond the fixed ones
    #[error("No category columns in table {0}")]
    NoCategories(String),
}

/// Result type alias for dataset operations
pub type DatasetResult<T> = Result<T, DatasetError>;
