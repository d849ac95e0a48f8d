//! SQLite loader for the feature table
//!
//! Reads the whole `model_data` table into memory once at startup. The
//! database is opened read-only; nothing in the service writes back.
//!
//! The table layout is `id`, `message`, `genre` followed by an arbitrary
//! number of 0/1 category columns. Category names are discovered from the
//! column metadata rather than hardcoded, so the reference data's 36
//! categories is a property of the data, not of this code.

use rusqlite::{Connection, OpenFlags};
use std::path::Path;

use super::error::{DatasetError, DatasetResult};
use super::types::{Dataset, MessageRecord};

/// Name of the feature table produced by the upstream ETL
pub const TABLE_NAME: &str = "model_data";

const FIXED_COLUMNS: [&str; 3] = ["id", "message", "genre"];

/// Load the dataset from a SQLite database file
pub fn load_dataset(path: &Path) -> DatasetResult<Dataset> {
    if !path.exists() {
        return Err(DatasetError::FileNotFound(path.to_path_buf()));
    }

    let conn = Connection::open_with_flags(path, OpenFlags::SQLITE_OPEN_READ_ONLY)?;
    let dataset = load_from_connection(&conn)?;

    tracing::info!(
        rows = dataset.len(),
        categories = dataset.categories().len(),
        "Dataset loaded from {:?}",
        path
    );

    Ok(dataset)
}

fn load_from_connection(conn: &Connection) -> DatasetResult<Dataset> {
    let mut stmt = conn
        .prepare(&format!("SELECT * FROM {}", TABLE_NAME))
        .map_err(|e| match e {
            rusqlite::Error::SqliteFailure(_, Some(ref msg)) if msg.contains("no such table") => {
                DatasetError::TableNotFound(TABLE_NAME.to_string())
            }
            other => DatasetError::Sqlite(other),
        })?;

    let columns: Vec<String> = stmt.column_names().iter().map(|c| c.to_string()).collect();

    let mut fixed_indices = [0usize; 3];
    for (slot, name) in fixed_indices.iter_mut().zip(FIXED_COLUMNS) {
        *slot = columns
            .iter()
            .position(|c| c.eq_ignore_ascii_case(name))
            .ok_or_else(|| DatasetError::MissingColumn(name.to_string()))?;
    }
    let [id_idx, message_idx, genre_idx] = fixed_indices;

    // Every non-fixed column is a category flag, in table order
    let category_indices: Vec<usize> = (0..columns.len())
        .filter(|i| !fixed_indices.contains(i))
        .collect();

    if category_indices.is_empty() {
        return Err(DatasetError::NoCategories(TABLE_NAME.to_string()));
    }

    let categories: Vec<String> = category_indices
        .iter()
        .map(|&i| columns[i].clone())
        .collect();

    let rows = stmt.query_map([], |row| {
        let id: i64 = row.get(id_idx)?;
        let message: Option<String> = row.get(message_idx)?;
        let genre: Option<String> = row.get(genre_idx)?;

        // NULL or non-integer flags count as unlabeled
        let flags: Vec<u8> = category_indices
            .iter()
            .map(|&i| match row.get::<_, i64>(i) {
                Ok(v) if v != 0 => 1,
                _ => 0,
            })
            .collect();

        Ok(MessageRecord {
            id,
            message: message.unwrap_or_default(),
            genre: genre.unwrap_or_default(),
            flags,
        })
    })?;

    let mut records = Vec::new();
    for row in rows {
        records.push(row?);
    }

    Ok(Dataset::new(categories, records))
}
