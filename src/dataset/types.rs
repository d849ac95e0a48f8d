//! Core dataset types
//!
//! - `MessageRecord`: one historical disaster message with its genre and
//!   binary category flags
//! - `Dataset`: the full in-memory table plus the ordered category list

use serde::Serialize;

/// A single historical disaster message
///
/// `flags` is aligned with [`Dataset::categories`]: `flags[i] == 1` means the
/// message was labeled with category `i`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MessageRecord {
    /// Row id from the feature table
    pub id: i64,
    /// Raw message text
    pub message: String,
    /// Source genre ("direct", "news", "social")
    pub genre: String,
    /// Binary category flags, one per dataset category
    pub flags: Vec<u8>,
}

/// The loaded feature table
///
/// Immutable after load; shared read-only across request handlers.
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Vec<MessageRecord>,
    categories: Vec<String>,
}

impl Dataset {
    /// Create a dataset from already-loaded rows
    ///
    /// Records whose flag vector does not match the category count are
    /// rejected by the loader before this point.
    pub fn new(categories: Vec<String>, records: Vec<MessageRecord>) -> Self {
        debug_assert!(records.iter().all(|r| r.flags.len() == categories.len()));
        Self {
            records,
            categories,
        }
    }

    /// Number of messages in the dataset
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset contains no messages
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Category column names, in table order
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Human-readable category labels, in table order
    pub fn category_labels(&self) -> Vec<String> {
        self.categories.iter().map(|c| display_label(c)).collect()
    }

    /// All loaded records
    pub fn records(&self) -> &[MessageRecord] {
        &self.records
    }

    /// Distinct genres, in first-appearance order
    pub fn genres(&self) -> Vec<String> {
        let mut genres: Vec<String> = Vec::new();
        for record in &self.records {
            if !genres.iter().any(|g| g == &record.genre) {
                genres.push(record.genre.clone());
            }
        }
        genres
    }
}

/// Turn a category column name into a display label
///
/// Underscores become spaces and each word is title-cased, so
/// `search_and_rescue` renders as `Search And Rescue`.
pub fn display_label(column_name: &str) -> String {
    column_name
        .split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: i64, genre: &str, flags: &[u8]) -> MessageRecord {
        MessageRecord {
            id,
            message: format!("message {}", id),
            genre: genre.to_string(),
            flags: flags.to_vec(),
        }
    }

    #[test]
    fn test_display_label() {
        assert_eq!(display_label("search_and_rescue"), "Search And Rescue");
        assert_eq!(display_label("shelter"), "Shelter");
        assert_eq!(display_label("aid_related"), "Aid Related");
        assert_eq!(display_label(""), "");
    }

    #[test]
    fn test_genres_first_appearance_order() {
        let ds = Dataset::new(
            vec!["water".to_string()],
            vec![
                record(1, "direct", &[1]),
                record(2, "news", &[0]),
                record(3, "direct", &[1]),
                record(4, "social", &[0]),
            ],
        );
        assert_eq!(ds.genres(), vec!["direct", "news", "social"]);
    }

    #[test]
    fn test_empty_dataset() {
        let ds = Dataset::new(vec!["water".to_string()], vec![]);
        assert!(ds.is_empty());
        assert_eq!(ds.len(), 0);
        assert!(ds.genres().is_empty());
    }

    #[test]
    fn test_category_labels() {
        let ds = Dataset::new(
            vec!["aid_related".to_string(), "shelter".to_string()],
            vec![],
        );
        assert_eq!(ds.category_labels(), vec!["Aid Related", "Shelter"]);
    }
}
