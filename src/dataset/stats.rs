//! Aggregations over the loaded dataset
//!
//! Everything the static charts need: genre counts and per-category totals.
//! All of these are single passes over the in-memory table; nothing here
//! touches SQLite.

use serde::Serialize;

use super::types::{display_label, Dataset};

/// Message count for one genre
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct GenreCount {
    pub genre: String,
    pub count: usize,
}

/// Labeled message count for one category
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CategoryCount {
    /// Raw column name ("aid_related")
    pub name: String,
    /// Display label ("Aid Related")
    pub label: String,
    /// Number of messages flagged with this category
    pub count: usize,
}

impl Dataset {
    /// Message counts per genre, descending
    ///
    /// Ties keep first-appearance order, matching how the source table was
    /// summarized upstream.
    pub fn genre_breakdown(&self) -> Vec<GenreCount> {
        let mut counts: Vec<GenreCount> = Vec::new();
        for record in self.records() {
            match counts.iter_mut().find(|c| c.genre == record.genre) {
                Some(entry) => entry.count += 1,
                None => counts.push(GenreCount {
                    genre: record.genre.clone(),
                    count: 1,
                }),
            }
        }
        counts.sort_by(|a, b| b.count.cmp(&a.count));
        counts
    }

    /// Per-category message totals, descending
    ///
    /// When `genre` is given, only messages of that genre are counted. An
    /// unknown genre yields all-zero counts rather than an error.
    pub fn category_counts(&self, genre: Option<&str>) -> Vec<CategoryCount> {
        let mut totals = vec![0usize; self.categories().len()];

        for record in self.records() {
            if let Some(g) = genre {
                if record.genre != g {
                    continue;
                }
            }
            for (i, flag) in record.flags.iter().enumerate() {
                if *flag != 0 {
                    totals[i] += 1;
                }
            }
        }

        let mut counts: Vec<CategoryCount> = self
            .categories()
            .iter()
            .zip(totals)
            .map(|(name, count)| CategoryCount {
                name: name.clone(),
                label: display_label(name),
                count,
            })
            .collect();
        counts.sort_by(|a, b| b.count.cmp(&a.count));
        counts
    }
}
