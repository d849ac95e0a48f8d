//! Figure builders
//!
//! Translate dataset statistics into the figure DTOs the page renders.

use rand::Rng;

use crate::dataset::Dataset;

use super::palette::{random_set2, NIGHT_COLORS};
use super::{BarFigure, Orientation, PieFigure};

/// Donut figure of message counts per genre
pub fn genre_pie(dataset: &Dataset) -> PieFigure {
    let breakdown = dataset.genre_breakdown();

    let labels = breakdown.iter().map(|g| g.genre.clone()).collect();
    let values = breakdown.iter().map(|g| g.count).collect();
    let colors = breakdown
        .iter()
        .enumerate()
        .map(|(i, _)| NIGHT_COLORS[i % NIGHT_COLORS.len()].to_string())
        .collect();

    PieFigure {
        labels,
        values,
        colors,
        hole: 0.25,
    }
}

/// Bar figure of per-category message counts within a genre
///
/// Bars are sorted by count descending with title-cased labels. All bars use
/// the first night color, matching the static dashboard styling.
pub fn category_bar(dataset: &Dataset, genre: Option<&str>) -> BarFigure {
    let counts = dataset.category_counts(genre);

    let labels = counts.iter().map(|c| c.label.clone()).collect();
    let values = counts.iter().map(|c| c.count).collect();
    let colors = counts
        .iter()
        .map(|_| NIGHT_COLORS[0].to_string())
        .collect();

    BarFigure {
        labels,
        values,
        colors,
        orientation: Orientation::Vertical,
    }
}

/// Horizontal bar figure for a classification result
///
/// One bar per category in table order, value 1 where the label vector
/// selects the category. Each bar gets a random qualitative color.
pub fn classification_bar(category_labels: &[String], labels: &[u8]) -> BarFigure {
    let mut rng = rand::thread_rng();

    let values = labels.iter().map(|&v| usize::from(v != 0)).collect();
    let colors = category_labels
        .iter()
        .map(|_| random_set2(&mut rng).to_string())
        .collect();

    BarFigure {
        labels: category_labels.to_vec(),
        values,
        colors,
        orientation: Orientation::Horizontal,
    }
}

/// Random demo label vector, used when no classifier is wired up
pub fn demo_labels(category_count: usize) -> Vec<u8> {
    let mut rng = rand::thread_rng();
    (0..category_count)
        .map(|_| u8::from(rng.gen_bool(0.5)))
        .collect()
}
