//! Chart figures
//!
//! Serializable figure objects rendered by the dashboard page. The static
//! figures (genre donut, category bar) are built once at startup from the
//! loaded dataset; the classification bar is rebuilt per request.

mod figures;
mod palette;

pub use figures::{category_bar, classification_bar, demo_labels, genre_pie};
pub use palette::{random_set2, NIGHT_COLORS, SET2};

use serde::Serialize;

/// Donut/pie figure
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PieFigure {
    /// Slice labels
    pub labels: Vec<String>,
    /// Slice values
    pub values: Vec<usize>,
    /// Slice colors (rgb strings)
    pub colors: Vec<String>,
    /// Fraction of the radius cut out of the middle
    pub hole: f64,
}

/// Bar figure
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BarFigure {
    /// Bar labels
    pub labels: Vec<String>,
    /// Bar values
    pub values: Vec<usize>,
    /// Bar colors (rgb strings), one per bar
    pub colors: Vec<String>,
    /// Bar orientation
    pub orientation: Orientation,
}

/// Bar chart orientation
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Vertical,
    Horizontal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orientation_serializes_lowercase() {
        let json = serde_json::to_string(&Orientation::Horizontal).unwrap();
        assert_eq!(json, "\"horizontal\"");
    }
}
