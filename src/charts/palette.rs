//! Color palettes
//!
//! The dashboard's fixed dark palette for the static charts, and a
//! qualitative palette sampled at random for the per-category demo bars.

use rand::Rng;

/// Dark palette used by the static genre and category charts
pub const NIGHT_COLORS: [&str; 3] = [
    "rgb(56, 75, 126)",
    "rgb(18, 36, 37)",
    "rgb(34, 53, 101)",
];

/// Qualitative Set2 palette
pub const SET2: [&str; 8] = [
    "rgb(102,194,165)",
    "rgb(252,141,98)",
    "rgb(141,160,203)",
    "rgb(231,138,195)",
    "rgb(166,216,84)",
    "rgb(255,217,47)",
    "rgb(229,196,148)",
    "rgb(179,179,179)",
];

/// Pick a uniformly random Set2 color
pub fn random_set2<R: Rng>(rng: &mut R) -> &'static str {
    SET2[rng.gen_range(0..SET2.len())]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_set2_stays_in_palette() {
        let mut rng = rand::thread_rng();
        for _ in 0..100 {
            let color = random_set2(&mut rng);
            assert!(SET2.contains(&color));
        }
    }
}
