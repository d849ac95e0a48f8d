//! Message text processing
//!
//! Tokenization pipeline for the classification demo: Unicode word
//! segmentation, lowercasing, then light lemmatization. The same pipeline
//! feeds both the token echo endpoint and the classifier input.

mod lemma;

pub use lemma::lemmatize;

use unicode_segmentation::UnicodeSegmentation;

/// Tokenize a message into normalized tokens
///
/// Splits on Unicode word boundaries (punctuation and whitespace are
/// dropped), lowercases, and lemmatizes each token. Empty or
/// whitespace-only input yields an empty list.
pub fn tokenize(text: &str) -> Vec<String> {
    text.unicode_words()
        .map(|word| lemmatize(&word.to_lowercase()))
        .collect()
}

/// Join tokens for display, the way the dashboard echoes them back
pub fn join_tokens(tokens: &[String]) -> String {
    tokens.join(", ")
}
