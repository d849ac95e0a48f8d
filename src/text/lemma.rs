//! Light English lemmatizer
//!
//! Suffix-based noun normalization: enough to fold plural forms onto their
//! lemma without a dictionary. Verb forms ("-ing", "-ed") are left alone,
//! matching a noun-default lemmatizer. Tokens the rules would mangle are
//! listed as exceptions.

/// Words the suffix rules would mangle
const EXCEPTIONS: [&str; 4] = ["news", "lens", "means", "species"];

/// Lemmatize a single lowercase token
///
/// Non-alphabetic and very short tokens pass through unchanged.
pub fn lemmatize(token: &str) -> String {
    if token.len() <= 3 || !token.chars().all(|c| c.is_alphabetic()) {
        return token.to_string();
    }
    if EXCEPTIONS.contains(&token) {
        return token.to_string();
    }

    if let Some(stem) = token.strip_suffix("sses") {
        return format!("{}ss", stem);
    }
    if let Some(stem) = token.strip_suffix("ies") {
        return format!("{}y", stem);
    }
    if token.ends_with("xes") || token.ends_with("zes") || token.ends_with("ches") || token.ends_with("shes") {
        return token[..token.len() - 2].to_string();
    }
    if token.ends_with('s') && !token.ends_with("ss") && !token.ends_with("us") && !token.ends_with("is") {
        return token[..token.len() - 1].to_string();
    }

    token.to_string()
}
