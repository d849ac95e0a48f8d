//! Dashboard Page
//!
//! - GET / - The single dashboard page, embedded at compile time

use axum::response::Html;

const INDEX_HTML: &str = include_str!("../../../assets/index.html");

/// GET /
///
/// Serve the dashboard page. All interactivity happens through the JSON API.
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_index_contains_dashboard_markup() {
        let Html(body) = index().await;
        assert!(body.contains("Disaster Response"));
        assert!(body.contains("/api/v1/tokenize"));
    }
}
