//! Overview Route
//!
//! - GET /api/v1/overview - Dataset summary for the page header

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::dto::OverviewResponse;
use crate::api::state::AppState;

/// GET /api/v1/overview
///
/// Sample count, genre list, and category count of the loaded dataset.
pub async fn get_overview(State(state): State<Arc<AppState>>) -> Json<OverviewResponse> {
    Json(OverviewResponse {
        samples: state.dataset.len(),
        genres: state.dataset.genres(),
        category_count: state.dataset.categories().len(),
    })
}
