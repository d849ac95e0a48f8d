//! Chart Routes
//!
//! Static figures computed from the dataset at startup.
//!
//! - GET /api/v1/charts/genres - Genre distribution donut
//! - GET /api/v1/charts/categories?genre= - Category distribution bar

use axum::{
    extract::{Query, State},
    Json,
};
use std::sync::Arc;

use crate::api::dto::CategoryChartParams;
use crate::charts::{self, BarFigure, PieFigure};

use crate::api::state::AppState;

/// GET /api/v1/charts/genres
///
/// Returns the prebuilt genre donut figure.
pub async fn genre_chart(State(state): State<Arc<AppState>>) -> Json<PieFigure> {
    Json(state.figures.genre_pie.clone())
}

/// GET /api/v1/charts/categories
///
/// Category distribution within a genre. The default genre's figure is
/// prebuilt; other genres are computed on demand (a single pass over the
/// in-memory table).
pub async fn category_chart(
    State(state): State<Arc<AppState>>,
    Query(params): Query<CategoryChartParams>,
) -> Json<BarFigure> {
    let figure = match params.genre {
        Some(ref genre) if genre != &state.config.default_genre => {
            charts::category_bar(&state.dataset, Some(genre))
        }
        _ => state.figures.category_bar.clone(),
    };
    Json(figure)
}
