//! Tokenize Route
//!
//! The first reactive callback of the dashboard: echo the normalized tokens
//! of whatever the user typed.
//!
//! - POST /api/v1/tokenize

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::dto::{TokenizeRequest, TokenizeResponse};
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::text;

/// POST /api/v1/tokenize
///
/// Tokenize a message and echo the tokens back joined with ", ".
pub async fn tokenize_message(
    State(_state): State<Arc<AppState>>,
    Json(req): Json<TokenizeRequest>,
) -> ApiResult<Json<TokenizeResponse>> {
    if req.message.trim().is_empty() {
        return Err(ApiError::Validation("message cannot be empty".to_string()));
    }

    let tokens = text::tokenize(&req.message);
    tracing::debug!(?tokens, input = %req.message, "Tokenized message");

    let echo = text::join_tokens(&tokens);
    Ok(Json(TokenizeResponse { tokens, echo }))
}
