//! Callback Route
//!
//! Stateless control-change dispatch for clients that keep their own control
//! state.
//!
//! - POST /api/v1/callback - Recompute the outputs that read the changed control

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::dto::{CallbackRequest, CallbackResponse};
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;

/// POST /api/v1/callback
pub async fn handle_callback(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CallbackRequest>,
) -> ApiResult<Json<CallbackResponse>> {
    if !req.state.payload.is_finite() {
        return Err(ApiError::Validation(
            "payload bounds must be finite numbers".to_string(),
        ));
    }

    let outputs = state
        .callbacks
        .dispatch(&req.changed, &state.dataset, &req.state)?;

    Ok(Json(CallbackResponse { outputs }))
}
