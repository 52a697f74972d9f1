//! Chart Routes
//!
//! One-shot chart computation for the current control values.
//!
//! - GET /api/v1/charts/success-distribution?site= - Pie chart spec
//! - GET /api/v1/charts/scatter-selection?site=&min=&max= - Scatter chart spec

use axum::{
    extract::{Query, State},
    Json,
};
use std::sync::Arc;

use crate::api::dto::ChartParams;
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::charts::{compute_scatter_selection, compute_success_distribution, ChartSpec};
use crate::dataset::{PayloadRange, SiteFilter};

/// GET /api/v1/charts/success-distribution
pub async fn success_distribution(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ChartParams>,
) -> ApiResult<Json<ChartSpec>> {
    let site = site_filter(&params);
    Ok(Json(compute_success_distribution(&state.dataset, &site)))
}

/// GET /api/v1/charts/scatter-selection
///
/// Missing bounds default to the initial slider selection.
pub async fn scatter_selection(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ChartParams>,
) -> ApiResult<Json<ChartSpec>> {
    let site = site_filter(&params);
    let defaults = state.initial_controls().payload;

    let range = PayloadRange::new(
        params.min.unwrap_or(defaults.min),
        params.max.unwrap_or(defaults.max),
    );
    if !range.is_finite() {
        return Err(ApiError::Validation(
            "payload bounds must be finite numbers".to_string(),
        ));
    }

    Ok(Json(compute_scatter_selection(&state.dataset, &site, &range)))
}

fn site_filter(params: &ChartParams) -> SiteFilter {
    params
        .site
        .as_deref()
        .map(SiteFilter::site)
        .unwrap_or_default()
}
