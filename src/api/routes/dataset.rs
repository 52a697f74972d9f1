//! Dataset Routes
//!
//! Read-only views of the loaded launch table and the control surface.
//!
//! - GET /api/v1/layout - Dropdown, slider and chart slots
//! - GET /api/v1/dataset - Dataset summary
//! - GET /api/v1/sites - Distinct launch sites

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::dto::SitesResponse;
use crate::api::state::AppState;
use crate::dataset::DatasetSummary;
use crate::layout::DashboardLayout;

/// GET /api/v1/layout
pub async fn get_layout(State(state): State<Arc<AppState>>) -> Json<DashboardLayout> {
    Json(state.layout.as_ref().clone())
}

/// GET /api/v1/dataset
pub async fn get_dataset_summary(State(state): State<Arc<AppState>>) -> Json<DatasetSummary> {
    Json(state.dataset.summary())
}

/// GET /api/v1/sites
pub async fn list_sites(State(state): State<Arc<AppState>>) -> Json<SitesResponse> {
    let sites: Vec<String> = state
        .dataset
        .launch_sites()
        .into_iter()
        .map(String::from)
        .collect();

    Json(SitesResponse {
        total: sites.len(),
        sites,
    })
}
