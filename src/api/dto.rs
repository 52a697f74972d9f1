//! Data Transfer Objects
//!
//! Request and response types for the API endpoints.
//! These types are serialized/deserialized to/from JSON.

use serde::{Deserialize, Serialize};

use crate::callbacks::{ChartUpdate, ControlState};

// ============================================
// CHART DTOs
// ============================================

/// Query parameters for the chart endpoints
#[derive(Debug, Default, Deserialize)]
pub struct ChartParams {
    /// Site name or "ALL" (default)
    #[serde(default)]
    pub site: Option<String>,
    /// Exclusive lower payload bound (kg); defaults to the observed minimum
    #[serde(default)]
    pub min: Option<f64>,
    /// Exclusive upper payload bound (kg); defaults to the observed maximum
    #[serde(default)]
    pub max: Option<f64>,
}

// ============================================
// CALLBACK DTOs
// ============================================

/// A control changed on the page
#[derive(Debug, Deserialize)]
pub struct CallbackRequest {
    /// Identifier of the control that changed
    pub changed: String,
    /// Every control's current value, including the changed one
    pub state: ControlState,
}

/// Recomputed outputs for a control change
#[derive(Debug, Serialize, Deserialize)]
pub struct CallbackResponse {
    pub outputs: Vec<ChartUpdate>,
}

// ============================================
// DATASET DTOs
// ============================================

/// Distinct launch sites
#[derive(Debug, Serialize, Deserialize)]
pub struct SitesResponse {
    pub sites: Vec<String>,
    pub total: usize,
}

// ============================================
// HEALTH DTOs
// ============================================

/// Full health status
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// healthy or degraded
    pub status: String,
    pub dataset_records: usize,
    pub ws_sessions: usize,
    pub uptime_seconds: u64,
    pub version: String,
}
