//! Control identifiers and the per-session control state

use serde::{Deserialize, Serialize};

use super::error::{CallbackError, CallbackResult};
use crate::dataset::{Dataset, PayloadRange, SiteFilter};

/// Site selector
pub const SITE_DROPDOWN: &str = "site-dropdown";
/// Payload range slider
pub const PAYLOAD_SLIDER: &str = "payload-slider";

/// Success distribution pie chart
pub const SUCCESS_PIE_CHART: &str = "success-pie-chart";
/// Payload/outcome scatter chart
pub const SCATTER_CHART: &str = "success-payload-scatter-chart";

/// Every control the dashboard exposes
pub const CONTROLS: [&str; 2] = [SITE_DROPDOWN, PAYLOAD_SLIDER];

/// Current value of every control
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControlState {
    pub site: SiteFilter,
    pub payload: PayloadRange,
}

impl ControlState {
    pub fn new(site: SiteFilter, payload: PayloadRange) -> Self {
        Self { site, payload }
    }

    /// Initial control values: every site, full observed payload range.
    ///
    /// An empty dataset falls back to `fallback` (the slider domain).
    pub fn initial(dataset: &Dataset, fallback: PayloadRange) -> Self {
        let payload = dataset
            .payload_bounds()
            .map(|(lo, hi)| PayloadRange::new(lo, hi))
            .unwrap_or(fallback);

        Self {
            site: SiteFilter::All,
            payload,
        }
    }

    /// Update one control from its JSON value.
    ///
    /// The state is left untouched when the control is unknown or the value
    /// is ill-typed.
    pub fn apply(&mut self, control: &str, value: serde_json::Value) -> CallbackResult<()> {
        match control {
            SITE_DROPDOWN => {
                let site: SiteFilter = serde_json::from_value(value).map_err(|e| {
                    CallbackError::InvalidValue {
                        control: control.to_string(),
                        reason: e.to_string(),
                    }
                })?;
                self.site = site;
            }
            PAYLOAD_SLIDER => {
                let range: PayloadRange = serde_json::from_value(value).map_err(|e| {
                    CallbackError::InvalidValue {
                        control: control.to_string(),
                        reason: e.to_string(),
                    }
                })?;
                if !range.is_finite() {
                    return Err(CallbackError::InvalidValue {
                        control: control.to_string(),
                        reason: "bounds must be finite".to_string(),
                    });
                }
                self.payload = range;
            }
            other => return Err(CallbackError::UnknownControl(other.to_string())),
        }

        Ok(())
    }
}

pub fn is_control(id: &str) -> bool {
    CONTROLS.contains(&id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::LaunchRecord;
    use serde_json::json;

    fn default_state() -> ControlState {
        ControlState::new(SiteFilter::All, PayloadRange::new(0.0, 10000.0))
    }

    #[test]
    fn test_initial_uses_observed_bounds() {
        let dataset = Dataset::from_records(vec![
            LaunchRecord::new("CCAFS LC-40", 350.0, "v1.0", 0),
            LaunchRecord::new("KSC LC-39A", 9600.0, "B5", 1),
        ])
        .unwrap();

        let initial = ControlState::initial(&dataset, PayloadRange::new(0.0, 10000.0));
        assert_eq!(initial.site, SiteFilter::All);
        assert_eq!(initial.payload, PayloadRange::new(350.0, 9600.0));

        let empty = Dataset::from_records(Vec::new()).unwrap();
        let initial = ControlState::initial(&empty, PayloadRange::new(0.0, 10000.0));
        assert_eq!(initial.payload, PayloadRange::new(0.0, 10000.0));
    }

    #[test]
    fn test_apply_site_and_range() {
        let mut state = default_state();
        state.apply(SITE_DROPDOWN, json!("KSC LC-39A")).unwrap();
        state.apply(PAYLOAD_SLIDER, json!([2500, 7500])).unwrap();

        assert_eq!(state.site, SiteFilter::site("KSC LC-39A"));
        assert_eq!(state.payload, PayloadRange::new(2500.0, 7500.0));

        state.apply(SITE_DROPDOWN, json!("ALL")).unwrap();
        assert!(state.site.is_all());
    }

    #[test]
    fn test_apply_rejects_bad_input() {
        let mut state = default_state();

        let err = state.apply("year-slider", json!(2020)).unwrap_err();
        assert!(matches!(err, CallbackError::UnknownControl(_)));

        let err = state.apply(PAYLOAD_SLIDER, json!("wide")).unwrap_err();
        assert!(matches!(err, CallbackError::InvalidValue { .. }));

        let err = state.apply(SITE_DROPDOWN, json!(42)).unwrap_err();
        assert!(matches!(err, CallbackError::InvalidValue { .. }));

        assert_eq!(state, default_state());
    }
}
