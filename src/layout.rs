//! Dashboard Layout
//!
//! Describes the control surface the page renders: the site dropdown, the
//! payload range slider, and the two chart slots. Derived from the dataset
//! and the `[dashboard]` config section at startup.

use serde::{Deserialize, Serialize};

use crate::callbacks::{ControlState, PAYLOAD_SLIDER, SCATTER_CHART, SITE_DROPDOWN, SUCCESS_PIE_CHART};
use crate::config::DashboardConfig;
use crate::dataset::{Dataset, ALL_SITES};

/// Everything the page needs to build its controls
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardLayout {
    pub title: String,
    pub site_dropdown: Dropdown,
    pub payload_slider: RangeSlider,
    /// Chart output identifiers, in page order
    pub charts: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dropdown {
    pub id: String,
    pub options: Vec<DropdownOption>,
    pub value: String,
    pub placeholder: String,
    pub searchable: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DropdownOption {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RangeSlider {
    pub id: String,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub marks: Vec<SliderMark>,
    /// Initial `[min, max]` selection
    pub value: [f64; 2],
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliderMark {
    pub value: f64,
    pub label: String,
}

impl DashboardLayout {
    pub fn build(dataset: &Dataset, config: &DashboardConfig) -> Self {
        let initial = ControlState::initial(dataset, config.slider_domain());

        let options = std::iter::once(DropdownOption {
            label: "All Sites".to_string(),
            value: ALL_SITES.to_string(),
        })
        .chain(dataset.launch_sites().into_iter().map(|site| DropdownOption {
            label: site.to_string(),
            value: site.to_string(),
        }))
        .collect();

        let marks = config
            .marks
            .iter()
            .map(|&value| SliderMark {
                value,
                label: mark_label(value),
            })
            .collect();

        Self {
            title: config.title.clone(),
            site_dropdown: Dropdown {
                id: SITE_DROPDOWN.to_string(),
                options,
                value: ALL_SITES.to_string(),
                placeholder: "Select a Launch Site here".to_string(),
                searchable: true,
            },
            payload_slider: RangeSlider {
                id: PAYLOAD_SLIDER.to_string(),
                min: config.slider_min,
                max: config.slider_max,
                step: config.slider_step,
                marks,
                value: initial.payload.into(),
            },
            charts: vec![SUCCESS_PIE_CHART.to_string(), SCATTER_CHART.to_string()],
        }
    }
}

/// "2500 (kg)", with a thousands separator from five digits up ("10,000 (kg)")
fn mark_label(value: f64) -> String {
    let whole = value.round() as i64;
    let digits = whole.abs().to_string();

    let text = if digits.len() < 5 {
        digits
    } else {
        let mut grouped = String::new();
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }
        grouped
    };

    let sign = if whole < 0 { "-" } else { "" };
    format!("{}{} (kg)", sign, text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::LaunchRecord;

    #[test]
    fn test_mark_labels() {
        assert_eq!(mark_label(0.0), "0 (kg)");
        assert_eq!(mark_label(2500.0), "2500 (kg)");
        assert_eq!(mark_label(10000.0), "10,000 (kg)");
        assert_eq!(mark_label(1250000.0), "1,250,000 (kg)");
    }

    #[test]
    fn test_layout_from_dataset() {
        let dataset = Dataset::from_records(vec![
            LaunchRecord::new("CCAFS LC-40", 0.0, "v1.0", 0),
            LaunchRecord::new("VAFB SLC-4E", 500.0, "v1.1", 1),
            LaunchRecord::new("CCAFS LC-40", 9600.0, "FT", 1),
        ])
        .unwrap();

        let layout = DashboardLayout::build(&dataset, &DashboardConfig::default());

        let values: Vec<&str> = layout
            .site_dropdown
            .options
            .iter()
            .map(|o| o.value.as_str())
            .collect();
        assert_eq!(values, vec!["ALL", "CCAFS LC-40", "VAFB SLC-4E"]);
        assert_eq!(layout.site_dropdown.options[0].label, "All Sites");
        assert_eq!(layout.site_dropdown.value, "ALL");

        let slider = &layout.payload_slider;
        assert_eq!((slider.min, slider.max, slider.step), (0.0, 10000.0, 1000.0));
        assert_eq!(slider.value, [0.0, 9600.0]);
        assert_eq!(slider.marks.len(), 5);
        assert_eq!(slider.marks[4].label, "10,000 (kg)");

        assert_eq!(layout.charts, vec![SUCCESS_PIE_CHART, SCATTER_CHART]);
    }

    #[test]
    fn test_empty_dataset_slider_defaults_to_domain() {
        let dataset = Dataset::from_records(Vec::new()).unwrap();
        let layout = DashboardLayout::build(&dataset, &DashboardConfig::default());
        assert_eq!(layout.payload_slider.value, [0.0, 10000.0]);
        assert_eq!(layout.site_dropdown.options.len(), 1);
    }
}
