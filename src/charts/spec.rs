//! Chart specifications
//!
//! Plain data handed to the display layer. The browser page maps these onto
//! Plotly traces; nothing here knows about rendering.

use serde::{Deserialize, Serialize};

/// A chart ready for display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChartSpec {
    Pie(PieChart),
    Scatter(ScatterChart),
    /// Nothing to draw: the computation had no records to work with
    NoData(NoDataChart),
}

impl ChartSpec {
    pub fn title(&self) -> &str {
        match self {
            ChartSpec::Pie(pie) => &pie.title,
            ChartSpec::Scatter(scatter) => &scatter.title,
            ChartSpec::NoData(empty) => &empty.title,
        }
    }

    pub fn no_data(title: impl Into<String>, message: impl Into<String>) -> Self {
        ChartSpec::NoData(NoDataChart {
            title: title.into(),
            message: message.into(),
        })
    }

    pub fn as_pie(&self) -> Option<&PieChart> {
        match self {
            ChartSpec::Pie(pie) => Some(pie),
            _ => None,
        }
    }

    pub fn as_scatter(&self) -> Option<&ScatterChart> {
        match self {
            ChartSpec::Scatter(scatter) => Some(scatter),
            _ => None,
        }
    }

    pub fn is_no_data(&self) -> bool {
        matches!(self, ChartSpec::NoData(_))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieChart {
    pub title: String,
    pub slices: Vec<PieSlice>,
}

impl PieChart {
    pub fn total(&self) -> f64 {
        self.slices.iter().map(|s| s.value).sum()
    }

    pub fn slice(&self, label: &str) -> Option<&PieSlice> {
        self.slices.iter().find(|s| s.label == label)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieSlice {
    pub label: String,
    /// Proportion in [0, 1]
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    /// Distinct color categories, first-appearance order
    pub categories: Vec<String>,
    pub points: Vec<ScatterPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterPoint {
    /// Payload mass (kg)
    pub x: f64,
    /// Outcome class
    pub y: i64,
    /// Booster version category
    pub category: String,
    pub site: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoDataChart {
    pub title: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pie_serialize_tagged() {
        let spec = ChartSpec::Pie(PieChart {
            title: "t".to_string(),
            slices: vec![PieSlice {
                label: "Success".to_string(),
                value: 1.0,
            }],
        });
        let json = serde_json::to_string(&spec).unwrap();
        assert!(json.contains("\"kind\":\"pie\""));
        assert!(json.contains("\"label\":\"Success\""));
    }

    #[test]
    fn test_no_data_serialize() {
        let spec = ChartSpec::no_data("Empty", "No launches recorded");
        let json = serde_json::to_value(&spec).unwrap();
        assert_eq!(json["kind"], "no_data");
        assert_eq!(json["message"], "No launches recorded");
        assert!(spec.is_no_data());
        assert_eq!(spec.title(), "Empty");
    }
}
