//! Core data types for the launch dataset
//!
//! - `LaunchRecord`: one row of the launch table
//! - `Dataset`: the immutable, validated table shared by every chart
//! - `SiteFilter` and `PayloadRange`: the two control values

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::path::{Path, PathBuf};

use super::error::{DatasetError, DatasetResult};

/// Wire value of the "every site" sentinel
pub const ALL_SITES: &str = "ALL";

/// A single launch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaunchRecord {
    /// Launch site identifier (e.g. "CCAFS LC-40")
    #[serde(rename = "Launch Site")]
    pub launch_site: String,
    /// Payload mass in kilograms
    #[serde(rename = "Payload Mass (kg)")]
    pub payload_mass_kg: f64,
    /// Booster hardware generation (e.g. "FT", "B5")
    #[serde(rename = "Booster Version Category")]
    pub booster_version_category: String,
    /// 1 = success, 0 = failure
    #[serde(rename = "class")]
    pub outcome_class: i64,
}

impl LaunchRecord {
    pub fn new(
        launch_site: impl Into<String>,
        payload_mass_kg: f64,
        booster_version_category: impl Into<String>,
        outcome_class: i64,
    ) -> Self {
        Self {
            launch_site: launch_site.into(),
            payload_mass_kg,
            booster_version_category: booster_version_category.into(),
            outcome_class,
        }
    }

    pub fn is_success(&self) -> bool {
        self.outcome_class == 1
    }

    /// Check the record invariants. `line` is only used for error reporting.
    pub(crate) fn validate(&self, line: u64) -> DatasetResult<()> {
        if self.launch_site.trim().is_empty() {
            return Err(DatasetError::EmptyLaunchSite { line });
        }
        if self.outcome_class != 0 && self.outcome_class != 1 {
            return Err(DatasetError::InvalidOutcome {
                line,
                value: self.outcome_class,
            });
        }
        if !self.payload_mass_kg.is_finite() || self.payload_mass_kg < 0.0 {
            return Err(DatasetError::InvalidPayload {
                line,
                value: self.payload_mass_kg,
            });
        }
        Ok(())
    }
}

/// Site selection coming from the site dropdown
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SiteFilter {
    /// Every launch site
    #[default]
    All,
    /// One concrete site. Names unknown to the dataset match nothing.
    Site(String),
}

impl SiteFilter {
    pub fn site(name: impl Into<String>) -> Self {
        let name = name.into();
        if name == ALL_SITES {
            SiteFilter::All
        } else {
            SiteFilter::Site(name)
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, SiteFilter::All)
    }

    /// Whether a record passes this filter
    pub fn matches(&self, record: &LaunchRecord) -> bool {
        match self {
            SiteFilter::All => true,
            SiteFilter::Site(site) => record.launch_site == *site,
        }
    }
}

impl From<String> for SiteFilter {
    fn from(value: String) -> Self {
        SiteFilter::site(value)
    }
}

impl From<&str> for SiteFilter {
    fn from(value: &str) -> Self {
        SiteFilter::site(value)
    }
}

impl From<SiteFilter> for String {
    fn from(filter: SiteFilter) -> Self {
        match filter {
            SiteFilter::All => ALL_SITES.to_string(),
            SiteFilter::Site(site) => site,
        }
    }
}

impl fmt::Display for SiteFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SiteFilter::All => write!(f, "{}", ALL_SITES),
            SiteFilter::Site(site) => write!(f, "{}", site),
        }
    }
}

/// Payload range selected on the slider, serialized as `[min, max]`
///
/// Both bounds are exclusive when filtering: a record whose payload equals
/// `min` or `max` is not selected.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct PayloadRange {
    pub min: f64,
    pub max: f64,
}

impl PayloadRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Strict containment on both ends
    pub fn contains(&self, payload_mass_kg: f64) -> bool {
        payload_mass_kg > self.min && payload_mass_kg < self.max
    }

    pub fn is_finite(&self) -> bool {
        self.min.is_finite() && self.max.is_finite()
    }
}

impl From<[f64; 2]> for PayloadRange {
    fn from([min, max]: [f64; 2]) -> Self {
        Self { min, max }
    }
}

impl From<PayloadRange> for [f64; 2] {
    fn from(range: PayloadRange) -> Self {
        [range.min, range.max]
    }
}

impl fmt::Display for PayloadRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.min, self.max)
    }
}

/// Immutable launch table
///
/// Built once at startup and shared read-only (behind an `Arc`) by every
/// request. There is no mutation API.
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Vec<LaunchRecord>,
    source: Option<PathBuf>,
    loaded_at: DateTime<Utc>,
}

impl Dataset {
    /// Build a dataset from already-decoded records, validating every row
    pub fn from_records(records: Vec<LaunchRecord>) -> DatasetResult<Self> {
        for (idx, record) in records.iter().enumerate() {
            record.validate(idx as u64 + 1)?;
        }

        Ok(Self::from_validated(records))
    }

    /// Wrap rows the caller has already validated
    pub(crate) fn from_validated(records: Vec<LaunchRecord>) -> Self {
        Self {
            records,
            source: None,
            loaded_at: Utc::now(),
        }
    }

    /// Attach the file the records came from
    pub(crate) fn with_source(mut self, path: &Path) -> Self {
        self.source = Some(path.to_path_buf());
        self
    }

    pub fn records(&self) -> &[LaunchRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }

    /// Distinct launch sites in order of first appearance
    pub fn launch_sites(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.records
            .iter()
            .map(|r| r.launch_site.as_str())
            .filter(|site| seen.insert(*site))
            .collect()
    }

    /// Observed (min, max) payload mass, or None for an empty table
    pub fn payload_bounds(&self) -> Option<(f64, f64)> {
        let mut iter = self.records.iter().map(|r| r.payload_mass_kg);
        let first = iter.next()?;
        Some(iter.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v))))
    }

    pub fn success_count(&self) -> usize {
        self.records.iter().filter(|r| r.is_success()).count()
    }

    /// Summary used by the `/api/v1/dataset` endpoint and the CLI
    pub fn summary(&self) -> DatasetSummary {
        let bounds = self.payload_bounds();
        DatasetSummary {
            records: self.len(),
            successes: self.success_count(),
            sites: self.launch_sites().into_iter().map(String::from).collect(),
            min_payload_kg: bounds.map(|(lo, _)| lo),
            max_payload_kg: bounds.map(|(_, hi)| hi),
            source: self
                .source
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            loaded_at: self.loaded_at,
        }
    }
}

/// Overview of a loaded dataset
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetSummary {
    pub records: usize,
    pub successes: usize,
    pub sites: Vec<String>,
    pub min_payload_kg: Option<f64>,
    pub max_payload_kg: Option<f64>,
    pub source: Option<String>,
    pub loaded_at: DateTime<Utc>,
}

impl fmt::Display for DatasetSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} launches ({} successful) across {} sites",
            self.records,
            self.successes,
            self.sites.len()
        )
    }
}
