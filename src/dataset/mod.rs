//! Launch Dataset
//!
//! The static launch table behind the dashboard:
//!
//! - **types**: `LaunchRecord`, `Dataset`, and the control values `SiteFilter` / `PayloadRange`
//! - **loader**: CSV decoding and validation
//! - **error**: Error types
//!
//! # Example
//!
//! ```rust,no_run
//! use launchboard::dataset::Dataset;
//! use std::path::Path;
//!
//! let dataset = Dataset::load(Path::new("spacex_launch_dash.csv"))?;
//! println!("{}", dataset.summary());
//! # Ok::<(), launchboard::dataset::DatasetError>(())
//! ```

pub mod error;
pub mod loader;
pub mod types;

pub use error::{DatasetError, DatasetResult};
pub use loader::REQUIRED_COLUMNS;
pub use types::{Dataset, DatasetSummary, LaunchRecord, PayloadRange, SiteFilter, ALL_SITES};
