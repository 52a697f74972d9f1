//! Chart computations
//!
//! The two pure functions behind the dashboard charts:
//!
//! - **success**: success/failure proportions for the pie chart
//! - **scatter**: payload-filtered rows for the scatter chart
//! - **spec**: the `ChartSpec` values both return
//!
//! Both take the dataset by reference together with the current control
//! values, hold no state, and always return the same spec for the same input.

pub mod scatter;
pub mod spec;
pub mod success;

pub use scatter::compute_scatter_selection;
pub use spec::{ChartSpec, NoDataChart, PieChart, PieSlice, ScatterChart, ScatterPoint};
pub use success::compute_success_distribution;
