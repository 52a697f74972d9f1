//! # Launchboard
//!
//! Interactive SpaceX launch records dashboard: a CSV of launches, two
//! derived charts, and a reactive control layer served over HTTP and
//! WebSocket.
//!
//! ## Features
//!
//! - **Dataset**: Validated, immutable launch table loaded once at startup
//! - **Charts**: Success distribution pie and payload/outcome scatter, as
//!   serializable chart specs
//! - **Callbacks**: Control → chart bindings recomputed on every change
//! - **Live sessions**: One WebSocket session per open page
//!
//! ## Modules
//!
//! - [`dataset`]: CSV loading and the launch table
//! - [`charts`]: Pure chart computations
//! - [`callbacks`]: Control state and the callback registry
//! - [`layout`]: Dropdown and slider description for the page
//! - [`api`]: REST API server with Axum
//! - [`websocket`]: Reactive WebSocket sessions
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use launchboard::charts::compute_success_distribution;
//! use launchboard::dataset::{Dataset, SiteFilter};
//! use std::path::Path;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let dataset = Dataset::load(Path::new("spacex_launch_dash.csv"))?;
//!
//!     let pie = compute_success_distribution(&dataset, &SiteFilter::All);
//!     println!("{}", serde_json::to_string_pretty(&pie)?);
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod callbacks;
pub mod charts;
pub mod config;
pub mod dataset;
pub mod layout;
pub mod websocket;

pub use charts::ChartSpec;
pub use dataset::{Dataset, PayloadRange, SiteFilter};
