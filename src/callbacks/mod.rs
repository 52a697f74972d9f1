//! Reactive Binding Layer
//!
//! Connects dashboard controls to chart outputs:
//!
//! - **controls**: Control/output identifiers and `ControlState`
//! - **registry**: `CallbackRegistry`, the explicit control → output bindings
//! - **error**: Error types
//!
//! The host (HTTP handler or WebSocket session) owns the `ControlState`, applies
//! the changed value, then asks the registry which outputs to recompute.
//!
//! # Example
//!
//! ```rust
//! use launchboard::callbacks::{CallbackRegistry, ControlState, SITE_DROPDOWN};
//! use launchboard::dataset::{Dataset, LaunchRecord, PayloadRange};
//!
//! let dataset = Dataset::from_records(vec![
//!     LaunchRecord::new("CCAFS LC-40", 500.0, "v1.1", 1),
//! ])?;
//! let registry = CallbackRegistry::dashboard();
//!
//! let mut state = ControlState::initial(&dataset, PayloadRange::new(0.0, 10000.0));
//! state.apply(SITE_DROPDOWN, serde_json::json!("CCAFS LC-40"))?;
//!
//! let updates = registry.dispatch(SITE_DROPDOWN, &dataset, &state)?;
//! assert_eq!(updates.len(), 2);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod controls;
pub mod error;
pub mod registry;

pub use controls::{
    is_control, ControlState, CONTROLS, PAYLOAD_SLIDER, SCATTER_CHART, SITE_DROPDOWN,
    SUCCESS_PIE_CHART,
};
pub use error::{CallbackError, CallbackResult};
pub use registry::{CallbackRegistry, ChartUpdate, Handler};
