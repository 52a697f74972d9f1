//! Callback registry
//!
//! Each callback is a handler bound to one output and a list of input
//! controls. When a control changes, the host calls [`CallbackRegistry::dispatch`]
//! and every callback that reads that control runs once, synchronously, in
//! registration order.

use serde::{Deserialize, Serialize};

use super::controls::{
    is_control, ControlState, PAYLOAD_SLIDER, SCATTER_CHART, SITE_DROPDOWN, SUCCESS_PIE_CHART,
};
use super::error::{CallbackError, CallbackResult};
use crate::charts::{compute_scatter_selection, compute_success_distribution, ChartSpec};
use crate::dataset::Dataset;

/// Chart computation run for a callback
pub type Handler = Box<dyn Fn(&Dataset, &ControlState) -> ChartSpec + Send + Sync>;

struct Binding {
    output: String,
    inputs: Vec<String>,
    handler: Handler,
}

impl Binding {
    fn reads(&self, control: &str) -> bool {
        self.inputs.iter().any(|i| i == control)
    }

    fn update(&self, dataset: &Dataset, state: &ControlState) -> ChartUpdate {
        ChartUpdate {
            id: self.output.clone(),
            figure: (self.handler)(dataset, state),
        }
    }
}

/// A recomputed output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartUpdate {
    /// Output identifier
    pub id: String,
    pub figure: ChartSpec,
}

/// Registered callbacks, keyed by output
#[derive(Default)]
pub struct CallbackRegistry {
    bindings: Vec<Binding>,
}

impl CallbackRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The two dashboard callbacks:
    ///
    /// - `success-pie-chart` ← `site-dropdown`
    /// - `success-payload-scatter-chart` ← `site-dropdown`, `payload-slider`
    pub fn dashboard() -> Self {
        let mut registry = Self::new();
        registry.push(
            SUCCESS_PIE_CHART,
            &[SITE_DROPDOWN],
            Box::new(|dataset: &Dataset, state: &ControlState| {
                compute_success_distribution(dataset, &state.site)
            }),
        );
        registry.push(
            SCATTER_CHART,
            &[SITE_DROPDOWN, PAYLOAD_SLIDER],
            Box::new(|dataset: &Dataset, state: &ControlState| {
                compute_scatter_selection(dataset, &state.site, &state.payload)
            }),
        );
        registry
    }

    /// Register a callback producing `output` whenever one of `inputs` changes
    pub fn register<F>(&mut self, output: &str, inputs: &[&str], handler: F) -> CallbackResult<()>
    where
        F: Fn(&Dataset, &ControlState) -> ChartSpec + Send + Sync + 'static,
    {
        if inputs.is_empty() {
            return Err(CallbackError::NoInputs(output.to_string()));
        }
        if let Some(unknown) = inputs.iter().find(|i| !is_control(i)) {
            return Err(CallbackError::UnknownControl(unknown.to_string()));
        }
        if self.bindings.iter().any(|b| b.output == output) {
            return Err(CallbackError::DuplicateOutput(output.to_string()));
        }

        self.push(output, inputs, Box::new(handler));
        Ok(())
    }

    fn push(&mut self, output: &str, inputs: &[&str], handler: Handler) {
        tracing::debug!(output = %output, inputs = ?inputs, "Registered callback");
        self.bindings.push(Binding {
            output: output.to_string(),
            inputs: inputs.iter().map(|i| i.to_string()).collect(),
            handler,
        });
    }

    /// Output identifiers in registration order
    pub fn outputs(&self) -> Vec<&str> {
        self.bindings.iter().map(|b| b.output.as_str()).collect()
    }

    /// Outputs that read `control`
    pub fn dependents(&self, control: &str) -> Vec<&str> {
        self.bindings
            .iter()
            .filter(|b| b.reads(control))
            .map(|b| b.output.as_str())
            .collect()
    }

    /// Recompute every output that depends on `changed`
    pub fn dispatch(
        &self,
        changed: &str,
        dataset: &Dataset,
        state: &ControlState,
    ) -> CallbackResult<Vec<ChartUpdate>> {
        if !is_control(changed) {
            return Err(CallbackError::UnknownControl(changed.to_string()));
        }

        let updates: Vec<ChartUpdate> = self
            .bindings
            .iter()
            .filter(|b| b.reads(changed))
            .map(|b| b.update(dataset, state))
            .collect();

        tracing::debug!(
            control = %changed,
            site = %state.site,
            payload = %state.payload,
            outputs = updates.len(),
            "Dispatched control change"
        );

        Ok(updates)
    }

    /// Compute a single output, if registered
    pub fn render(&self, output: &str, dataset: &Dataset, state: &ControlState) -> Option<ChartSpec> {
        self.bindings
            .iter()
            .find(|b| b.output == output)
            .map(|b| (b.handler)(dataset, state))
    }

    /// Compute every output (initial page load)
    pub fn render_all(&self, dataset: &Dataset, state: &ControlState) -> Vec<ChartUpdate> {
        self.bindings
            .iter()
            .map(|b| b.update(dataset, state))
            .collect()
    }
}

impl std::fmt::Debug for CallbackRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CallbackRegistry")
            .field("outputs", &self.outputs())
            .finish()
    }
}
