//! Application State
//!
//! Shared state accessible by all API handlers.
//! Wrapped in Arc for thread-safe sharing across async tasks.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Instant;

use crate::callbacks::{CallbackRegistry, ControlState};
use crate::config::DashboardConfig;
use crate::dataset::{Dataset, PayloadRange};
use crate::layout::DashboardLayout;

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Immutable launch table
    pub dataset: Arc<Dataset>,
    /// Control → chart bindings
    pub callbacks: Arc<CallbackRegistry>,
    /// Control surface served to the page
    pub layout: Arc<DashboardLayout>,
    /// Slider domain, used when the dataset has no payloads
    pub slider_domain: PayloadRange,
    /// Server start time for uptime tracking
    pub start_time: Instant,
    /// Open WebSocket sessions
    ws_sessions: Arc<AtomicUsize>,
}

impl AppState {
    /// Create state with the standard dashboard callbacks
    pub fn new(dataset: Dataset, dashboard: &DashboardConfig) -> Self {
        Self::with_callbacks(dataset, dashboard, CallbackRegistry::dashboard())
    }

    /// Create state with a custom callback registry
    pub fn with_callbacks(
        dataset: Dataset,
        dashboard: &DashboardConfig,
        callbacks: CallbackRegistry,
    ) -> Self {
        let layout = DashboardLayout::build(&dataset, dashboard);

        Self {
            dataset: Arc::new(dataset),
            callbacks: Arc::new(callbacks),
            layout: Arc::new(layout),
            slider_domain: dashboard.slider_domain(),
            start_time: Instant::now(),
            ws_sessions: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Control values a fresh page starts from
    pub fn initial_controls(&self) -> ControlState {
        ControlState::initial(&self.dataset, self.slider_domain)
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }

    /// Get WebSocket session count
    pub fn ws_session_count(&self) -> usize {
        self.ws_sessions.load(Ordering::Relaxed)
    }

    /// Count a WebSocket session for as long as the guard lives
    pub fn track_session(&self) -> SessionGuard {
        self.ws_sessions.fetch_add(1, Ordering::Relaxed);
        SessionGuard {
            counter: Arc::clone(&self.ws_sessions),
        }
    }
}

/// Decrements the session count on drop
pub struct SessionGuard {
    counter: Arc<AtomicUsize>,
}

impl Drop for SessionGuard {
    fn drop(&mut self) {
        self.counter.fetch_sub(1, Ordering::Relaxed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::LaunchRecord;

    #[test]
    fn test_session_guard_counts() {
        let dataset = Dataset::from_records(vec![LaunchRecord::new("KSC LC-39A", 100.0, "FT", 1)])
            .unwrap();
        let state = AppState::new(dataset, &DashboardConfig::default());

        assert_eq!(state.ws_session_count(), 0);
        let first = state.track_session();
        let second = state.track_session();
        assert_eq!(state.ws_session_count(), 2);
        drop(first);
        assert_eq!(state.ws_session_count(), 1);
        drop(second);
        assert_eq!(state.ws_session_count(), 0);
    }
}
