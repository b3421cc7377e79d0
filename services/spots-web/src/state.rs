//! Application state and shared resources.

use metrics_exporter_prometheus::PrometheusHandle;
use spot_common::Spot;
use spot_store::SpotStore;

use crate::config::WebConfig;
use crate::registry::ViewRegistry;

/// Shared application state.
pub struct AppState {
    /// The one spot list every view reads from and appends to.
    pub store: SpotStore,

    /// Views of the currently open pages.
    pub views: ViewRegistry,

    pub config: WebConfig,

    /// Renders `/metrics`; absent when no recorder is installed.
    pub prometheus: Option<PrometheusHandle>,
}

impl AppState {
    /// Build state with the store initialized from `seeds`.
    pub fn new(config: WebConfig, seeds: Vec<Spot>) -> Self {
        Self {
            store: SpotStore::with_capacity(config.store_capacity, seeds),
            views: ViewRegistry::new(config.max_views),
            config,
            prometheus: None,
        }
    }

    pub fn with_prometheus(mut self, handle: PrometheusHandle) -> Self {
        self.prometheus = Some(handle);
        self
    }
}
