//! Correlates client-side marker ids with server-side spots.

use serde::{Deserialize, Serialize};
use spot_common::Spot;
use std::collections::HashMap;
use std::sync::Arc;

/// Integer id a marker carries in the browser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MarkerHandle(pub u64);

impl std::fmt::Display for MarkerHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One-way lookup from marker handle to spot for a single map view.
///
/// Handles start at 0 and increase by one per registration; they are never
/// reused and entries are never removed. The map holds a shared reference for
/// lookups only; the spot store decides how long a spot lives in the app.
#[derive(Debug, Default)]
pub struct MarkerHandleMap {
    next: u64,
    spots: HashMap<MarkerHandle, Arc<Spot>>,
}

impl MarkerHandleMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a spot under the next unused handle.
    pub fn register(&mut self, spot: Arc<Spot>) -> MarkerHandle {
        let handle = MarkerHandle(self.next);
        self.next += 1;
        self.spots.insert(handle, spot);
        handle
    }

    /// The spot registered under `handle`, if any.
    pub fn resolve(&self, handle: MarkerHandle) -> Option<Arc<Spot>> {
        self.spots.get(&handle).cloned()
    }

    /// Handle the next registration will receive.
    pub fn next_handle(&self) -> MarkerHandle {
        MarkerHandle(self.next)
    }

    pub fn len(&self) -> usize {
        self.spots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spots.is_empty()
    }
}
