//! Bounded FIFO list of spots shared by every map view in the process.
//!
//! ## Eviction Strategy
//! The store holds at most `capacity` spots. Appending past that removes the
//! oldest entry (index 0), so the list always holds the most recent spots in
//! insertion order.
//!
//! ## Locking
//! A single RwLock guards the list. Append and evict happen under one write
//! guard, so readers see either the state before an insert or after it.

use metrics::{counter, gauge};
use spot_common::Spot;
use std::collections::VecDeque;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info};

/// Number of spots kept when no capacity is configured.
pub const DEFAULT_CAPACITY: usize = 100;

/// Process-wide list of named spots.
pub struct SpotStore {
    spots: RwLock<VecDeque<Arc<Spot>>>,
    capacity: usize,
}

impl SpotStore {
    /// Create a store with the default capacity holding the given seed spots.
    pub fn new(seeds: impl IntoIterator<Item = Spot>) -> Self {
        Self::with_capacity(DEFAULT_CAPACITY, seeds)
    }

    /// Create a store holding at most `capacity` spots (minimum 1).
    ///
    /// Seeds are appended in order; if there are more seeds than capacity only
    /// the last `capacity` of them are kept.
    pub fn with_capacity(capacity: usize, seeds: impl IntoIterator<Item = Spot>) -> Self {
        let capacity = capacity.max(1);
        let mut spots = VecDeque::with_capacity(capacity + 1);

        for spot in seeds {
            spots.push_back(Arc::new(spot));
            if spots.len() > capacity {
                spots.pop_front();
            }
        }

        info!(capacity = capacity, seeded = spots.len(), "Initializing spot store");
        gauge!("spots_stored").set(spots.len() as f64);

        Self {
            spots: RwLock::new(spots),
            capacity,
        }
    }

    /// Snapshot of all spots, oldest first.
    ///
    /// The returned vector is detached from the store; later inserts do not
    /// show up in it.
    pub async fn all(&self) -> Vec<Arc<Spot>> {
        self.spots.read().await.iter().cloned().collect()
    }

    /// Append a spot, evicting the oldest one if the store is full.
    ///
    /// Returns the shared handle now held by the store.
    pub async fn add(&self, spot: impl Into<Arc<Spot>>) -> Arc<Spot> {
        let spot = spot.into();

        let mut spots = self.spots.write().await;
        spots.push_back(Arc::clone(&spot));

        let evicted = if spots.len() > self.capacity {
            spots.pop_front()
        } else {
            None
        };
        let stored = spots.len();
        drop(spots);

        counter!("spots_added_total").increment(1);
        gauge!("spots_stored").set(stored as f64);
        debug!(name = %spot.name, stored = stored, "Spot added");

        if let Some(old) = evicted {
            counter!("spots_evicted_total").increment(1);
            debug!(name = %old.name, "Evicted oldest spot");
        }

        spot
    }

    /// Current number of spots.
    pub async fn len(&self) -> usize {
        self.spots.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.spots.read().await.is_empty()
    }

    /// Maximum number of spots kept.
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spot(i: usize) -> Spot {
        Spot::new(i as f64 * 0.01, i as f64 * 0.02, format!("spot-{}", i))
    }

    #[tokio::test]
    async fn test_store_basic_operations() {
        let store = SpotStore::new(Vec::new());
        assert!(store.is_empty().await);
        assert_eq!(store.capacity(), DEFAULT_CAPACITY);

        let added = store.add(spot(0)).await;
        assert_eq!(store.len().await, 1);

        let all = store.all().await;
        assert!(Arc::ptr_eq(&all[0], &added));
    }

    #[tokio::test]
    async fn test_eviction_removes_oldest() {
        let store = SpotStore::with_capacity(2, Vec::new());
        store.add(spot(0)).await;
        store.add(spot(1)).await;
        store.add(spot(2)).await;

        let names: Vec<String> = store.all().await.iter().map(|s| s.name.clone()).collect();
        assert_eq!(names, vec!["spot-1", "spot-2"]);
    }

    #[tokio::test]
    async fn test_zero_capacity_clamped() {
        let store = SpotStore::with_capacity(0, Vec::new());
        assert_eq!(store.capacity(), 1);

        store.add(spot(0)).await;
        store.add(spot(1)).await;
        assert_eq!(store.len().await, 1);
        assert_eq!(store.all().await[0].name, "spot-1");
    }

    #[tokio::test]
    async fn test_oversized_seed_keeps_newest() {
        let store = SpotStore::with_capacity(3, (0..5).map(spot));
        let names: Vec<String> = store.all().await.iter().map(|s| s.name.clone()).collect();
        assert_eq!(names, vec!["spot-2", "spot-3", "spot-4"]);
    }

    #[tokio::test]
    async fn test_snapshot_is_detached() {
        let store = SpotStore::new(vec![spot(0)]);
        let mut snapshot = store.all().await;
        snapshot.clear();

        store.add(spot(1)).await;
        assert!(snapshot.is_empty());
        assert_eq!(store.len().await, 2);
    }
}
