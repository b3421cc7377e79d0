//! Live map views, keyed by the id handed to each browser page.
//!
//! ## Eviction Strategy
//! Views are never closed explicitly (pages just go away), so the registry is
//! an LRU bounded by entry count. Dropping a view only forgets its marker
//! handles; spots stay in the shared store.

use lru::LruCache;
use metrics::counter;
use std::num::NonZeroUsize;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info};
use uuid::Uuid;

use crate::view::MainView;

/// A view shared between the requests of one page.
pub type SharedView = Arc<Mutex<MainView>>;

/// Bounded registry of open views.
pub struct ViewRegistry {
    views: Mutex<LruCache<Uuid, SharedView>>,
    max_views: usize,
}

impl ViewRegistry {
    /// Create a registry holding at most `max_views` views (minimum 1).
    pub fn new(max_views: usize) -> Self {
        let cap = NonZeroUsize::new(max_views).unwrap_or(NonZeroUsize::MIN);
        info!(max_views = cap.get(), "Initializing view registry");
        Self {
            views: Mutex::new(LruCache::new(cap)),
            max_views: cap.get(),
        }
    }

    /// Register a view and return its id.
    pub async fn insert(&self, view: MainView) -> (Uuid, SharedView) {
        let id = Uuid::new_v4();
        let shared = Arc::new(Mutex::new(view));

        let evicted = self.views.lock().await.push(id, Arc::clone(&shared));

        counter!("map_views_created_total").increment(1);
        if let Some((old_id, _)) = evicted {
            counter!("map_views_evicted_total").increment(1);
            debug!(view_id = %old_id, "Evicted least recently used view");
        }

        (id, shared)
    }

    /// Look up a view, marking it as recently used.
    pub async fn get(&self, id: &Uuid) -> Option<SharedView> {
        self.views.lock().await.get(id).cloned()
    }

    pub async fn len(&self) -> usize {
        self.views.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.views.lock().await.is_empty()
    }

    pub fn max_views(&self) -> usize {
        self.max_views
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leaflet_map::TileLayer;
    use spot_store::SpotStore;

    async fn empty_view() -> MainView {
        MainView::open(&SpotStore::new(Vec::new()), &TileLayer::default()).await
    }

    #[tokio::test]
    async fn test_insert_and_get() {
        let registry = ViewRegistry::new(4);
        let (id, shared) = registry.insert(empty_view().await).await;

        let found = registry.get(&id).await.unwrap();
        assert!(Arc::ptr_eq(&found, &shared));
        assert!(registry.get(&Uuid::new_v4()).await.is_none());
    }

    #[tokio::test]
    async fn test_lru_eviction() {
        let registry = ViewRegistry::new(2);
        let (a, _) = registry.insert(empty_view().await).await;
        let (b, _) = registry.insert(empty_view().await).await;

        // Touch `a` so `b` becomes least recently used.
        assert!(registry.get(&a).await.is_some());

        let (c, _) = registry.insert(empty_view().await).await;

        assert_eq!(registry.len().await, 2);
        assert!(registry.get(&a).await.is_some());
        assert!(registry.get(&b).await.is_none());
        assert!(registry.get(&c).await.is_some());
    }

    #[tokio::test]
    async fn test_zero_capacity_clamped() {
        let registry = ViewRegistry::new(0);
        assert_eq!(registry.max_views(), 1);
        assert!(registry.is_empty().await);
    }
}
