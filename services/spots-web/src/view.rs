//! The single page of the application, as seen from the server.
//!
//! A `MainView` exists per open browser page. It owns that page's map (and so
//! its marker handles) and knows how to react to the page's clicks.

use leaflet_map::{ClientEvent, CommandBuffer, LeafletMap, MapCommand, MapEvent, TileLayer};
use spot_common::Spot;
use spot_store::SpotStore;
use std::sync::Arc;

/// What the page should do in response to a client event.
#[derive(Debug, Clone)]
pub enum ViewReaction {
    /// Ask the user to name the clicked point.
    PromptForName {
        latitude: f64,
        longitude: f64,
        prompt: String,
    },

    /// Tell the user which marker they clicked.
    Notify { spot: Arc<Spot>, message: String },

    /// Nothing to do (e.g. a click on a marker this view does not know).
    Ignore,
}

/// Server-side state of one open page.
pub struct MainView {
    map: LeafletMap<CommandBuffer>,
}

impl MainView {
    /// Open a view showing every spot currently in the store.
    pub async fn open(store: &SpotStore, layer: &TileLayer) -> Self {
        let mut map = LeafletMap::new(CommandBuffer::new(), layer);
        map.add_markers_and_zoom(&store.all().await);
        Self { map }
    }

    /// Commands queued for the browser since the last call.
    pub fn take_commands(&mut self) -> Vec<MapCommand> {
        self.map.surface_mut().drain()
    }

    /// React to a click reported by the page.
    pub fn handle_event(&self, event: ClientEvent) -> ViewReaction {
        match self.map.handle_event(event) {
            MapEvent::MapClicked {
                latitude,
                longitude,
            } => ViewReaction::PromptForName {
                latitude,
                longitude,
                prompt: format!(
                    "You selected the following coordinates: {:.6}, {:.6}",
                    latitude, longitude
                ),
            },
            MapEvent::MarkerClicked { spot: Some(spot) } => {
                let message = format!("User clicked on the marker {}", spot.name);
                ViewReaction::Notify { spot, message }
            }
            MapEvent::MarkerClicked { spot: None } => ViewReaction::Ignore,
        }
    }

    /// Save a named point to the shared store and show it on this view.
    ///
    /// Other open views pick the spot up when they are next opened.
    pub async fn save_spot(
        &mut self,
        store: &SpotStore,
        name: &str,
        latitude: f64,
        longitude: f64,
    ) -> Arc<Spot> {
        let spot = store.add(Spot::new(latitude, longitude, name)).await;
        self.map.add_marker(Arc::clone(&spot));
        spot
    }

    /// Number of markers this view has drawn.
    pub fn marker_count(&self) -> usize {
        self.map.markers().len()
    }
}
