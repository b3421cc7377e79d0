//! Server-side handle on one browser map.

use spot_common::{FitBounds, Spot};
use std::sync::Arc;
use tracing::debug;

use crate::command::ClientEvent;
use crate::markers::{MarkerHandle, MarkerHandleMap};
use crate::surface::{MapSurface, TileLayer};

/// What a client event means to the rest of the application.
#[derive(Debug, Clone)]
pub enum MapEvent {
    /// The map was clicked at a point with no marker.
    MapClicked { latitude: f64, longitude: f64 },

    /// A marker was clicked. `spot` is `None` when the marker's handle is
    /// unknown to this map; callers should ignore such clicks.
    MarkerClicked { spot: Option<Arc<Spot>> },
}

/// A map view: the surface it draws on plus the markers it has drawn.
#[derive(Debug)]
pub struct LeafletMap<S: MapSurface> {
    surface: S,
    markers: MarkerHandleMap,
}

impl<S: MapSurface> LeafletMap<S> {
    /// Create a map and set its base layer.
    pub fn new(mut surface: S, layer: &TileLayer) -> Self {
        surface.set_base_layer(layer);
        Self {
            surface,
            markers: MarkerHandleMap::new(),
        }
    }

    /// Add a marker for `spot` and return the handle it was tagged with.
    pub fn add_marker(&mut self, spot: Arc<Spot>) -> MarkerHandle {
        let handle = self.markers.register(Arc::clone(&spot));
        self.surface
            .add_marker(spot.latitude, spot.longitude, &spot.name, handle);
        handle
    }

    /// Add markers for all spots, then fit the view around them.
    ///
    /// Returns the rectangle the view was fitted to.
    pub fn add_markers_and_zoom(&mut self, spots: &[Arc<Spot>]) -> FitBounds {
        for spot in spots {
            self.add_marker(Arc::clone(spot));
        }

        let bounds = FitBounds::from_spots(spots.iter().map(|s| &**s));
        self.fit_bounds(bounds);
        bounds
    }

    /// Zoom and pan to the rectangle.
    pub fn fit_bounds(&mut self, bounds: FitBounds) {
        self.surface.fit_bounds(bounds);
    }

    /// Spot behind a clicked marker.
    pub fn resolve_click(&self, handle: Option<MarkerHandle>) -> Option<Arc<Spot>> {
        let spot = handle.and_then(|h| self.markers.resolve(h));
        if spot.is_none() {
            debug!(handle = ?handle, "Click on unknown marker ignored");
        }
        spot
    }

    /// Translate a raw client event into a [`MapEvent`].
    pub fn handle_event(&self, event: ClientEvent) -> MapEvent {
        match event {
            ClientEvent::MapClick { lat, lng } => MapEvent::MapClicked {
                latitude: lat,
                longitude: lng,
            },
            ClientEvent::MarkerClick { id } => MapEvent::MarkerClicked {
                spot: self.resolve_click(id),
            },
        }
    }

    pub fn markers(&self) -> &MarkerHandleMap {
        &self.markers
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::MapCommand;
    use crate::surface::CommandBuffer;

    #[test]
    fn test_new_sets_base_layer_first() {
        let map = LeafletMap::new(CommandBuffer::new(), &TileLayer::default());
        let pending = map.surface().pending();

        assert_eq!(pending.len(), 1);
        assert!(matches!(pending[0], MapCommand::AddTileLayer { .. }));
    }

    #[test]
    fn test_map_click_passes_coordinates_through() {
        let map = LeafletMap::new(CommandBuffer::new(), &TileLayer::default());
        let event = map.handle_event(ClientEvent::MapClick { lat: 60.3, lng: 21.1 });

        match event {
            MapEvent::MapClicked {
                latitude,
                longitude,
            } => {
                assert_eq!(latitude, 60.3);
                assert_eq!(longitude, 21.1);
            }
            other => panic!("unexpected event: {:?}", other),
        }
    }

    #[test]
    fn test_missing_marker_id_resolves_to_none() {
        let mut map = LeafletMap::new(CommandBuffer::new(), &TileLayer::default());
        map.add_marker(Arc::new(Spot::new(1.0, 1.0, "a")));

        let event = map.handle_event(ClientEvent::MarkerClick { id: None });
        assert!(matches!(event, MapEvent::MarkerClicked { spot: None }));
    }
}
