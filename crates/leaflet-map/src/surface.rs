//! The display surface a map issues commands to.

use spot_common::FitBounds;

use crate::command::MapCommand;
use crate::markers::MarkerHandle;

/// OpenStreetMap's public tile server.
pub const OPEN_STREET_MAP_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";

/// Attribution required by the OpenStreetMap tile usage policy.
pub const OPEN_STREET_MAP_ATTRIBUTION: &str =
    "&copy; <a href='https://www.openstreetmap.org/copyright'>OpenStreetMap</a> contributors";

/// Highest zoom level the tile layer offers by default.
pub const DEFAULT_MAX_ZOOM: u8 = 13;

/// Base tile layer configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct TileLayer {
    pub url_template: String,
    pub attribution: String,
    pub max_zoom: u8,
}

impl TileLayer {
    pub fn open_street_map() -> Self {
        Self {
            url_template: OPEN_STREET_MAP_URL.to_string(),
            attribution: OPEN_STREET_MAP_ATTRIBUTION.to_string(),
            max_zoom: DEFAULT_MAX_ZOOM,
        }
    }
}

impl Default for TileLayer {
    fn default() -> Self {
        Self::open_street_map()
    }
}

/// Something that can render a map: a browser widget, a test double, ...
pub trait MapSurface {
    /// Set the base tile layer.
    fn set_base_layer(&mut self, layer: &TileLayer);

    /// Render a marker tagged with `handle` so clicks can be traced back.
    fn add_marker(&mut self, latitude: f64, longitude: f64, label: &str, handle: MarkerHandle);

    /// Zoom and pan to show the rectangle.
    fn fit_bounds(&mut self, bounds: FitBounds);
}

/// Surface that queues commands for the browser to replay.
///
/// The web page fetches the queued commands in the response to whatever
/// request produced them.
#[derive(Debug, Default)]
pub struct CommandBuffer {
    pending: Vec<MapCommand>,
}

impl CommandBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take all queued commands, oldest first.
    pub fn drain(&mut self) -> Vec<MapCommand> {
        std::mem::take(&mut self.pending)
    }

    pub fn pending(&self) -> &[MapCommand] {
        &self.pending
    }
}

impl MapSurface for CommandBuffer {
    fn set_base_layer(&mut self, layer: &TileLayer) {
        self.pending.push(MapCommand::AddTileLayer {
            url_template: layer.url_template.clone(),
            attribution: layer.attribution.clone(),
            max_zoom: layer.max_zoom,
        });
    }

    fn add_marker(&mut self, latitude: f64, longitude: f64, label: &str, handle: MarkerHandle) {
        self.pending.push(MapCommand::AddMarker {
            latitude,
            longitude,
            label: label.to_string(),
            id: handle,
        });
    }

    fn fit_bounds(&mut self, bounds: FitBounds) {
        self.pending.push(MapCommand::FitBounds { bounds });
    }
}
