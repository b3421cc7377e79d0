//! Web service configuration.

use leaflet_map::TileLayer;
use spot_store::DEFAULT_CAPACITY;

/// Views kept before the least recently used one is dropped.
pub const DEFAULT_MAX_VIEWS: usize = 1000;

/// Runtime configuration for the web service.
#[derive(Debug, Clone)]
pub struct WebConfig {
    /// Base tile layer every map view starts with.
    pub tile_layer: TileLayer,

    /// Maximum number of spots in the shared store.
    pub store_capacity: usize,

    /// Maximum number of live map views.
    pub max_views: usize,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            tile_layer: TileLayer::open_street_map(),
            store_capacity: DEFAULT_CAPACITY,
            max_views: DEFAULT_MAX_VIEWS,
        }
    }
}

impl WebConfig {
    /// Build configuration from environment variables.
    ///
    /// - `SPOTS_TILE_URL`: tile URL template
    /// - `SPOTS_TILE_ATTRIBUTION`: attribution HTML
    /// - `SPOTS_TILE_MAX_ZOOM` (default: 13)
    /// - `SPOTS_STORE_CAPACITY` (default: 100)
    /// - `SPOTS_MAX_VIEWS` (default: 1000)
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let url_template = std::env::var("SPOTS_TILE_URL")
            .unwrap_or(defaults.tile_layer.url_template);
        let attribution = std::env::var("SPOTS_TILE_ATTRIBUTION")
            .unwrap_or(defaults.tile_layer.attribution);
        let max_zoom = env_parse("SPOTS_TILE_MAX_ZOOM").unwrap_or(defaults.tile_layer.max_zoom);

        Self {
            tile_layer: TileLayer {
                url_template,
                attribution,
                max_zoom,
            },
            store_capacity: env_parse("SPOTS_STORE_CAPACITY").unwrap_or(defaults.store_capacity),
            max_views: env_parse("SPOTS_MAX_VIEWS").unwrap_or(defaults.max_views),
        }
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|v| v.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = WebConfig::default();
        assert_eq!(config.store_capacity, 100);
        assert_eq!(config.max_views, DEFAULT_MAX_VIEWS);
        assert_eq!(config.tile_layer.max_zoom, 13);
        assert!(config.tile_layer.url_template.contains("openstreetmap"));
    }
}
