//! Wire types exchanged with the browser widget.
//!
//! Outbound: [`MapCommand`], tagged by `"command"`.
//! Inbound: [`ClientEvent`], tagged by `"type"`.

use serde::{Deserialize, Deserializer, Serialize};
use spot_common::FitBounds;

use crate::markers::MarkerHandle;

/// A command for the browser map to execute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "kebab-case")]
pub enum MapCommand {
    /// Add a layer of map tiles. Nothing is visible until one is added.
    AddTileLayer {
        url_template: String,
        attribution: String,
        max_zoom: u8,
    },

    /// Render a marker; clicks on it are reported back with `id`.
    AddMarker {
        latitude: f64,
        longitude: f64,
        label: String,
        id: MarkerHandle,
    },

    /// Zoom and pan so the rectangle is visible.
    FitBounds { bounds: FitBounds },
}

/// A signal raised by the browser map.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ClientEvent {
    /// The map surface itself was clicked.
    MapClick { lat: f64, lng: f64 },

    /// A marker was clicked. An id that is missing or could never have been
    /// issued (negative, fractional, not a number) reads as `None`.
    MarkerClick {
        #[serde(default, deserialize_with = "lenient_handle")]
        id: Option<MarkerHandle>,
    },
}

fn lenient_handle<'de, D>(deserializer: D) -> Result<Option<MarkerHandle>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| v.as_u64()).map(MarkerHandle))
}
