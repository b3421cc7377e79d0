//! The named geographic point users drop on the map.

use serde::{Deserialize, Serialize};

use crate::bounds::LatLng;
use crate::error::SpotError;

/// A named fishing spot.
///
/// Coordinates are WGS84 degrees. Spots carry no identity of their own; they
/// are shared as `Arc<Spot>` and compared by pointer when identity matters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Spot {
    pub latitude: f64,
    pub longitude: f64,
    pub name: String,
}

impl Spot {
    pub fn new(latitude: f64, longitude: f64, name: impl Into<String>) -> Self {
        Self {
            latitude,
            longitude,
            name: name.into(),
        }
    }

    /// Position of this spot as a coordinate pair.
    pub fn position(&self) -> LatLng {
        LatLng::new(self.latitude, self.longitude)
    }

    /// Check that this spot can be drawn and fitted on the map.
    pub fn validate(&self) -> Result<(), SpotError> {
        validate_coordinates(self.latitude, self.longitude)
    }
}

/// Latitude must be finite and within [-90, 90]. Longitude only has to be
/// finite; Leaflet reports wrapped longitudes past +-180.
pub fn validate_coordinates(latitude: f64, longitude: f64) -> Result<(), SpotError> {
    if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
        return Err(SpotError::invalid_parameter(
            "latitude",
            format!("{} is not within [-90, 90]", latitude),
        ));
    }
    if !longitude.is_finite() {
        return Err(SpotError::invalid_parameter(
            "longitude",
            format!("{} is not a finite number", longitude),
        ));
    }
    Ok(())
}

impl std::fmt::Display for Spot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({:.6}, {:.6})", self.name, self.latitude, self.longitude)
    }
}
