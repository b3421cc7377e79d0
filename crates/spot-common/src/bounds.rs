//! Coordinate pairs and the rectangle a map view is fitted to.

use serde::{Deserialize, Serialize};

use crate::spot::Spot;

/// A latitude/longitude pair in degrees.
///
/// Serialized as a two-element array `[lat, lng]`, which is the form the
/// browser map widget accepts directly.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct LatLng {
    pub latitude: f64,
    pub longitude: f64,
}

impl LatLng {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl From<[f64; 2]> for LatLng {
    fn from([latitude, longitude]: [f64; 2]) -> Self {
        Self::new(latitude, longitude)
    }
}

impl From<LatLng> for [f64; 2] {
    fn from(p: LatLng) -> Self {
        [p.latitude, p.longitude]
    }
}

/// The two corners a map view is zoomed and panned to.
///
/// Serialized as `[[lat1, lng1], [lat2, lng2]]`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "[LatLng; 2]", into = "[LatLng; 2]")]
pub struct FitBounds {
    pub corner1: LatLng,
    pub corner2: LatLng,
}

impl FitBounds {
    pub fn new(corner1: LatLng, corner2: LatLng) -> Self {
        Self { corner1, corner2 }
    }

    /// Corners covering a set of spots.
    ///
    /// Each axis is sorted on its own: `corner1` takes the smallest latitude
    /// and the smallest longitude, `corner2` the largest of each, even when
    /// they come from different spots. With no spots both corners are `(0, 0)`.
    pub fn from_spots<'a, I>(spots: I) -> Self
    where
        I: IntoIterator<Item = &'a Spot>,
    {
        let (mut lats, mut lngs): (Vec<f64>, Vec<f64>) = spots
            .into_iter()
            .map(|s| (s.latitude, s.longitude))
            .unzip();

        lats.sort_by(f64::total_cmp);
        lngs.sort_by(f64::total_cmp);

        let first = |v: &[f64]| v.first().copied().unwrap_or(0.0);
        let last = |v: &[f64]| v.last().copied().unwrap_or(0.0);

        Self {
            corner1: LatLng::new(first(&lats), first(&lngs)),
            corner2: LatLng::new(last(&lats), last(&lngs)),
        }
    }
}

impl From<[LatLng; 2]> for FitBounds {
    fn from([corner1, corner2]: [LatLng; 2]) -> Self {
        Self::new(corner1, corner2)
    }
}

impl From<FitBounds> for [LatLng; 2] {
    fn from(b: FitBounds) -> Self {
        [b.corner1, b.corner2]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_spots_fit_origin() {
        let none: [Spot; 0] = [];
        let bounds = FitBounds::from_spots(&none);
        assert_eq!(bounds.corner1, LatLng::new(0.0, 0.0));
        assert_eq!(bounds.corner2, LatLng::new(0.0, 0.0));
    }

    #[test]
    fn test_two_spots() {
        let spots = [Spot::new(60.0, 21.0, "A"), Spot::new(60.5, 22.0, "B")];
        let bounds = FitBounds::from_spots(&spots);

        assert_eq!(bounds.corner1, LatLng::new(60.0, 21.0));
        assert_eq!(bounds.corner2, LatLng::new(60.5, 22.0));
    }

    #[test]
    fn test_wire_format() {
        let bounds = FitBounds::new(LatLng::new(60.0, 21.0), LatLng::new(60.5, 22.0));
        let json = serde_json::to_string(&bounds).unwrap();
        assert_eq!(json, "[[60.0,21.0],[60.5,22.0]]");
    }
}
