//! Tests for fitting a map view around a set of spots.

use spot_common::{FitBounds, LatLng, Spot};

// ============================================================================
// from_spots tests
// ============================================================================

#[test]
fn test_single_spot_collapses_to_point() {
    let spots = [Spot::new(60.465071, 22.302923, "Halistenkoski")];
    let bounds = FitBounds::from_spots(&spots);

    assert_eq!(bounds.corner1, LatLng::new(60.465071, 22.302923));
    assert_eq!(bounds.corner2, LatLng::new(60.465071, 22.302923));
}

#[test]
fn test_seed_spots() {
    let spots = [
        Spot::new(60.465071, 22.302923, "Halistenkoski"),
        Spot::new(60.479928, 21.328347, "Kustavi"),
        Spot::new(60.124169, 21.906335, "Kirjais"),
    ];
    let bounds = FitBounds::from_spots(&spots);

    assert_eq!(bounds.corner1, LatLng::new(60.124169, 21.328347));
    assert_eq!(bounds.corner2, LatLng::new(60.479928, 22.302923));
}

#[test]
fn test_axes_are_sorted_independently() {
    // The min latitude and min longitude come from different spots, so the
    // corners match no single input point.
    let spots = [
        Spot::new(10.0, 50.0, "north-west"),
        Spot::new(-10.0, 80.0, "south-east"),
        Spot::new(0.0, 40.0, "middle-west"),
    ];
    let bounds = FitBounds::from_spots(&spots);

    assert_eq!(bounds.corner1, LatLng::new(-10.0, 40.0));
    assert_eq!(bounds.corner2, LatLng::new(10.0, 80.0));
    assert!(!spots.iter().any(|s| s.position() == bounds.corner1));
    assert!(!spots.iter().any(|s| s.position() == bounds.corner2));
}

#[test]
fn test_input_order_does_not_matter() {
    let a = Spot::new(1.0, 2.0, "a");
    let b = Spot::new(-3.0, 7.5, "b");
    let c = Spot::new(4.25, -1.0, "c");

    let forward = FitBounds::from_spots([&a, &b, &c]);
    let backward = FitBounds::from_spots([&c, &b, &a]);

    assert_eq!(forward, backward);
}

#[test]
fn test_negative_coordinates() {
    let spots = [
        Spot::new(-33.9, 151.2, "Sydney"),
        Spot::new(-41.3, 174.8, "Wellington"),
    ];
    let bounds = FitBounds::from_spots(&spots);

    assert_eq!(bounds.corner1, LatLng::new(-41.3, 151.2));
    assert_eq!(bounds.corner2, LatLng::new(-33.9, 174.8));
}

// ============================================================================
// Serialization tests
// ============================================================================

#[test]
fn test_latlng_serializes_as_pair() {
    let json = serde_json::to_string(&LatLng::new(60.5, 22.0)).unwrap();
    assert_eq!(json, "[60.5,22.0]");
}

#[test]
fn test_fit_bounds_deserializes_from_nested_arrays() {
    let bounds: FitBounds = serde_json::from_str("[[1.5,2.5],[3.5,4.5]]").unwrap();
    assert_eq!(bounds.corner1, LatLng::new(1.5, 2.5));
    assert_eq!(bounds.corner2, LatLng::new(3.5, 4.5));
}
