//! Common types shared across the fishing spots services.

pub mod bounds;
pub mod error;
pub mod spot;

pub use bounds::{FitBounds, LatLng};
pub use error::SpotError;
pub use spot::{validate_coordinates, Spot};
