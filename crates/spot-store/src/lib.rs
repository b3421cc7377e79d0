//! Shared in-memory storage for fishing spots.
//!
//! Provides:
//! - [`SpotStore`], the bounded list every map view reads from and appends to
//! - [`SeedConfig`], the spots a fresh process starts with

pub mod seed;
pub mod store;

pub use seed::{default_seed_spots, SeedConfig};
pub use store::{SpotStore, DEFAULT_CAPACITY};
