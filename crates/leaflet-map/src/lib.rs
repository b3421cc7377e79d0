//! Server-side driver for a Leaflet map running in the browser.
//!
//! The browser widget only understands a handful of commands and reports
//! clicks with primitive values. This crate keeps the server-side view of one
//! map:
//! - [`MapSurface`] is the capability the map issues commands to
//! - [`MarkerHandleMap`] turns a clicked marker's integer id back into its spot
//! - [`LeafletMap`] ties the two together and turns raw client events into
//!   [`MapEvent`]s

pub mod command;
pub mod map;
pub mod markers;
pub mod surface;

pub use command::{ClientEvent, MapCommand};
pub use map::{LeafletMap, MapEvent};
pub use markers::{MarkerHandle, MarkerHandleMap};
pub use surface::{CommandBuffer, MapSurface, TileLayer};
