//! # assetflow-routing
//!
//! Delivery route sequencing for the AssetFlow dashboard: orders a
//! courier's stops from an origin with the nearest-neighbor heuristic,
//! with geocoding and distance measurement supplied as pluggable
//! capabilities.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (GeoPoint, Stop, Route, Delivery)
//! - [`distance`] — Distance functions (great-circle) and distance matrix
//! - [`geocode`] — Geocoder trait, lookup table, throttling, batch resolution
//! - [`constructive`] — Nearest-neighbor route sequencing
//! - [`evaluation`] — Per-leg and total route distance
//! - [`delivery`] — Delivery store boundary and end-to-end planner
//!
//! ## Feature flags
//!
//! - `ffi` — C ABI taking and returning JSON
//! - `wasm` — `wasm-bindgen` exports for the browser dashboard

pub mod constructive;
pub mod delivery;
pub mod distance;
pub mod error;
pub mod evaluation;
pub mod geocode;
pub mod models;

#[cfg(feature = "ffi")]
pub mod ffi;
#[cfg(feature = "wasm")]
pub mod wasm;

pub use error::{Result, RoutingError};
