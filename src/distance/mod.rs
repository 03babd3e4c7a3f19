//! Distance functions and matrices.
//!
//! Provides the [`DistanceFunction`] capability, a great-circle default
//! ([`Haversine`]), and a dense distance matrix for cached lookups.

mod haversine;
mod matrix;

pub use haversine::{DistanceFunction, Haversine, EARTH_RADIUS_M};
pub use matrix::DistanceMatrix;
