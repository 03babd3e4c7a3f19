//! Serialized sequencing request.

use serde::Deserialize;

use super::{GeoPoint, Route, Stop};
use crate::constructive::RouteSequencer;
use crate::error::Result;

/// A self-contained sequencing request, as received over the FFI and WASM
/// boundaries.
///
/// Coordinates must already be resolved; stops without `location` trail
/// the route.
///
/// # Examples
///
/// ```
/// use assetflow_routing::models::SequenceRequest;
///
/// let request: SequenceRequest = serde_json::from_str(r#"{
///     "origin": {"lat": 0.0, "lng": 0.0},
///     "stops": [
///         {"id": "A", "location": {"lat": 0.0, "lng": 5.0}},
///         {"id": "B", "address": "unknown"},
///         {"id": "C", "location": {"lat": 0.0, "lng": 1.0}}
///     ]
/// }"#).unwrap();
/// let route = request.run().unwrap();
/// assert_eq!(route.stop_ids(), ["C", "A", "B"]);
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SequenceRequest {
    /// Starting point.
    pub origin: GeoPoint,
    /// Stops to order.
    #[serde(default)]
    pub stops: Vec<Stop>,
}

impl SequenceRequest {
    /// Sequences the stops with great-circle distances.
    pub fn run(&self) -> Result<Route> {
        RouteSequencer::new().sequence(self.origin, &self.stops)
    }
}
