//! Nearest-neighbor delivery sequencing.
//!
//! Builds a single route greedily: starting from the origin, always visit
//! the nearest unvisited stop. Stops without a resolved location cannot be
//! placed spatially and are appended after every located stop, in input
//! order, so an operator can spot them at the tail of the route.
//!
//! # Complexity
//!
//! O(n²) where n = number of located stops. A courier's daily list is tens
//! of stops, so no spatial index is used.

use std::collections::HashSet;

use tracing::{debug, trace};

use crate::distance::{DistanceFunction, DistanceMatrix, Haversine};
use crate::error::{Result, RoutingError};
use crate::models::{GeoPoint, Route, Stop};

/// Orders delivery stops with the nearest-neighbor heuristic.
///
/// Holds only the injected [`DistanceFunction`]; every call to
/// [`sequence`](Self::sequence) is independent, so one sequencer can serve
/// many couriers concurrently when `D: Sync`.
///
/// # Examples
///
/// ```
/// use assetflow_routing::models::{GeoPoint, Stop};
/// use assetflow_routing::constructive::RouteSequencer;
///
/// let origin = GeoPoint::new(0.0, 0.0).unwrap();
/// let stops = vec![
///     Stop::located("A", GeoPoint::new(0.0, 1.0).unwrap()),
///     Stop::located("B", GeoPoint::new(0.0, 3.0).unwrap()),
///     Stop::located("C", GeoPoint::new(0.0, 2.0).unwrap()),
/// ];
///
/// let route = RouteSequencer::new().sequence(origin, &stops).unwrap();
/// assert_eq!(route.stop_ids(), ["A", "C", "B"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RouteSequencer<D = Haversine> {
    distance: D,
}

impl RouteSequencer {
    /// Creates a sequencer measuring great-circle distance.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<D: DistanceFunction> RouteSequencer<D> {
    /// Creates a sequencer measuring legs with `distance`.
    pub fn with_distance(distance: D) -> Self {
        Self { distance }
    }

    /// The distance function in use.
    pub fn distance_function(&self) -> &D {
        &self.distance
    }

    /// Computes a visiting order over `stops` starting from `origin`.
    ///
    /// See [`nearest_neighbor`].
    pub fn sequence(&self, origin: GeoPoint, stops: &[Stop]) -> Result<Route> {
        nearest_neighbor(origin, stops, &self.distance)
    }
}

/// Sequences `stops` from `origin` using the nearest-neighbor heuristic.
///
/// At each step the remaining located stop closest to the current position
/// is visited next; on equal distances the one earliest in input order
/// wins. Stops without a location follow in input order. The result is a
/// permutation of the input IDs.
///
/// # Errors
///
/// [`RoutingError::DuplicateStopId`] if two stops share an ID.
///
/// # Examples
///
/// ```
/// use assetflow_routing::models::{GeoPoint, Stop};
/// use assetflow_routing::distance::Haversine;
/// use assetflow_routing::constructive::nearest_neighbor;
///
/// let origin = GeoPoint::new(0.0, 0.0).unwrap();
/// let route = nearest_neighbor(origin, &[], &Haversine).unwrap();
/// assert!(route.is_empty());
/// ```
pub fn nearest_neighbor<D: DistanceFunction>(
    origin: GeoPoint,
    stops: &[Stop],
    distance: &D,
) -> Result<Route> {
    let mut seen = HashSet::with_capacity(stops.len());
    for stop in stops {
        if !seen.insert(stop.id()) {
            return Err(RoutingError::DuplicateStopId(stop.id().to_owned()));
        }
    }

    let (located, deferred): (Vec<&Stop>, Vec<&Stop>) =
        stops.iter().partition(|s| s.is_locatable());

    let mut route = Route::new();

    if !located.is_empty() {
        // Index 0 = origin, 1..=n = located stops in input order.
        let points: Vec<GeoPoint> = std::iter::once(origin)
            .chain(located.iter().filter_map(|s| s.location()))
            .collect();
        let distances = DistanceMatrix::from_points(&points, distance);

        let mut remaining: Vec<usize> = (1..points.len()).collect();
        let mut current = 0;

        while let Some(pos) = distances.nearest_neighbor(current, &remaining) {
            let next = remaining.remove(pos);
            trace!(
                stop_id = located[next - 1].id(),
                leg_m = distances.get(current, next),
                "next stop"
            );
            route.push_sequenced(located[next - 1].id().to_owned());
            current = next;
        }
    }

    for stop in deferred {
        route.push_deferred(stop.id().to_owned());
    }

    debug!(
        sequenced = route.num_sequenced(),
        deferred = route.deferred().len(),
        "route sequenced"
    );

    Ok(route)
}
