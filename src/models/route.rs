//! Route and visit types.

use serde::Serialize;

/// One stop's position within a route.
///
/// `visit_order` is 1-based: the first stop after the origin has order 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Visit<'a> {
    /// Stop ID being visited.
    pub stop_id: &'a str,
    /// 1-based position in the route.
    pub visit_order: usize,
    /// `false` for stops appended without a known location.
    pub sequenced: bool,
}

/// An ordered sequence of stop identifiers, starting after the origin.
///
/// The first [`num_sequenced`](Route::num_sequenced) IDs were ordered
/// spatially; the rest had no resolved location and trail in their input
/// order, marking them for manual placement.
///
/// # Examples
///
/// ```
/// use assetflow_routing::models::{GeoPoint, Stop};
/// use assetflow_routing::constructive::RouteSequencer;
///
/// let origin = GeoPoint::new(0.0, 0.0).unwrap();
/// let stops = vec![
///     Stop::located("A", GeoPoint::new(0.0, 2.0).unwrap()),
///     Stop::new("B", "unknown"),
///     Stop::located("C", GeoPoint::new(0.0, 1.0).unwrap()),
/// ];
/// let route = RouteSequencer::new().sequence(origin, &stops).unwrap();
/// assert_eq!(route.stop_ids(), ["C", "A", "B"]);
/// assert_eq!(route.visit_order("A"), Some(2));
/// assert_eq!(route.num_sequenced(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Route {
    #[serde(rename = "order")]
    stop_ids: Vec<String>,
    num_sequenced: usize,
}

impl Route {
    /// Creates an empty route.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a spatially sequenced stop.
    ///
    /// Must not follow a deferred stop.
    pub(crate) fn push_sequenced(&mut self, stop_id: String) {
        debug_assert_eq!(self.num_sequenced, self.stop_ids.len());
        self.stop_ids.push(stop_id);
        self.num_sequenced += 1;
    }

    /// Appends a stop with no known location.
    pub(crate) fn push_deferred(&mut self, stop_id: String) {
        self.stop_ids.push(stop_id);
    }

    /// Returns the stop IDs in visit order.
    pub fn stop_ids(&self) -> &[String] {
        &self.stop_ids
    }

    /// Number of stops in this route.
    pub fn len(&self) -> usize {
        self.stop_ids.len()
    }

    /// Returns `true` if this route has no stops.
    pub fn is_empty(&self) -> bool {
        self.stop_ids.is_empty()
    }

    /// Number of leading stops that were ordered by distance.
    pub fn num_sequenced(&self) -> usize {
        self.num_sequenced
    }

    /// Stops that need manual placement, in input order.
    pub fn deferred(&self) -> &[String] {
        &self.stop_ids[self.num_sequenced..]
    }

    /// 1-based visit order of the given stop, if it is on this route.
    pub fn visit_order(&self, stop_id: &str) -> Option<usize> {
        self.stop_ids
            .iter()
            .position(|id| id == stop_id)
            .map(|i| i + 1)
    }

    /// Iterates the visits in order.
    pub fn visits(&self) -> impl Iterator<Item = Visit<'_>> + '_ {
        self.stop_ids.iter().enumerate().map(move |(i, id)| Visit {
            stop_id: id,
            visit_order: i + 1,
            sequenced: i < self.num_sequenced,
        })
    }

    /// Consumes the route, returning the ordered IDs.
    pub fn into_stop_ids(self) -> Vec<String> {
        self.stop_ids
    }
}
