//! Route evaluator that measures leg and total distances.

use std::collections::HashMap;

use serde::Serialize;

use crate::distance::DistanceFunction;
use crate::models::{GeoPoint, Route, Stop};

/// Distance travelled to reach one stop.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Leg {
    /// Stop reached at the end of this leg.
    pub stop_id: String,
    /// Meters from the previous position, `None` if either end is unknown.
    pub distance_m: Option<f64>,
}

/// Per-leg breakdown of a route, starting at the origin.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteSummary {
    /// Legs in visit order.
    pub legs: Vec<Leg>,
    /// Sum of all known legs, in meters.
    pub total_distance_m: f64,
}

impl RouteSummary {
    /// Number of legs whose length could not be measured.
    pub fn num_unknown_legs(&self) -> usize {
        self.legs.iter().filter(|l| l.distance_m.is_none()).count()
    }
}

/// Measures routes over a fixed set of stops.
///
/// The route is one-way: it starts at the origin and ends at the last
/// stop. A leg touching a stop with no location has unknown length, and
/// so does the leg after it.
///
/// # Examples
///
/// ```
/// use assetflow_routing::models::{GeoPoint, Stop};
/// use assetflow_routing::constructive::RouteSequencer;
/// use assetflow_routing::evaluation::RouteEvaluator;
///
/// let origin = GeoPoint::new(0.0, 0.0).unwrap();
/// let stops = vec![
///     Stop::located("A", GeoPoint::new(0.0, 1.0).unwrap()),
///     Stop::new("B", ""),
/// ];
/// let sequencer = RouteSequencer::new();
/// let route = sequencer.sequence(origin, &stops).unwrap();
///
/// let evaluator = RouteEvaluator::new(origin, &stops, sequencer.distance_function());
/// let summary = evaluator.evaluate(&route);
/// assert_eq!(summary.legs.len(), 2);
/// assert_eq!(summary.num_unknown_legs(), 1);
/// assert!(summary.total_distance_m > 111_000.0);
/// ```
pub struct RouteEvaluator<'a, D> {
    origin: GeoPoint,
    locations: HashMap<&'a str, Option<GeoPoint>>,
    distance: &'a D,
}

impl<'a, D: DistanceFunction> RouteEvaluator<'a, D> {
    /// Creates a new evaluator for the given stops.
    pub fn new(origin: GeoPoint, stops: &'a [Stop], distance: &'a D) -> Self {
        Self {
            origin,
            locations: stops.iter().map(|s| (s.id(), s.location())).collect(),
            distance,
        }
    }

    /// Measures each leg of `route`.
    ///
    /// IDs not among the evaluator's stops are treated as unlocated.
    pub fn evaluate(&self, route: &Route) -> RouteSummary {
        let mut legs = Vec::with_capacity(route.len());
        let mut total_distance_m = 0.0;
        let mut current = Some(self.origin);

        for id in route.stop_ids() {
            let next = self.locations.get(id.as_str()).copied().flatten();
            let distance_m = match (current, next) {
                (Some(a), Some(b)) => Some(self.distance.distance(a, b)),
                _ => None,
            };
            if let Some(d) = distance_m {
                total_distance_m += d;
            }
            legs.push(Leg {
                stop_id: id.clone(),
                distance_m,
            });
            current = next;
        }

        RouteSummary {
            legs,
            total_distance_m,
        }
    }

    /// Total known distance of `route`, in meters.
    pub fn total_distance(&self, route: &Route) -> f64 {
        self.evaluate(route).total_distance_m
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constructive::nearest_neighbor;

    fn p(lat: f64, lng: f64) -> GeoPoint {
        GeoPoint::new(lat, lng).expect("valid")
    }

    fn lng_only(a: GeoPoint, b: GeoPoint) -> f64 {
        (a.lng() - b.lng()).abs()
    }

    fn setup() -> Vec<Stop> {
        vec![
            Stop::located("A", p(0.0, 1.0)),
            Stop::located("B", p(0.0, 3.0)),
            Stop::new("X", "unknown"),
            Stop::located("C", p(0.0, 2.0)),
        ]
    }

    #[test]
    fn test_evaluate_empty() {
        let stops: Vec<Stop> = Vec::new();
        let eval = RouteEvaluator::new(p(0.0, 0.0), &stops, &lng_only);
        let summary = eval.evaluate(&Route::new());
        assert!(summary.legs.is_empty());
        assert_eq!(summary.total_distance_m, 0.0);
    }

    #[test]
    fn test_evaluate_sequenced_route() {
        let stops = setup();
        let route = nearest_neighbor(p(0.0, 0.0), &stops, &lng_only).expect("sequenced");
        let eval = RouteEvaluator::new(p(0.0, 0.0), &stops, &lng_only);
        let summary = eval.evaluate(&route);

        // 0 -> A (1) -> C (1) -> B (1) -> X (unknown)
        assert_eq!(summary.total_distance_m, 3.0);
        assert_eq!(summary.num_unknown_legs(), 1);
        assert_eq!(summary.legs[3].stop_id, "X");
        assert_eq!(summary.legs[0].distance_m, Some(1.0));
    }

    #[test]
    fn test_greedy_beats_input_order() {
        let stops = setup();
        let route = nearest_neighbor(p(0.0, 0.0), &stops, &lng_only).expect("sequenced");
        let eval = RouteEvaluator::new(p(0.0, 0.0), &stops, &lng_only);

        let mut input_order = Route::new();
        for s in &stops {
            if s.is_locatable() {
                input_order.push_sequenced(s.id().to_owned());
            }
        }
        // A -> B -> C = 1 + 2 + 1
        assert_eq!(eval.total_distance(&input_order), 4.0);
        assert!(eval.total_distance(&route) < eval.total_distance(&input_order));
    }

    #[test]
    fn test_leg_after_unknown_is_unknown() {
        let stops = setup();
        let mut route = Route::new();
        route.push_deferred("X".to_owned());
        route.push_deferred("A".to_owned());
        route.push_deferred("missing".to_owned());
        let eval = RouteEvaluator::new(p(0.0, 0.0), &stops, &lng_only);
        let summary = eval.evaluate(&route);
        assert_eq!(summary.num_unknown_legs(), 3);
        assert_eq!(summary.total_distance_m, 0.0);
    }
}
