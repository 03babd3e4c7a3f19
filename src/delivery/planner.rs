//! End-to-end route planning for one courier.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::DeliveryStore;
use crate::constructive::RouteSequencer;
use crate::distance::{DistanceFunction, Haversine};
use crate::error::{Result, RoutingError};
use crate::geocode::{resolve_stops, Geocoder, ThrottleConfig, ThrottledGeocoder};
use crate::models::{GeoPoint, Route};

/// Planner settings.
///
/// # Examples
///
/// ```
/// use assetflow_routing::delivery::PlannerConfig;
///
/// let config: PlannerConfig =
///     serde_json::from_str(r#"{"origin_address": "HQ", "throttle": {"min_interval_ms": 500}}"#).unwrap();
/// assert_eq!(config.origin_address.as_deref(), Some("HQ"));
/// assert_eq!(config.throttle.min_interval_ms, 500);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Default start address; the depot point is used when absent.
    pub origin_address: Option<String>,
    /// Spacing between geocoding requests.
    pub throttle: ThrottleConfig,
}

/// Geocodes a courier's pending deliveries, orders them, and writes the
/// visit order back to the store.
///
/// The origin is resolved first. If a start address is given and cannot
/// be geocoded, planning stops with [`RoutingError::OriginNotFound`] before
/// the store is read or written.
///
/// # Examples
///
/// ```
/// use assetflow_routing::delivery::{DeliveryPlanner, InMemoryDeliveryStore};
/// use assetflow_routing::geocode::StaticGeocoder;
/// use assetflow_routing::models::{Delivery, GeoPoint};
///
/// let geocoder = StaticGeocoder::new()
///     .with_entry("far", GeoPoint::new(0.0, 3.0).unwrap())
///     .with_entry("near", GeoPoint::new(0.0, 1.0).unwrap());
/// let depot = GeoPoint::new(0.0, 0.0).unwrap();
/// let planner = DeliveryPlanner::new(geocoder, depot);
///
/// let mut store = InMemoryDeliveryStore::new(vec![
///     Delivery::new("D1", "far", "kim"),
///     Delivery::new("D2", "near", "kim"),
/// ]);
/// let route = planner.plan(&mut store, "kim", None).unwrap();
/// assert_eq!(route.stop_ids(), ["D2", "D1"]);
/// assert_eq!(store.get("D1").unwrap().visit_order, Some(2));
/// ```
#[derive(Debug)]
pub struct DeliveryPlanner<G, D = Haversine> {
    geocoder: G,
    sequencer: RouteSequencer<D>,
    depot: GeoPoint,
    origin_address: Option<String>,
}

impl<G: Geocoder> DeliveryPlanner<G> {
    /// Creates a planner starting from `depot` with great-circle distances.
    pub fn new(geocoder: G, depot: GeoPoint) -> Self {
        Self {
            geocoder,
            sequencer: RouteSequencer::new(),
            depot,
            origin_address: None,
        }
    }
}

impl<G: Geocoder> DeliveryPlanner<ThrottledGeocoder<G>> {
    /// Creates a planner whose geocoder is throttled per `config`.
    pub fn from_config(geocoder: G, depot: GeoPoint, config: PlannerConfig) -> Self {
        Self {
            geocoder: ThrottledGeocoder::new(geocoder, config.throttle),
            sequencer: RouteSequencer::new(),
            depot,
            origin_address: config.origin_address,
        }
    }
}

impl<G: Geocoder, D: DistanceFunction> DeliveryPlanner<G, D> {
    /// Replaces the sequencer, e.g. to use a road-distance function.
    pub fn with_sequencer<E: DistanceFunction>(
        self,
        sequencer: RouteSequencer<E>,
    ) -> DeliveryPlanner<G, E> {
        DeliveryPlanner {
            geocoder: self.geocoder,
            sequencer,
            depot: self.depot,
            origin_address: self.origin_address,
        }
    }

    /// The geocoder in use.
    pub fn geocoder(&self) -> &G {
        &self.geocoder
    }

    /// Resolves the route origin.
    ///
    /// `start_address` overrides the configured origin address; with
    /// neither, the depot is used. Blank addresses count as absent.
    pub fn resolve_origin(&self, start_address: Option<&str>) -> Result<GeoPoint> {
        fn non_blank(a: &str) -> Option<&str> {
            Some(a.trim()).filter(|a| !a.is_empty())
        }

        let address = start_address
            .and_then(non_blank)
            .or_else(|| self.origin_address.as_deref().and_then(non_blank));

        match address {
            None => Ok(self.depot),
            Some(address) => self.geocoder.geocode(address).ok_or_else(|| {
                warn!(address, "origin address not found");
                RoutingError::OriginNotFound(address.to_owned())
            }),
        }
    }

    /// Plans the route for `assignee` and persists each delivery's visit order.
    pub fn plan<S: DeliveryStore + ?Sized>(
        &self,
        store: &mut S,
        assignee: &str,
        start_address: Option<&str>,
    ) -> Result<Route> {
        let origin = self.resolve_origin(start_address)?;
        let deliveries = store.pending_deliveries(assignee)?;

        let stops = resolve_stops(
            deliveries.iter().map(|d| (d.id.as_str(), d.address.as_str())),
            &self.geocoder,
        );
        let route = self.sequencer.sequence(origin, &stops)?;

        let orders: Vec<(String, usize)> = route
            .visits()
            .map(|v| (v.stop_id.to_owned(), v.visit_order))
            .collect();
        store.save_visit_orders(&orders)?;

        info!(
            assignee,
            stops = route.len(),
            manual = route.deferred().len(),
            "delivery route planned"
        );
        Ok(route)
    }
}
