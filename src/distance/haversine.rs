//! Great-circle distance.

use crate::models::GeoPoint;

/// Mean Earth radius in meters used by web mapping SDKs (WGS-84 semi-major axis).
pub const EARTH_RADIUS_M: f64 = 6_378_137.0;

/// Surface distance between two points, in meters.
///
/// Implementations must be total: every pair of valid [`GeoPoint`]s yields
/// a distance. Returned values should be non-negative; a NaN sorts after
/// every finite distance when the sequencer compares candidates.
pub trait DistanceFunction {
    /// Distance from `a` to `b` in meters.
    fn distance(&self, a: GeoPoint, b: GeoPoint) -> f64;
}

impl<F> DistanceFunction for F
where
    F: Fn(GeoPoint, GeoPoint) -> f64,
{
    fn distance(&self, a: GeoPoint, b: GeoPoint) -> f64 {
        self(a, b)
    }
}

/// Haversine great-circle distance on a sphere of radius [`EARTH_RADIUS_M`].
///
/// # Examples
///
/// ```
/// use assetflow_routing::models::GeoPoint;
/// use assetflow_routing::distance::{DistanceFunction, Haversine};
///
/// let a = GeoPoint::new(0.0, 0.0).unwrap();
/// let b = GeoPoint::new(0.0, 1.0).unwrap();
/// let d = Haversine.distance(a, b);
/// assert!((d - 111_319.49).abs() < 1.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Haversine;

impl DistanceFunction for Haversine {
    fn distance(&self, a: GeoPoint, b: GeoPoint) -> f64 {
        let lat1 = a.lat().to_radians();
        let lat2 = b.lat().to_radians();
        let dlat = lat2 - lat1;
        let dlng = (b.lng() - a.lng()).to_radians();

        let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlng / 2.0).sin().powi(2);
        // Rounding can push h a hair above 1 for antipodal points.
        2.0 * EARTH_RADIUS_M * h.sqrt().min(1.0).asin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(lat: f64, lng: f64) -> GeoPoint {
        GeoPoint::new(lat, lng).expect("valid")
    }

    #[test]
    fn test_haversine_zero() {
        assert_eq!(Haversine.distance(p(45.0, 45.0), p(45.0, 45.0)), 0.0);
    }

    #[test]
    fn test_haversine_one_degree_equator() {
        let d = Haversine.distance(p(0.0, 0.0), p(0.0, 1.0));
        let expected = EARTH_RADIUS_M * 1.0_f64.to_radians();
        assert!((d - expected).abs() < 1e-6);
    }

    #[test]
    fn test_haversine_symmetric() {
        let a = p(37.5665, 126.9780);
        let b = p(35.1796, 129.0756);
        assert!((Haversine.distance(a, b) - Haversine.distance(b, a)).abs() < 1e-6);
    }

    #[test]
    fn test_haversine_antipodal() {
        let d = Haversine.distance(p(0.0, 0.0), p(0.0, 180.0));
        assert!((d - std::f64::consts::PI * EARTH_RADIUS_M).abs() < 1e-3);
    }

    #[test]
    fn test_haversine_seoul_busan() {
        // Roughly 325 km apart.
        let d = Haversine.distance(p(37.5665, 126.9780), p(35.1796, 129.0756));
        assert!(d > 310_000.0 && d < 340_000.0);
    }

    #[test]
    fn test_closure_distance() {
        let manhattan = |a: GeoPoint, b: GeoPoint| (a.lat() - b.lat()).abs() + (a.lng() - b.lng()).abs();
        assert_eq!(manhattan.distance(p(0.0, 0.0), p(1.0, 2.0)), 3.0);
    }
}
