//! Geographic coordinate type.

use serde::{Deserialize, Serialize};

/// A point on the Earth's surface in decimal degrees.
///
/// Latitude lies in `[-90, 90]` and longitude in `[-180, 180]`. Both are
/// finite; the constructor rejects anything else.
///
/// # Examples
///
/// ```
/// use assetflow_routing::models::GeoPoint;
///
/// let office = GeoPoint::new(37.5665, 126.9780).unwrap();
/// assert_eq!(office.lat(), 37.5665);
/// assert!(GeoPoint::new(91.0, 0.0).is_none());
/// assert!(GeoPoint::new(0.0, f64::NAN).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawGeoPoint", into = "RawGeoPoint")]
pub struct GeoPoint {
    lat: f64,
    lng: f64,
}

impl GeoPoint {
    /// Creates a new point.
    ///
    /// Returns `None` if either coordinate is non-finite or out of range.
    pub fn new(lat: f64, lng: f64) -> Option<Self> {
        if !lat.is_finite() || !lng.is_finite() {
            return None;
        }
        if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lng) {
            return None;
        }
        Some(Self { lat, lng })
    }

    /// Latitude in degrees.
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude in degrees.
    pub fn lng(&self) -> f64 {
        self.lng
    }
}

/// Unchecked wire shape; validated on the way in.
#[derive(Serialize, Deserialize)]
struct RawGeoPoint {
    lat: f64,
    lng: f64,
}

impl TryFrom<RawGeoPoint> for GeoPoint {
    type Error = crate::RoutingError;

    fn try_from(raw: RawGeoPoint) -> Result<Self, Self::Error> {
        GeoPoint::new(raw.lat, raw.lng).ok_or(crate::RoutingError::InvalidCoordinate {
            lat: raw.lat,
            lng: raw.lng,
        })
    }
}

impl From<GeoPoint> for RawGeoPoint {
    fn from(p: GeoPoint) -> Self {
        Self {
            lat: p.lat,
            lng: p.lng,
        }
    }
}
