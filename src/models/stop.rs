//! Delivery stop type.

use serde::{Deserialize, Serialize};

use super::GeoPoint;

/// A single delivery destination within one sequencing run.
///
/// `location` is present only when the address was geocoded successfully
/// for this run. Stops without a location are never dropped; the sequencer
/// places them after every located stop.
///
/// # Examples
///
/// ```
/// use assetflow_routing::models::{GeoPoint, Stop};
///
/// let located = Stop::new("DLV-1", "1 Main St").with_location(GeoPoint::new(0.0, 1.0).unwrap());
/// assert!(located.is_locatable());
///
/// let unknown = Stop::new("DLV-2", "");
/// assert!(!unknown.is_locatable());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stop {
    id: String,
    #[serde(default)]
    address: String,
    #[serde(default)]
    location: Option<GeoPoint>,
}

impl Stop {
    /// Creates a stop with no resolved location.
    pub fn new(id: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            address: address.into(),
            location: None,
        }
    }

    /// Creates a stop already placed at `location`.
    pub fn located(id: impl Into<String>, location: GeoPoint) -> Self {
        Self::new(id, String::new()).with_location(location)
    }

    /// Sets the resolved location.
    pub fn with_location(mut self, location: GeoPoint) -> Self {
        self.location = Some(location);
        self
    }

    /// Identifier, unique within a sequencing run.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Free-text delivery address.
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Resolved location, if geocoding succeeded.
    pub fn location(&self) -> Option<GeoPoint> {
        self.location
    }

    /// Returns `true` if this stop can be sequenced spatially.
    pub fn is_locatable(&self) -> bool {
        self.location.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stop_new() {
        let s = Stop::new("A", "12 Elm Rd");
        assert_eq!(s.id(), "A");
        assert_eq!(s.address(), "12 Elm Rd");
        assert!(s.location().is_none());
    }

    #[test]
    fn test_stop_located() {
        let p = GeoPoint::new(10.0, 20.0).expect("valid");
        let s = Stop::located("B", p);
        assert_eq!(s.location(), Some(p));
        assert!(s.address().is_empty());
    }

    #[test]
    fn test_stop_deserialize_defaults() {
        let s: Stop = serde_json::from_str(r#"{"id": "C"}"#).expect("valid");
        assert_eq!(s.id(), "C");
        assert!(!s.is_locatable());

        let s: Stop = serde_json::from_str(
            r#"{"id": "D", "address": "x", "location": {"lat": 1.0, "lng": 2.0}}"#,
        )
        .expect("valid");
        assert!(s.is_locatable());
    }
}
