//! Fixed address table.

use std::collections::HashMap;

use super::Geocoder;
use crate::models::GeoPoint;

/// A geocoder backed by an in-memory address table.
///
/// Lookups ignore surrounding whitespace and ASCII case.
///
/// # Examples
///
/// ```
/// use assetflow_routing::models::GeoPoint;
/// use assetflow_routing::geocode::{Geocoder, StaticGeocoder};
///
/// let geocoder = StaticGeocoder::new()
///     .with_entry("HQ, 1 Main St", GeoPoint::new(0.0, 0.0).unwrap());
/// assert!(geocoder.geocode("  hq, 1 main st ").is_some());
/// assert!(geocoder.geocode("elsewhere").is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct StaticGeocoder {
    entries: HashMap<String, GeoPoint>,
}

impl StaticGeocoder {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an entry, replacing any previous one for the same address.
    pub fn insert(&mut self, address: &str, location: GeoPoint) {
        self.entries.insert(normalize(address), location);
    }

    /// Adds an entry (builder form).
    pub fn with_entry(mut self, address: &str, location: GeoPoint) -> Self {
        self.insert(address, location);
        self
    }

    /// Number of known addresses.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Geocoder for StaticGeocoder {
    fn geocode(&self, address: &str) -> Option<GeoPoint> {
        self.entries.get(&normalize(address)).copied()
    }
}

impl<'a> FromIterator<(&'a str, GeoPoint)> for StaticGeocoder {
    fn from_iter<I: IntoIterator<Item = (&'a str, GeoPoint)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (address, location) in iter {
            table.insert(address, location);
        }
        table
    }
}

fn normalize(address: &str) -> String {
    address.trim().to_ascii_lowercase()
}
