//! Address geocoding.
//!
//! The sequencer only consumes resolved coordinates; this module supplies
//! the capability that produces them and the glue that turns delivery
//! addresses into [`Stop`](crate::models::Stop)s.
//!
//! - [`Geocoder`] — address to coordinate lookup
//! - [`StaticGeocoder`] — fixed lookup table
//! - [`ThrottledGeocoder`] — rate-limiting decorator
//! - [`resolve_stops`] — geocode a batch of `(id, address)` records

mod resolve;
mod table;
mod throttle;

pub use resolve::resolve_stops;
pub use table::StaticGeocoder;
pub use throttle::{ThrottleConfig, ThrottledGeocoder};

use crate::models::GeoPoint;

/// Maps a free-text address to a coordinate.
///
/// Returns `None` when the address cannot be resolved. Implementations
/// handle their own transport errors and retries; a failed lookup is just
/// `None` to callers.
pub trait Geocoder {
    /// Resolves `address`, or `None` if it is unknown.
    fn geocode(&self, address: &str) -> Option<GeoPoint>;
}

impl<G: Geocoder + ?Sized> Geocoder for &G {
    fn geocode(&self, address: &str) -> Option<GeoPoint> {
        (**self).geocode(address)
    }
}

impl<G: Geocoder + ?Sized> Geocoder for Box<G> {
    fn geocode(&self, address: &str) -> Option<GeoPoint> {
        (**self).geocode(address)
    }
}
