//! Batch address resolution.

use tracing::{debug, warn};

use super::Geocoder;
use crate::models::Stop;

/// Geocodes `(id, address)` records into [`Stop`]s, preserving order.
///
/// Blank addresses are left unresolved without calling the geocoder.
/// Lookups run one at a time, so a [`ThrottledGeocoder`](super::ThrottledGeocoder)
/// sees a steady stream. Every record yields a stop; failures only leave
/// `location` empty.
///
/// # Examples
///
/// ```
/// use assetflow_routing::models::GeoPoint;
/// use assetflow_routing::geocode::{resolve_stops, StaticGeocoder};
///
/// let geocoder = StaticGeocoder::new().with_entry("1 Main St", GeoPoint::new(0.0, 1.0).unwrap());
/// let stops = resolve_stops([("A", "1 Main St"), ("B", "")], &geocoder);
/// assert!(stops[0].is_locatable());
/// assert!(!stops[1].is_locatable());
/// ```
pub fn resolve_stops<'a, I, G>(records: I, geocoder: &G) -> Vec<Stop>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
    G: Geocoder + ?Sized,
{
    let stops: Vec<Stop> = records
        .into_iter()
        .map(|(id, address)| {
            let stop = Stop::new(id, address.trim());
            if stop.address().is_empty() {
                warn!(stop_id = id, "stop has no address");
                return stop;
            }
            match geocoder.geocode(stop.address()) {
                Some(location) => stop.with_location(location),
                None => {
                    warn!(stop_id = id, address = stop.address(), "address not found");
                    stop
                }
            }
        })
        .collect();

    debug!(
        total = stops.len(),
        resolved = stops.iter().filter(|s| s.is_locatable()).count(),
        "stops resolved"
    );
    stops
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GeoPoint;
    use std::cell::RefCell;

    struct RecordingGeocoder {
        calls: RefCell<Vec<String>>,
    }

    impl Geocoder for RecordingGeocoder {
        fn geocode(&self, address: &str) -> Option<GeoPoint> {
            self.calls.borrow_mut().push(address.to_owned());
            if address.starts_with("known") {
                GeoPoint::new(1.0, 2.0)
            } else {
                None
            }
        }
    }

    #[test]
    fn test_resolve_preserves_order_and_count() {
        let g = RecordingGeocoder {
            calls: RefCell::new(Vec::new()),
        };
        let stops = resolve_stops(
            [("1", "known a"), ("2", "lost"), ("3", "  known b  ")],
            &g,
        );
        let ids: Vec<&str> = stops.iter().map(Stop::id).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
        assert!(stops[0].is_locatable());
        assert!(!stops[1].is_locatable());
        assert!(stops[2].is_locatable());
        assert_eq!(stops[2].address(), "known b");
    }

    #[test]
    fn test_resolve_skips_blank_addresses() {
        let g = RecordingGeocoder {
            calls: RefCell::new(Vec::new()),
        };
        let stops = resolve_stops([("1", ""), ("2", "   "), ("3", "known")], &g);
        assert_eq!(stops.len(), 3);
        assert_eq!(*g.calls.borrow(), vec!["known".to_owned()]);
    }

    #[test]
    fn test_resolve_empty() {
        let g = RecordingGeocoder {
            calls: RefCell::new(Vec::new()),
        };
        let stops = resolve_stops(std::iter::empty(), &g);
        assert!(stops.is_empty());
        assert!(g.calls.borrow().is_empty());
    }
}
