//! Rate-limited geocoding.
//!
//! External geocoding APIs reject bursts, so lookups are spaced by a fixed
//! minimum interval. The throttle wraps any [`Geocoder`] and is independent
//! of sequencing.

use std::sync::{Mutex, PoisonError};
use std::thread;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::Geocoder;
use crate::models::GeoPoint;

/// Spacing between consecutive geocoding requests.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use assetflow_routing::geocode::ThrottleConfig;
///
/// let config: ThrottleConfig = serde_json::from_str("{}").unwrap();
/// assert_eq!(config.min_interval(), Duration::from_millis(200));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThrottleConfig {
    /// Minimum milliseconds between the start of one lookup and the next.
    pub min_interval_ms: u64,
}

impl Default for ThrottleConfig {
    fn default() -> Self {
        Self {
            min_interval_ms: 200,
        }
    }
}

impl ThrottleConfig {
    /// The interval as a [`Duration`].
    pub fn min_interval(&self) -> Duration {
        Duration::from_millis(self.min_interval_ms)
    }
}

/// A [`Geocoder`] decorator that spaces lookups by a minimum interval.
///
/// The calling thread sleeps until the interval since the previous lookup
/// has elapsed. The last-call instant sits behind a mutex, so a shared
/// throttle serializes lookups across threads.
///
/// # Examples
///
/// ```
/// use assetflow_routing::models::GeoPoint;
/// use assetflow_routing::geocode::{Geocoder, StaticGeocoder, ThrottleConfig, ThrottledGeocoder};
///
/// let table = StaticGeocoder::new().with_entry("Depot", GeoPoint::new(0.0, 0.0).unwrap());
/// let geocoder = ThrottledGeocoder::new(table, ThrottleConfig { min_interval_ms: 1 });
/// assert!(geocoder.geocode("Depot").is_some());
/// ```
#[derive(Debug)]
pub struct ThrottledGeocoder<G> {
    inner: G,
    min_interval: Duration,
    last_call: Mutex<Option<Instant>>,
}

impl<G: Geocoder> ThrottledGeocoder<G> {
    /// Wraps `inner` with the given spacing.
    pub fn new(inner: G, config: ThrottleConfig) -> Self {
        Self {
            inner,
            min_interval: config.min_interval(),
            last_call: Mutex::new(None),
        }
    }

    /// The wrapped geocoder.
    pub fn inner(&self) -> &G {
        &self.inner
    }

    /// Unwraps the decorator.
    pub fn into_inner(self) -> G {
        self.inner
    }
}

impl<G: Geocoder> Geocoder for ThrottledGeocoder<G> {
    fn geocode(&self, address: &str) -> Option<GeoPoint> {
        let mut last_call = self.last_call.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(last) = *last_call {
            let elapsed = last.elapsed();
            if elapsed < self.min_interval {
                let wait = self.min_interval - elapsed;
                trace!(wait_ms = wait.as_millis() as u64, "throttling geocode");
                thread::sleep(wait);
            }
        }
        *last_call = Some(Instant::now());
        self.inner.geocode(address)
    }
}
