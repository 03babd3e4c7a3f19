//! Error types.

use thiserror::Error;

/// Errors surfaced by sequencing and delivery planning.
#[derive(Error, Debug)]
pub enum RoutingError {
    #[error("Duplicate stop id: {0}")]
    DuplicateStopId(String),

    #[error("Origin address could not be geocoded: {0}")]
    OriginNotFound(String),

    #[error("Coordinate out of range: lat={lat}, lng={lng}")]
    InvalidCoordinate { lat: f64, lng: f64 },

    #[error("Delivery store error: {0}")]
    Store(String),

    #[cfg(feature = "ffi")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RoutingError>;
