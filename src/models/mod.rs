//! Domain model types for delivery sequencing.
//!
//! Provides geographic points, stops with optionally resolved locations,
//! routes as ordered sequences of stop IDs, and the delivery records that
//! routes are written back to.

mod delivery;
mod geo_point;
mod request;
mod route;
mod stop;

pub use delivery::Delivery;
pub use geo_point::GeoPoint;
pub use request::SequenceRequest;
pub use route::{Route, Visit};
pub use stop::Stop;
