//! Delivery planning over an external store.
//!
//! - [`DeliveryStore`] — pending deliveries in, visit orders out
//! - [`InMemoryDeliveryStore`] — `Vec`-backed store
//! - [`DeliveryPlanner`] — origin resolution, geocoding, sequencing, persistence

mod planner;
mod store;

pub use planner::{DeliveryPlanner, PlannerConfig};
pub use store::{DeliveryStore, InMemoryDeliveryStore};
