//! Delivery persistence boundary.

use crate::error::{Result, RoutingError};
use crate::models::Delivery;

/// Source of pending deliveries and sink for computed visit orders.
///
/// The backing database is external; implementations translate its
/// failures into [`RoutingError::Store`].
pub trait DeliveryStore {
    /// Pending deliveries assigned to `assignee`, in the store's order.
    fn pending_deliveries(&self, assignee: &str) -> Result<Vec<Delivery>>;

    /// Records the 1-based visit order of each `(delivery id, order)` pair.
    fn save_visit_orders(&mut self, orders: &[(String, usize)]) -> Result<()>;
}

/// A [`DeliveryStore`] over an in-memory list.
///
/// Saving is all-or-nothing: an unknown delivery ID rejects the whole batch.
///
/// # Examples
///
/// ```
/// use assetflow_routing::delivery::{DeliveryStore, InMemoryDeliveryStore};
/// use assetflow_routing::models::Delivery;
///
/// let mut store = InMemoryDeliveryStore::new(vec![
///     Delivery::new("D1", "1 Main St", "kim"),
///     Delivery::new("D2", "2 Main St", "lee"),
/// ]);
/// assert_eq!(store.pending_deliveries("kim").unwrap().len(), 1);
///
/// store.save_visit_orders(&[("D1".to_owned(), 1)]).unwrap();
/// assert_eq!(store.get("D1").unwrap().visit_order, Some(1));
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryDeliveryStore {
    deliveries: Vec<Delivery>,
}

impl InMemoryDeliveryStore {
    /// Creates a store holding `deliveries`.
    pub fn new(deliveries: Vec<Delivery>) -> Self {
        Self { deliveries }
    }

    /// Looks up a delivery by ID.
    pub fn get(&self, id: &str) -> Option<&Delivery> {
        self.deliveries.iter().find(|d| d.id == id)
    }

    /// All deliveries, in insertion order.
    pub fn deliveries(&self) -> &[Delivery] {
        &self.deliveries
    }
}

impl DeliveryStore for InMemoryDeliveryStore {
    fn pending_deliveries(&self, assignee: &str) -> Result<Vec<Delivery>> {
        Ok(self
            .deliveries
            .iter()
            .filter(|d| d.assignee == assignee)
            .cloned()
            .collect())
    }

    fn save_visit_orders(&mut self, orders: &[(String, usize)]) -> Result<()> {
        let mut targets = Vec::with_capacity(orders.len());
        for (id, order) in orders {
            let idx = self
                .deliveries
                .iter()
                .position(|d| &d.id == id)
                .ok_or_else(|| RoutingError::Store(format!("Unknown delivery: {id}")))?;
            targets.push((idx, *order));
        }
        for (idx, order) in targets {
            self.deliveries[idx].visit_order = Some(order);
        }
        Ok(())
    }
}
