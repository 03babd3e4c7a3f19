//! Delivery record type.

use serde::{Deserialize, Serialize};

/// A pending delivery as supplied by a [`DeliveryStore`](crate::delivery::DeliveryStore).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Delivery {
    /// Record identifier.
    pub id: String,
    /// Free-text destination address.
    pub address: String,
    /// Courier the delivery is assigned to.
    pub assignee: String,
    /// 1-based position in the courier's last computed route.
    #[serde(default)]
    pub visit_order: Option<usize>,
}

impl Delivery {
    /// Creates a delivery with no visit order yet.
    pub fn new(
        id: impl Into<String>,
        address: impl Into<String>,
        assignee: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            address: address.into(),
            assignee: assignee.into(),
            visit_order: None,
        }
    }
}
