use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Cents;

pub type OrderId = Uuid;

/// An accepted order. Orders are immutable once placed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub customer_name: String,
    /// Menu item name, valid at the time the order was placed
    pub drink: String,
    /// Unit price captured when the order was placed
    pub price: Cents,
    pub placed_at: DateTime<Utc>,
}

impl Order {
    pub fn new(customer_name: impl Into<String>, drink: impl Into<String>, price: Cents) -> Self {
        Self {
            id: Uuid::new_v4(),
            customer_name: customer_name.into(),
            drink: drink.into(),
            price,
            placed_at: Utc::now(),
        }
    }
}

impl std::fmt::Display for Order {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}", self.customer_name, self.drink)
    }
}
