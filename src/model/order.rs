use crate::model::{Keyed, OrderId, OrderItem, Relation, User};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A customer order for one table (a row of `orders`). Passed through unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub date_created: DateTime<Utc>,
    #[serde(default)]
    pub user_created: Option<Relation<User>>,
    pub table: String,
    #[serde(default)]
    pub items: Vec<Relation<OrderItem>>,
}

impl Keyed for Order {
    type Key = OrderId;

    fn key(&self) -> &OrderId {
        &self.id
    }
}
