use crate::model::{
    Keyed, Order, OrderId, OrderItemId, OrderItemStatus, Price, Product, Relation, User,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One product line of a customer order (a row of `order_items`).
///
/// Created by the backend when an order is placed; afterwards only its `status`
/// changes. This application never deletes items, it only drops them from its
/// cache when the backend reports a deletion.
///
/// # Record Actor
/// This struct implements [`ActorRecord`](record_actor::ActorRecord). See
/// [`order_item_actor`](crate::order_item_actor) for the patch and action types.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub id: OrderItemId,
    pub status: OrderItemStatus,
    pub date_created: DateTime<Utc>,
    pub product: Relation<Product>,
    /// Price at the time of ordering, which may differ from the product's current price.
    pub price: Price,
    pub order: Relation<Order>,
    #[serde(default)]
    pub user_created: Option<Relation<User>>,
}

impl OrderItem {
    /// Creates a pending item stamped with the current time.
    pub fn new(
        id: impl Into<OrderItemId>,
        product: Relation<Product>,
        order: impl Into<OrderId>,
        price: Price,
    ) -> Self {
        Self {
            id: id.into(),
            status: OrderItemStatus::Pending,
            date_created: Utc::now(),
            product,
            price,
            order: Relation::Id(order.into()),
            user_created: None,
        }
    }

    pub fn with_status(mut self, status: OrderItemStatus) -> Self {
        self.status = status;
        self
    }

    /// Name of the ordered product, when the relation carries the product record.
    pub fn product_name(&self) -> Option<&str> {
        self.product.as_expanded().map(|product| product.name.as_str())
    }

    pub fn order_id(&self) -> &OrderId {
        self.order.key()
    }
}

impl Keyed for OrderItem {
    type Key = OrderItemId;

    fn key(&self) -> &OrderItemId {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAYLOAD: &str = r#"{
        "id": "a1b2",
        "status": "ready-for-serving",
        "user_created": "u-7",
        "date_created": "2024-05-04T18:30:12.000Z",
        "product": {
            "id": "p-1",
            "status": "published",
            "name": "Pommes",
            "price": "3.50",
            "category": "c-1",
            "ingredient": null,
            "ingredient_quantity": null
        },
        "price": "3.50",
        "order": "o-9"
    }"#;

    #[test]
    fn deserializes_an_expanded_backend_row() {
        let item: OrderItem = serde_json::from_str(PAYLOAD).unwrap();
        assert_eq!(item.id, OrderItemId::from("a1b2"));
        assert_eq!(item.status, OrderItemStatus::ReadyForServing);
        assert_eq!(item.product_name(), Some("Pommes"));
        assert_eq!(item.price.cents(), 350);
        assert_eq!(item.order_id(), &OrderId::from("o-9"));
        assert_eq!(
            item.user_created.as_ref().map(|u| u.key().as_str()),
            Some("u-7")
        );
        assert_eq!(item.date_created.to_rfc3339(), "2024-05-04T18:30:12+00:00");
    }

    #[test]
    fn unknown_status_rejects_the_whole_record() {
        let tampered = PAYLOAD.replace("ready-for-serving", "in-the-oven");
        let err = serde_json::from_str::<OrderItem>(&tampered).unwrap_err();
        assert!(err.to_string().contains("in-the-oven"));
    }

    #[test]
    fn bare_product_reference_has_no_name() {
        let item = OrderItem::new("i1", Relation::Id("p-1".into()), "o-1", Price::from_cents(100));
        assert_eq!(item.status, OrderItemStatus::Pending);
        assert_eq!(item.product_name(), None);
    }
}
