//! [`ActorRecord`] implementation for [`OrderItem`].
//!
//! The actor's context is the [`ProductClient`]: items that arrive with a bare
//! product key get the cached product inlined on upsert, so the board can sort
//! and label them by name.

use super::actions::{OrderItemAction, StatusChange};
use super::error::OrderItemError;
use crate::clients::ProductClient;
use crate::model::{OrderItem, OrderItemId, OrderItemStatus, Price, Relation};
use crate::policy;
use async_trait::async_trait;
use record_actor::{ActorClient, ActorRecord};
use tracing::debug;

/// Field update for a cached order item.
#[derive(Debug, Clone, Default)]
pub struct OrderItemPatch {
    pub status: Option<OrderItemStatus>,
    pub price: Option<Price>,
}

impl OrderItem {
    fn transition(&mut self, to: OrderItemStatus) -> StatusChange {
        let from = std::mem::replace(&mut self.status, to);
        StatusChange {
            id: self.id.clone(),
            from,
            to,
        }
    }
}

#[async_trait]
impl ActorRecord for OrderItem {
    type Id = OrderItemId;
    type Patch = OrderItemPatch;
    type Action = OrderItemAction;
    type ActionResult = StatusChange;
    type Context = ProductClient;
    type Error = OrderItemError;

    fn id(&self) -> &OrderItemId {
        &self.id
    }

    /// Inlines the product when only its key was sent and the catalog knows it.
    /// An unknown product keeps the bare key; the item then sorts with an empty name.
    async fn on_upsert(&mut self, products: &ProductClient) -> Result<(), OrderItemError> {
        let Relation::Id(product_id) = &self.product else {
            return Ok(());
        };
        let product_id = product_id.clone();

        match products.get(product_id.clone()).await {
            Ok(Some(product)) => {
                debug!(item = %self.id, product = %product_id, "Product inlined");
                self.product = Relation::expanded(product);
            }
            Ok(None) => {
                debug!(item = %self.id, product = %product_id, "Product not cached");
            }
            Err(e) => return Err(OrderItemError::ProductLookup(e.to_string())),
        }
        Ok(())
    }

    async fn apply_patch(
        &mut self,
        patch: OrderItemPatch,
        _ctx: &ProductClient,
    ) -> Result<(), OrderItemError> {
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: OrderItemAction,
        _ctx: &ProductClient,
    ) -> Result<StatusChange, OrderItemError> {
        match action {
            OrderItemAction::Advance => {
                let to = policy::next(self.status)
                    .ok_or_else(|| OrderItemError::AlreadyPaid(self.id.to_string()))?;
                Ok(self.transition(to))
            }
            OrderItemAction::SetStatus(to) => Ok(self.transition(to)),
        }
    }
}
