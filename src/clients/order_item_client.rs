//! # OrderItem Client
//!
//! The API the kitchen display and the point-of-sale screen work against: the
//! cached items in display order, and the status changes staff make.
//!
//! Items and products arrive on separate subscriptions in no particular order,
//! so the board takes product names from the catalog as it is when the board is
//! read, not from the copy inlined when the item was stored.
use crate::clients::ProductClient;
use crate::model::{OrderId, OrderItem, OrderItemId, OrderItemStatus, Product, ProductId, Relation};
use crate::order_item_actor::{OrderItemAction, OrderItemError, OrderItemPatch, StatusChange};
use crate::policy;
use async_trait::async_trait;
use record_actor::{ActorClient, FrameworkError, RecordClient};
use std::collections::HashMap;
use tracing::{debug, info, instrument};

/// Client for interacting with the OrderItem actor.
#[derive(Clone)]
pub struct OrderItemClient {
    inner: RecordClient<OrderItem>,
    products: ProductClient,
}

impl OrderItemClient {
    /// `products` is the catalog the board takes product names from.
    pub fn new(inner: RecordClient<OrderItem>, products: ProductClient) -> Self {
        Self { inner, products }
    }

    /// Inserts or replaces an item. The stored copy has its product inlined when
    /// the catalog knows it.
    #[instrument(skip(self, item), fields(item_id = %item.id))]
    pub async fn upsert(&self, item: OrderItem) -> Result<OrderItem, OrderItemError> {
        debug!(?item, "upsert called");
        self.inner.upsert(item).await.map_err(Self::map_error)
    }

    /// Every cached item in display order.
    #[instrument(skip(self))]
    pub async fn board(&self) -> Result<Vec<OrderItem>, OrderItemError> {
        let mut items = self.list().await?;
        self.resolve_products(&mut items).await?;
        policy::sort_for_display(&mut items);
        Ok(items)
    }

    /// The items of one order in display order.
    #[instrument(skip(self))]
    pub async fn board_for_order(&self, order: &OrderId) -> Result<Vec<OrderItem>, OrderItemError> {
        let mut items = self.list().await?;
        items.retain(|item| item.order_id() == order);
        self.resolve_products(&mut items).await?;
        policy::sort_for_display(&mut items);
        Ok(items)
    }

    /// Replaces each item's product with the current catalog entry. Items whose
    /// product is not in the catalog keep what they have.
    async fn resolve_products(&self, items: &mut [OrderItem]) -> Result<(), OrderItemError> {
        let catalog: HashMap<ProductId, Product> = self
            .products
            .list()
            .await
            .map_err(|e| OrderItemError::ProductLookup(e.to_string()))?
            .into_iter()
            .map(|product| (product.id.clone(), product))
            .collect();

        for item in items.iter_mut() {
            if let Some(product) = catalog.get(item.product.key()) {
                item.product = Relation::expanded(product.clone());
            }
        }
        Ok(())
    }

    /// Moves an item to the next workflow stage.
    #[instrument(skip(self))]
    pub async fn advance(&self, id: OrderItemId) -> Result<StatusChange, OrderItemError> {
        let change = self
            .inner
            .perform_action(id, OrderItemAction::Advance)
            .await
            .map_err(Self::map_error)?;
        info!(item_id = %change.id, from = %change.from, to = %change.to, "Advanced");
        Ok(change)
    }

    /// Sets an item to any status, earlier stages included.
    #[instrument(skip(self))]
    pub async fn set_status(
        &self,
        id: OrderItemId,
        status: OrderItemStatus,
    ) -> Result<StatusChange, OrderItemError> {
        let change = self
            .inner
            .perform_action(id, OrderItemAction::SetStatus(status))
            .await
            .map_err(Self::map_error)?;
        info!(item_id = %change.id, from = %change.from, to = %change.to, "Status set");
        Ok(change)
    }

    /// Applies a field update reported by the backend.
    #[instrument(skip(self))]
    pub async fn patch(
        &self,
        id: OrderItemId,
        patch: OrderItemPatch,
    ) -> Result<OrderItem, OrderItemError> {
        self.inner.patch(id, patch).await.map_err(Self::map_error)
    }
}

#[async_trait]
impl ActorClient<OrderItem> for OrderItemClient {
    type Error = OrderItemError;

    fn inner(&self) -> &RecordClient<OrderItem> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => OrderItemError::NotFound(id),
            other => other
                .into_record_error::<OrderItemError>()
                .unwrap_or_else(|e| OrderItemError::ActorCommunicationError(e.to_string())),
        }
    }
}
