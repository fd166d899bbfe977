//! Applies realtime frames to the record caches.

use super::error::RealtimeError;
use super::message::{ChangeKind, Collection, RealtimeMessage, SubscriptionEvent};
use crate::clients::{OrderItemClient, ProductClient};
use crate::model::{OrderItem, Product};
use crate::order_item_actor::OrderItemError;
use crate::product_actor::ProductError;
use record_actor::ActorClient;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, info, instrument, warn};

/// What one frame changed in the caches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestReport {
    pub upserted: usize,
    pub removed: usize,
}

/// Feeds realtime frames into the order item and product actors.
#[derive(Clone)]
pub struct RealtimeIngest {
    items: OrderItemClient,
    products: ProductClient,
    default_collection: Collection,
}

impl RealtimeIngest {
    /// `default_collection` is used for frames that do not name their collection.
    pub fn new(
        items: OrderItemClient,
        products: ProductClient,
        default_collection: Collection,
    ) -> Self {
        Self {
            items,
            products,
            default_collection,
        }
    }

    /// Parses one frame of the feed and applies it.
    ///
    /// Non-subscription frames and frames for collections the board does not
    /// cache are ignored and yield an empty report.
    #[instrument(skip(self, text))]
    pub async fn apply_message(&self, text: &str) -> Result<IngestReport, RealtimeError> {
        let message: RealtimeMessage = serde_json::from_str(text)?;
        let RealtimeMessage::Subscription(event) = message else {
            debug!("Ignoring non-subscription frame");
            return Ok(IngestReport::default());
        };
        self.apply_event(event).await
    }

    pub async fn apply_event(&self, event: SubscriptionEvent) -> Result<IngestReport, RealtimeError> {
        let collection = match event.collection.as_deref() {
            None => self.default_collection,
            Some(name) => match name.parse::<Collection>() {
                Ok(collection) => collection,
                Err(e) => {
                    warn!(error = %e, uid = ?event.uid, "Skipping event");
                    return Ok(IngestReport::default());
                }
            },
        };
        debug!(%collection, kind = ?event.event, size = event.data.len(), uid = ?event.uid, "Event");

        let report = match (event.event, collection) {
            (ChangeKind::Delete, Collection::OrderItems) => self.remove_items(event.data).await?,
            (ChangeKind::Delete, Collection::Products) => self.remove_products(event.data).await?,
            (_, Collection::OrderItems) => self.upsert_items(event.data).await?,
            (_, Collection::Products) => self.upsert_products(event.data).await?,
        };
        info!(%collection, upserted = report.upserted, removed = report.removed, "Applied");
        Ok(report)
    }

    async fn upsert_items(&self, data: Vec<Value>) -> Result<IngestReport, RealtimeError> {
        let items: Vec<OrderItem> = decode_all(data)?;
        let upserted = items.len();
        for item in items {
            self.items.upsert(item).await?;
        }
        Ok(IngestReport { upserted, removed: 0 })
    }

    async fn upsert_products(&self, data: Vec<Value>) -> Result<IngestReport, RealtimeError> {
        let products: Vec<Product> = decode_all(data)?;
        let upserted = products.len();
        for product in products {
            self.products.upsert(product).await?;
        }
        Ok(IngestReport { upserted, removed: 0 })
    }

    async fn remove_items(&self, data: Vec<Value>) -> Result<IngestReport, RealtimeError> {
        let mut removed = 0;
        for id in keys(data)? {
            match self.items.remove(id.into()).await {
                Ok(_) => removed += 1,
                Err(OrderItemError::NotFound(id)) => debug!(item_id = %id, "Delete for uncached item"),
                Err(e) => return Err(e.into()),
            }
        }
        Ok(IngestReport { upserted: 0, removed })
    }

    async fn remove_products(&self, data: Vec<Value>) -> Result<IngestReport, RealtimeError> {
        let mut removed = 0;
        for id in keys(data)? {
            match self.products.remove(id.into()).await {
                Ok(_) => removed += 1,
                Err(ProductError::NotFound(id)) => debug!(product_id = %id, "Delete for uncached product"),
                Err(e) => return Err(e.into()),
            }
        }
        Ok(IngestReport { upserted: 0, removed })
    }
}

fn decode_all<T: DeserializeOwned>(data: Vec<Value>) -> Result<Vec<T>, serde_json::Error> {
    data.into_iter().map(serde_json::from_value).collect()
}

/// Keys of a delete event; the backend sends them as strings or plain numbers.
fn keys(data: Vec<Value>) -> Result<Vec<String>, RealtimeError> {
    data.into_iter()
        .map(|key| match key {
            Value::String(s) => Ok(s),
            Value::Number(n) => Ok(n.to_string()),
            other => Err(RealtimeError::InvalidKey(other.to_string())),
        })
        .collect()
}
