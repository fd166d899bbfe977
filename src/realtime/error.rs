//! Error types for realtime ingest.

use crate::order_item_actor::OrderItemError;
use crate::product_actor::ProductError;
use thiserror::Error;

/// Why a realtime frame could not be applied.
///
/// A `Malformed` or `InvalidKey` frame has not touched the cache; record
/// validation happens for the whole batch before anything is stored.
#[derive(Debug, Error)]
pub enum RealtimeError {
    /// Not valid JSON, or a record that does not fit the model (e.g. an unknown status).
    #[error("Malformed realtime message: {0}")]
    Malformed(#[from] serde_json::Error),

    /// A `delete` entry that is neither a string nor a number.
    #[error("Invalid record key in delete event: {0}")]
    InvalidKey(String),

    #[error(transparent)]
    OrderItem(#[from] OrderItemError),

    #[error(transparent)]
    Product(#[from] ProductError),
}
