//! Error types for the OrderItem actor.

use thiserror::Error;

/// Errors that can occur during order item operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderItemError {
    /// The requested order item is not cached.
    #[error("Order item not found: {0}")]
    NotFound(String),

    /// `Advance` was requested on an item that has reached the end of the workflow.
    #[error("Order item {0} is already paid")]
    AlreadyPaid(String),

    /// The product actor could not be asked for the item's product.
    #[error("Product lookup failed: {0}")]
    ProductLookup(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
