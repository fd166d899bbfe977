//! Error types for the Product actor.

use thiserror::Error;

/// Errors that can occur during product operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProductError {
    /// The requested product is not cached.
    #[error("Product not found: {0}")]
    NotFound(String),

    /// A patch tried to blank out the product name.
    #[error("Product {0} must keep a non-empty name")]
    EmptyName(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
