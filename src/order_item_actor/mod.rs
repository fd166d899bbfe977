//! # OrderItem Actor
//!
//! Caches order items and performs their status changes.
//!
//! - [`entity`] - [`ActorRecord`](record_actor::ActorRecord) implementation for [`OrderItem`]
//! - [`actions`] - [`OrderItemAction`] and its [`StatusChange`] result
//! - [`error`] - [`OrderItemError`]
//! - [`new()`] - Factory function that creates the actor and its client
//!
//! The actor runs with a [`ProductClient`](crate::clients::ProductClient) as
//! context, which it uses to inline products into items that reference them by
//! key:
//!
//! ```rust,ignore
//! let (actor, items) = order_item_actor::new(32);
//! tokio::spawn(actor.run(product_client.clone()));
//! ```

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use entity::*;
pub use error::*;

use crate::model::OrderItem;
use record_actor::{RecordActor, RecordClient};

/// Creates a new OrderItem actor and its client.
pub fn new(buffer_size: usize) -> (RecordActor<OrderItem>, RecordClient<OrderItem>) {
    RecordActor::new(buffer_size)
}
