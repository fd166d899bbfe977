//! # Product Actor
//!
//! Caches the product catalog.
//!
//! - [`entity`] - [`ActorRecord`](record_actor::ActorRecord) implementation for [`Product`]
//! - [`error`] - [`ProductError`]
//! - [`new()`] - Factory function that creates the actor and its client
//!
//! ```rust
//! use order_board::clients::ProductClient;
//! use order_board::model::{Price, Product};
//! use order_board::product_actor;
//! use record_actor::ActorClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = product_actor::new(8);
//!     let client = ProductClient::new(client);
//!     tokio::spawn(actor.run(()));
//!
//!     client.upsert(Product::new("p1", "Fries", Price::from_cents(350), "c1")).await?;
//!     let fries = client.get("p1".into()).await?;
//!     assert_eq!(fries.map(|p| p.name), Some("Fries".to_string()));
//!     Ok(())
//! }
//! ```

pub mod entity;
pub mod error;

pub use entity::*;
pub use error::*;

use crate::model::Product;
use record_actor::{RecordActor, RecordClient};

/// Creates a new Product actor and its client.
pub fn new(buffer_size: usize) -> (RecordActor<Product>, RecordClient<Product>) {
    RecordActor::new(buffer_size)
}
