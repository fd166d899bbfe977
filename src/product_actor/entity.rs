//! [`ActorRecord`] implementation for [`Product`].
//!
//! Products are cached so order items arriving with a bare product key can be
//! given a name. The catalog only takes whole records and field patches; it has
//! no custom actions.

use super::error::ProductError;
use crate::model::{Price, Product, ProductId};
use async_trait::async_trait;
use record_actor::ActorRecord;

/// Field update for a cached product.
#[derive(Debug, Clone, Default)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub price: Option<Price>,
}

/// The catalog has no record-specific operations.
#[derive(Debug, Clone)]
pub enum ProductAction {}

#[async_trait]
impl ActorRecord for Product {
    type Id = ProductId;
    type Patch = ProductPatch;
    type Action = ProductAction;
    type ActionResult = ();
    type Context = ();
    type Error = ProductError;

    fn id(&self) -> &ProductId {
        &self.id
    }

    async fn apply_patch(&mut self, patch: ProductPatch, _ctx: &()) -> Result<(), ProductError> {
        if let Some(name) = patch.name {
            if name.trim().is_empty() {
                return Err(ProductError::EmptyName(self.id.to_string()));
            }
            self.name = name;
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        Ok(())
    }

    async fn handle_action(&mut self, action: ProductAction, _ctx: &()) -> Result<(), ProductError> {
        match action {}
    }
}
