//! # Product Client
//!
//! High-level API for the product catalog cache.
use crate::model::Product;
use crate::product_actor::ProductError;
use async_trait::async_trait;
use record_actor::{ActorClient, FrameworkError, RecordClient};
use tracing::{debug, instrument};

/// Client for interacting with the Product actor.
#[derive(Clone)]
pub struct ProductClient {
    inner: RecordClient<Product>,
}

impl ProductClient {
    pub fn new(inner: RecordClient<Product>) -> Self {
        Self { inner }
    }

    /// Inserts or replaces a catalog entry.
    #[instrument(skip(self, product), fields(product_id = %product.id))]
    pub async fn upsert(&self, product: Product) -> Result<Product, ProductError> {
        debug!(?product, "upsert called");
        self.inner.upsert(product).await.map_err(Self::map_error)
    }
}

#[async_trait]
impl ActorClient<Product> for ProductClient {
    type Error = ProductError;

    fn inner(&self) -> &RecordClient<Product> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => ProductError::NotFound(id),
            other => other
                .into_record_error::<ProductError>()
                .unwrap_or_else(|e| ProductError::ActorCommunicationError(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Price, ProductId};
    use record_actor::mock::MockClient;

    fn fries() -> Product {
        Product::new("p1", "Fries", Price::from_cents(350), "c1")
    }

    #[tokio::test]
    async fn get_passes_the_cached_product_through() {
        let mut mock = MockClient::<Product>::new();
        mock.expect_get(ProductId::from("p1")).return_ok(Some(fries()));
        let client = ProductClient::new(mock.client());

        let product = client.get("p1".into()).await.unwrap();
        assert_eq!(product.map(|p| p.name), Some("Fries".to_string()));
        mock.verify();
    }

    #[tokio::test]
    async fn record_errors_come_back_typed() {
        let mut mock = MockClient::<Product>::new();
        mock.expect_upsert()
            .return_err(FrameworkError::RecordError(Box::new(ProductError::EmptyName("p1".into()))));
        let client = ProductClient::new(mock.client());

        let err = client.upsert(fries()).await.unwrap_err();
        assert_eq!(err, ProductError::EmptyName("p1".into()));
    }

    #[tokio::test]
    async fn missing_product_maps_to_not_found() {
        let mut mock = MockClient::<Product>::new();
        mock.expect_remove(ProductId::from("p9"))
            .return_err(FrameworkError::NotFound("p9".into()));
        let client = ProductClient::new(mock.client());

        let err = client.remove("p9".into()).await.unwrap_err();
        assert_eq!(err, ProductError::NotFound("p9".into()));
    }
}
