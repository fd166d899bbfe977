//! # ActorClient Trait
//!
//! Shared read/evict operations for domain clients that wrap a [`RecordClient`].
use crate::{ActorRecord, FrameworkError, RecordClient};
use async_trait::async_trait;

/// Trait for record-specific clients to inherit the common operations.
///
/// Implementors supply the wrapped [`RecordClient`] and a mapping from
/// [`FrameworkError`] into their own error type; `get`, `list` and `remove`
/// come for free.
#[async_trait]
pub trait ActorClient<T: ActorRecord>: Send + Sync {
    /// The record-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic RecordClient.
    fn inner(&self) -> &RecordClient<T>;

    /// Map framework errors to the record-specific error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch a cached record by id.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Every cached record, unordered.
    #[tracing::instrument(skip(self))]
    async fn list(&self) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().list().await.map_err(Self::map_error)
    }

    /// Evict a record, returning what was cached.
    #[tracing::instrument(skip(self))]
    async fn remove(&self, id: T::Id) -> Result<T, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().remove(id).await.map_err(Self::map_error)
    }
}
