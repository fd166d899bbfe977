//! # Record Client
//!
//! The cloneable async handle used to talk to a [`RecordActor`](crate::RecordActor).

use crate::error::FrameworkError;
use crate::message::RecordRequest;
use crate::record::ActorRecord;
use tokio::sync::{mpsc, oneshot};

/// A type-safe client for a `RecordActor<T>`.
///
/// Holds only the channel sender, so clones are cheap and can be moved into tasks.
/// Every method resolves to `Err(FrameworkError::ActorClosed)` once the actor has
/// stopped.
#[derive(Clone)]
pub struct RecordClient<T: ActorRecord> {
    sender: mpsc::Sender<RecordRequest<T>>,
}

impl<T: ActorRecord> RecordClient<T> {
    pub fn new(sender: mpsc::Sender<RecordRequest<T>>) -> Self {
        Self { sender }
    }

    async fn request<R>(
        &self,
        build: impl FnOnce(oneshot::Sender<Result<R, FrameworkError>>) -> RecordRequest<T>,
    ) -> Result<R, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn upsert(&self, record: T) -> Result<T, FrameworkError> {
        self.request(|respond_to| RecordRequest::Upsert { record, respond_to })
            .await
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, FrameworkError> {
        self.request(|respond_to| RecordRequest::Get { id, respond_to })
            .await
    }

    pub async fn list(&self) -> Result<Vec<T>, FrameworkError> {
        self.request(|respond_to| RecordRequest::List { respond_to })
            .await
    }

    pub async fn patch(&self, id: T::Id, patch: T::Patch) -> Result<T, FrameworkError> {
        self.request(|respond_to| RecordRequest::Patch {
            id,
            patch,
            respond_to,
        })
        .await
    }

    pub async fn remove(&self, id: T::Id) -> Result<T, FrameworkError> {
        self.request(|respond_to| RecordRequest::Remove { id, respond_to })
            .await
    }

    pub async fn perform_action(
        &self,
        id: T::Id,
        action: T::Action,
    ) -> Result<T::ActionResult, FrameworkError> {
        self.request(|respond_to| RecordRequest::Action {
            id,
            action,
            respond_to,
        })
        .await
    }
}
