//! # Record Requests
//!
//! Messages exchanged between a [`RecordClient`](crate::RecordClient) and its
//! [`RecordActor`](crate::RecordActor).

use crate::error::FrameworkError;
use crate::record::ActorRecord;
use tokio::sync::oneshot;

/// One-shot channel the actor answers on.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// A request to the record actor.
///
/// The variants mirror what a client of a remote record collection does with its
/// local copy: take in whole records, read them back, patch fields, drop them,
/// and run record-specific actions.
#[derive(Debug)]
pub enum RecordRequest<T: ActorRecord> {
    /// Insert the record, or replace the one with the same id.
    Upsert {
        record: T,
        respond_to: Response<T>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    /// Snapshot of every cached record, in no particular order.
    List { respond_to: Response<Vec<T>> },
    Patch {
        id: T::Id,
        patch: T::Patch,
        respond_to: Response<T>,
    },
    /// Evict a record, answering with the evicted value.
    Remove { id: T::Id, respond_to: Response<T> },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
}
