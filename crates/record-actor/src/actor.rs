//! # Record Actor
//!
//! The server half of the framework. A `RecordActor<T>` owns the cached copies of
//! one record type and serves [`RecordRequest`]s one at a time, so its store needs
//! no locking.

use crate::client::RecordClient;
use crate::error::FrameworkError;
use crate::message::RecordRequest;
use crate::record::ActorRecord;
use std::collections::HashMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The actor that owns the cached records of type `T`.
///
/// # Usage Pattern
///
/// 1. **Create**: `RecordActor::new(capacity)` returns the actor and its client.
/// 2. **Wire**: hand dependencies (other clients) to `actor.run(context)`.
/// 3. **Run**: spawn the returned future on the Tokio runtime.
///
/// The actor stops once every clone of its client has been dropped.
///
/// ## Operations
///
/// * **Upsert**: runs `on_upsert` on the incoming record, then inserts it,
///   replacing any record with the same id.
/// * **Get**: clone of the record, or `None`.
/// * **List**: clones of every record.
/// * **Patch**: applies the patch to a copy and stores the copy on success.
/// * **Remove**: runs `on_remove`, then evicts the record.
/// * **Action**: runs `handle_action` on a copy and stores the copy on success.
pub struct RecordActor<T: ActorRecord> {
    receiver: mpsc::Receiver<RecordRequest<T>>,
    store: HashMap<T::Id, T>,
}

impl<T: ActorRecord> RecordActor<T> {
    /// Creates a new `RecordActor` and its associated `RecordClient`.
    ///
    /// `buffer_size` is the capacity of the request channel; callers wait when it is full.
    pub fn new(buffer_size: usize) -> (Self, RecordClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: HashMap::new(),
        };
        (actor, RecordClient::new(sender))
    }

    /// Runs the event loop until the channel closes.
    ///
    /// `context` is passed to every record hook.
    pub async fn run(mut self, context: T::Context) {
        // "OrderItem" rather than the full module path
        let record_type = std::any::type_name::<T>()
            .rsplit("::")
            .next()
            .unwrap_or("Unknown");
        info!(record_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                RecordRequest::Upsert {
                    mut record,
                    respond_to,
                } => {
                    let id = record.id().clone();
                    debug!(record_type, %id, "Upsert");
                    if let Err(e) = record.on_upsert(&context).await {
                        warn!(record_type, %id, error = %e, "on_upsert failed");
                        let _ = respond_to.send(Err(FrameworkError::RecordError(Box::new(e))));
                        continue;
                    }
                    let replaced = self.store.insert(id.clone(), record.clone()).is_some();
                    info!(record_type, %id, replaced, size = self.store.len(), "Upserted");
                    let _ = respond_to.send(Ok(record));
                }
                RecordRequest::Get { id, respond_to } => {
                    let record = self.store.get(&id).cloned();
                    debug!(record_type, %id, found = record.is_some(), "Get");
                    let _ = respond_to.send(Ok(record));
                }
                RecordRequest::List { respond_to } => {
                    debug!(record_type, size = self.store.len(), "List");
                    let _ = respond_to.send(Ok(self.store.values().cloned().collect()));
                }
                RecordRequest::Patch {
                    id,
                    patch,
                    respond_to,
                } => {
                    debug!(record_type, %id, ?patch, "Patch");
                    let Some(current) = self.store.get(&id) else {
                        warn!(record_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                        continue;
                    };
                    let mut draft = current.clone();
                    match draft.apply_patch(patch, &context).await {
                        Ok(()) => {
                            self.store.insert(id.clone(), draft.clone());
                            info!(record_type, %id, "Patched");
                            let _ = respond_to.send(Ok(draft));
                        }
                        Err(e) => {
                            warn!(record_type, %id, error = %e, "Patch failed");
                            let _ =
                                respond_to.send(Err(FrameworkError::RecordError(Box::new(e))));
                        }
                    }
                }
                RecordRequest::Remove { id, respond_to } => {
                    debug!(record_type, %id, "Remove");
                    let Some(current) = self.store.get(&id) else {
                        warn!(record_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                        continue;
                    };
                    if let Err(e) = current.on_remove(&context).await {
                        warn!(record_type, %id, error = %e, "on_remove failed");
                        let _ = respond_to.send(Err(FrameworkError::RecordError(Box::new(e))));
                        continue;
                    }
                    match self.store.remove(&id) {
                        Some(removed) => {
                            info!(record_type, %id, size = self.store.len(), "Removed");
                            let _ = respond_to.send(Ok(removed));
                        }
                        None => {
                            let _ =
                                respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                        }
                    }
                }
                RecordRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    debug!(record_type, %id, ?action, "Action");
                    let Some(current) = self.store.get(&id) else {
                        warn!(record_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                        continue;
                    };
                    let mut draft = current.clone();
                    match draft.handle_action(action, &context).await {
                        Ok(result) => {
                            self.store.insert(id.clone(), draft);
                            info!(record_type, %id, "Action ok");
                            let _ = respond_to.send(Ok(result));
                        }
                        Err(e) => {
                            warn!(record_type, %id, error = %e, "Action failed");
                            let _ =
                                respond_to.send(Err(FrameworkError::RecordError(Box::new(e))));
                        }
                    }
                }
            }
        }

        info!(record_type, size = self.store.len(), "Shutdown");
    }
}
