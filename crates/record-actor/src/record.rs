//! # ActorRecord Trait
//!
//! The contract a backend record type implements so a [`RecordActor`](crate::RecordActor)
//! can own a keyed cache of it. Records arrive whole (from a fetch or a realtime
//! notification) and already carry the id the backend assigned, so there is no
//! create payload and no id generation here: the actor simply upserts.
//!
//! Hooks with default implementations:
//! - [`ActorRecord::on_upsert`]
//! - [`ActorRecord::on_remove`]

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any cached backend record must implement to be managed by `RecordActor`.
///
/// # Async & Context
/// Hooks are `#[async_trait]` so they can call other actors. The `Context` type is
/// injected into every hook when the actor starts running, which lets one actor
/// depend on the client of another without construction-order problems.
#[async_trait]
pub trait ActorRecord: Clone + Send + Sync + 'static {
    /// The backend identifier of this record.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug;

    /// Partial field update applied to a cached record.
    type Patch: Send + Sync + Debug;

    /// Record-specific operations (e.g. advancing a workflow status).
    type Action: Send + Sync + Debug;

    /// Result returned by custom actions.
    type ActionResult: Send + Sync + Debug;

    /// Runtime dependencies injected into the actor. Use `()` when there are none.
    type Context: Send + Sync;

    /// One error enum for every hook of this record type.
    type Error: std::error::Error + Send + Sync + 'static;

    /// The id under which this record is stored.
    fn id(&self) -> &Self::Id;

    /// Called before a record is inserted or replaces an existing one.
    /// Returning an error leaves the store untouched.
    async fn on_upsert(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Applies a patch. Runs against a copy; the store only sees the result on success.
    async fn apply_patch(
        &mut self,
        patch: Self::Patch,
        ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Called immediately before the record is evicted from the store.
    async fn on_remove(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Handles a record-specific action. Like patches, actions run against a copy.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}
