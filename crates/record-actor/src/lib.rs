//! # Record Actor
//!
//! A small actor framework for keeping a local, concurrently accessible copy of
//! records owned by a remote backend.
//!
//! The backend stays the source of truth: it assigns ids, persists, and pushes
//! change notifications. What a consumer needs locally is a cache it can feed
//! whole records into, read back, patch and evict, from many tasks at once. Each
//! record type gets one [`RecordActor`] that owns its cache and processes requests
//! sequentially, so the cache itself needs no locks.
//!
//! ## Layers
//!
//! 1. **Record** ([`ActorRecord`]): the record type, its id, patch and action types,
//!    and the hooks that run inside the actor.
//! 2. **Runtime** ([`RecordActor`]): the message loop and the keyed store.
//! 3. **Interface** ([`RecordClient`], [`ActorClient`]): cloneable async handles.
//!
//! ## Example
//!
//! ```rust
//! use async_trait::async_trait;
//! use record_actor::{ActorRecord, RecordActor};
//!
//! #[derive(Clone, Debug)]
//! struct Table { id: String, seats: u32 }
//!
//! #[derive(Debug)] struct TablePatch { seats: u32 }
//! #[derive(Debug)] enum TableAction {}
//! #[derive(Debug, thiserror::Error)] #[error("table error")] struct TableError;
//!
//! #[async_trait]
//! impl ActorRecord for Table {
//!     type Id = String;
//!     type Patch = TablePatch;
//!     type Action = TableAction;
//!     type ActionResult = ();
//!     type Context = ();
//!     type Error = TableError;
//!
//!     fn id(&self) -> &String { &self.id }
//!
//!     async fn apply_patch(&mut self, patch: TablePatch, _: &()) -> Result<(), TableError> {
//!         self.seats = patch.seats;
//!         Ok(())
//!     }
//!
//!     async fn handle_action(&mut self, action: TableAction, _: &()) -> Result<(), TableError> {
//!         match action {}
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = RecordActor::<Table>::new(8);
//!     tokio::spawn(actor.run(()));
//!
//!     client.upsert(Table { id: "t1".into(), seats: 4 }).await.unwrap();
//!     let patched = client.patch("t1".into(), TablePatch { seats: 6 }).await.unwrap();
//!     assert_eq!(patched.seats, 6);
//! }
//! ```
//!
//! ## Context injection
//!
//! Dependencies are handed to [`RecordActor::run`], not to the constructor, so an
//! actor can be created before the clients it needs exist.
//!
//! ## Testing
//!
//! See [`mock`] for a scripted client that stands in for a dependency.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod error;
pub mod message;
pub mod mock;
pub mod record;

pub use actor::RecordActor;
pub use client::RecordClient;
pub use client_trait::ActorClient;
pub use error::FrameworkError;
pub use message::{RecordRequest, Response};
pub use record::ActorRecord;
