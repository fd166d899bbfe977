//! # Board Lifecycle
//!
//! Starts the record actors, wires them together, and shuts them down.
//!
//! Actors are created without dependencies and receive them when they start,
//! through `run(context)`. The order item actor's context is the
//! [`ProductClient`](crate::clients::ProductClient); the product actor needs
//! nothing. The dependency graph is acyclic, so dropping the clients held by
//! [`BoardSystem`] stops both actors in turn.
//!
//! [`setup_tracing`] initializes logging for the binary.

pub mod board_system;
pub mod tracing;

pub use board_system::*;
pub use self::tracing::*;
