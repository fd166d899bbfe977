//! # Order Board
//!
//! The order-item side of a restaurant ordering system: the kitchen display
//! and the point-of-sale screen both list the items of open orders, badge them
//! by status, and let staff move them along
//! `pending` → `ready-for-serving` → `served` → `paid`.
//!
//! ## Module Tour
//!
//! ### 1. The Policy ([`policy`])
//! Pure functions over [`OrderItemStatus`](model::OrderItemStatus): the
//! label, the badge [`Severity`](policy::Severity), and the display order.
//!
//! ### 2. The Model ([`model`])
//! Typed mirrors of the backend rows. Unknown statuses are rejected when a
//! record is deserialized, so everything past this point works with the closed enum.
//!
//! ### 3. The Caches ([`product_actor`], [`order_item_actor`])
//! Record actors built on [`record_actor`]. Each owns its records in a single
//! Tokio task; the order item actor inlines products it finds in the product cache.
//!
//! ### 4. The Interface ([`clients`], [`realtime`])
//! [`OrderItemClient`](clients::OrderItemClient) serves the sorted board and
//! status changes. [`RealtimeIngest`](realtime::RealtimeIngest) applies the
//! backend's change feed.
//!
//! ### 5. The Orchestrator ([`lifecycle`], [`config`])
//! [`BoardSystem`](lifecycle::BoardSystem) starts and stops the actors;
//! [`BoardConfig`](config::BoardConfig) reads settings from the environment.
//!
//! ## Running
//!
//! ```bash
//! # Replay a feed of realtime frames, one JSON object per line
//! RUST_LOG=info cargo run -- feed.jsonl
//! ```

pub mod clients;
pub mod config;
pub mod lifecycle;
pub mod model;
pub mod order_item_actor;
pub mod policy;
pub mod product_actor;
pub mod realtime;
