//! Type-safe wrappers around [`RecordClient`](record_actor::RecordClient).
//!
//! Each client maps [`FrameworkError`](record_actor::FrameworkError) into its
//! record's own error type, so callers match on `OrderItemError::AlreadyPaid`
//! rather than digging through boxed framework errors.

pub mod order_item_client;
pub mod product_client;

pub use order_item_client::*;
pub use product_client::*;
