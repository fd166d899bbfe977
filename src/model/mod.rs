//! Typed mirrors of the backend collections the board reads.
//!
//! The backend owns the schema; these structs only describe what comes over the
//! wire. Relations between rows are [`Relation`]s because the backend returns
//! either a bare key or the inlined record depending on the requested fields.

pub mod catalog;
pub mod ids;
pub mod order;
pub mod order_item;
pub mod price;
pub mod product;
pub mod relation;
pub mod status;
pub mod user;

pub use catalog::*;
pub use ids::*;
pub use order::*;
pub use order_item::*;
pub use price::*;
pub use product::*;
pub use relation::*;
pub use status::*;
pub use user::*;
