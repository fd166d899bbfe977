//! # Realtime Ingest
//!
//! The backend pushes changes to subscribed clients as JSON frames:
//!
//! ```text
//! {"type":"subscription","event":"init","collection":"order_items","data":[{...}, ...]}
//! {"type":"subscription","event":"update","data":[{...}]}
//! {"type":"subscription","event":"delete","data":["a1b2"]}
//! {"type":"ping"}
//! ```
//!
//! [`RealtimeIngest`] turns each frame into upserts and removals on the record
//! actors. `init`, `create` and `update` carry whole records and are all
//! upserts; `delete` carries keys. The transport (websocket, file replay, ...)
//! belongs to the caller, which hands over the text of each frame.
//!
//! Products should be ingested before the items that reference them, so the
//! item actor can inline their names.

pub mod error;
pub mod ingest;
pub mod message;

pub use error::*;
pub use ingest::*;
pub use message::*;
