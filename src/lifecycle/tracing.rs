//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter filtered
//! by `RUST_LOG`. Module paths are hidden; the record actors log a
//! `record_type` field instead.
//!
//! ```bash
//! RUST_LOG=info order-board feed.jsonl     # one line per applied frame and status change
//! RUST_LOG=debug order-board feed.jsonl    # full records and every request
//! ```
//!
//! With `RUST_LOG=info` a replayed feed looks like:
//!
//! ```text
//! INFO Upserted record_type="Product" id=p-1 replaced=false size=1
//! INFO apply_message: Applied collection=products upserted=1 removed=0
//! INFO Upserted record_type="OrderItem" id=a1b2 replaced=false size=1
//! INFO apply_message: Applied collection=order_items upserted=1 removed=0
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // record_type replaces the module path
        .compact()
        .init();
}
