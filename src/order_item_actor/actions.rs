//! Custom actions for the OrderItem actor.
//!
//! Status changes are the only mutation staff make to an order item, so they
//! are modelled as actions whose result says exactly what changed.

use crate::model::{OrderItemId, OrderItemStatus};
use serde::Serialize;

/// Custom actions for order items.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OrderItemAction {
    /// Move to the next workflow stage.
    ///
    /// # Errors
    /// Fails with [`AlreadyPaid`](super::OrderItemError::AlreadyPaid) on a paid item.
    Advance,
    /// Jump to any status, including back to an earlier one (e.g. to undo a mis-tap).
    SetStatus(OrderItemStatus),
}

/// Result of a status action.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusChange {
    pub id: OrderItemId,
    pub from: OrderItemStatus,
    pub to: OrderItemStatus,
}

impl StatusChange {
    pub fn is_noop(&self) -> bool {
        self.from == self.to
    }

    /// The field update to send to the backend for this change.
    pub fn patch(&self) -> StatusPatch {
        StatusPatch { status: self.to }
    }
}

/// Body of the status update request sent back to the backend: `{"status": "served"}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StatusPatch {
    pub status: OrderItemStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patch_body_uses_the_wire_value() {
        let change = StatusChange {
            id: "i1".into(),
            from: OrderItemStatus::Pending,
            to: OrderItemStatus::ReadyForServing,
        };
        assert!(!change.is_noop());
        assert_eq!(
            serde_json::to_string(&change.patch()).unwrap(),
            r#"{"status":"ready-for-serving"}"#
        );
    }
}
