//! Wire types of the backend's realtime feed.

use serde::Deserialize;
use serde_json::Value;
use std::fmt::Display;
use std::str::FromStr;
use thiserror::Error;

/// One frame of the realtime feed.
///
/// Only subscription frames carry data; heartbeats (`ping`), `auth`
/// confirmations and anything else the backend may add are [`RealtimeMessage::Other`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum RealtimeMessage {
    Subscription(SubscriptionEvent),
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SubscriptionEvent {
    pub event: ChangeKind,
    /// Collection the event belongs to; absent when the subscription names a single one.
    #[serde(default)]
    pub collection: Option<String>,
    #[serde(default)]
    pub uid: Option<String>,
    /// Whole records for `init`/`create`/`update`, keys for `delete`.
    #[serde(default)]
    pub data: Vec<Value>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    /// Snapshot sent right after subscribing.
    Init,
    Create,
    Update,
    Delete,
}

/// Backend collections the board caches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Collection {
    #[default]
    OrderItems,
    Products,
}

impl Collection {
    pub fn as_str(self) -> &'static str {
        match self {
            Collection::OrderItems => "order_items",
            Collection::Products => "products",
        }
    }
}

impl Display for Collection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Error, PartialEq)]
#[error("Unknown collection: {0:?}")]
pub struct UnknownCollection(pub String);

impl FromStr for Collection {
    type Err = UnknownCollection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "order_items" => Ok(Collection::OrderItems),
            "products" => Ok(Collection::Products),
            other => Err(UnknownCollection(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn subscription_frames_carry_their_data() {
        let text = r#"{"type":"subscription","event":"delete","collection":"order_items","uid":"kds","data":["a",7]}"#;
        let message: RealtimeMessage = serde_json::from_str(text).unwrap();
        let RealtimeMessage::Subscription(event) = message else {
            panic!("expected a subscription frame");
        };
        assert_eq!(event.event, ChangeKind::Delete);
        assert_eq!(event.collection.as_deref(), Some("order_items"));
        assert_eq!(event.uid.as_deref(), Some("kds"));
        assert_eq!(event.data, vec![json!("a"), json!(7)]);
    }

    #[test]
    fn other_frame_types_are_not_errors() {
        for text in [r#"{"type":"ping"}"#, r#"{"type":"auth","status":"ok"}"#] {
            let message: RealtimeMessage = serde_json::from_str(text).unwrap();
            assert_eq!(message, RealtimeMessage::Other);
        }
    }

    #[test]
    fn unknown_event_kind_is_rejected() {
        let text = r#"{"type":"subscription","event":"truncate","data":[]}"#;
        assert!(serde_json::from_str::<RealtimeMessage>(text).is_err());
    }

    #[test]
    fn collection_names_round_trip() {
        for collection in [Collection::OrderItems, Collection::Products] {
            assert_eq!(collection.as_str().parse::<Collection>().unwrap(), collection);
        }
        assert!("orders".parse::<Collection>().is_err());
    }
}
