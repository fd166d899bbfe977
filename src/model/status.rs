use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;
use thiserror::Error;

/// Where an order item is in its lifecycle.
///
/// The set is closed: the backend stores these four kebab-case values and any
/// other value is rejected while deserializing, never carried further.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrderItemStatus {
    /// Placed, waiting for the kitchen.
    Pending,
    /// Prepared, waiting to be carried to the table.
    ReadyForServing,
    Served,
    Paid,
}

impl OrderItemStatus {
    /// Every status, in workflow order.
    pub const ALL: [OrderItemStatus; 4] = [
        OrderItemStatus::Pending,
        OrderItemStatus::ReadyForServing,
        OrderItemStatus::Served,
        OrderItemStatus::Paid,
    ];

    /// The value the backend stores.
    pub fn as_str(self) -> &'static str {
        match self {
            OrderItemStatus::Pending => "pending",
            OrderItemStatus::ReadyForServing => "ready-for-serving",
            OrderItemStatus::Served => "served",
            OrderItemStatus::Paid => "paid",
        }
    }
}

impl Display for OrderItemStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Error, PartialEq)]
#[error("Unknown order item status: {0:?}")]
pub struct UnknownStatus(pub String);

impl FromStr for OrderItemStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OrderItemStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| UnknownStatus(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_values_match_the_backend() {
        for status in OrderItemStatus::ALL {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.as_str()));
            assert_eq!(status.as_str().parse::<OrderItemStatus>().unwrap(), status);
        }
        assert_eq!(
            serde_json::from_str::<OrderItemStatus>(r#""ready-for-serving""#).unwrap(),
            OrderItemStatus::ReadyForServing
        );
    }

    #[test]
    fn out_of_domain_values_are_rejected() {
        assert!(serde_json::from_str::<OrderItemStatus>(r#""cancelled""#).is_err());
        assert!(serde_json::from_str::<OrderItemStatus>(r#""Pending""#).is_err());
        assert_eq!(
            "ready".parse::<OrderItemStatus>(),
            Err(UnknownStatus("ready".to_string()))
        );
    }
}
