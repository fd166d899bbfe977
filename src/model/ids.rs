//! Type-safe identifiers for backend records.
//!
//! The backend hands out opaque string keys (UUIDs for every collection used
//! here). Each collection gets its own newtype so an order id can never be used
//! to look up a product.

use serde::{Deserialize, Serialize};
use std::fmt::Display;

macro_rules! record_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

record_id!(
    /// Key of a row in `order_items`.
    OrderItemId
);
record_id!(
    /// Key of a row in `orders`.
    OrderId
);
record_id!(
    /// Key of a row in `products`.
    ProductId
);
record_id!(
    /// Key of a row in `categories`.
    CategoryId
);
record_id!(
    /// Key of a row in `ingredients`.
    IngredientId
);
record_id!(
    /// Key of a backend user account.
    UserId
);
