use rust_decimal::Decimal;
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt::Display;
use std::str::FromStr;
use thiserror::Error;

/// A money amount with at most two decimal places.
///
/// The backend stores prices as two-place decimals and, depending on the
/// driver, returns them as JSON strings (`"3.50"`) or numbers (`3.5`). Both
/// forms deserialize exactly and follow the same rule: more than two
/// significant decimal places is an error, never a rounding. Serialization
/// always produces the string form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Price(Decimal);

#[derive(Debug, Clone, Error, PartialEq)]
pub enum InvalidPrice {
    #[error("Invalid price: {0:?}")]
    Malformed(String),
    #[error("Price {0} has more than two decimal places")]
    SubCent(Decimal),
}

impl Price {
    pub fn from_cents(cents: i64) -> Self {
        Self(Decimal::new(cents, 2))
    }

    pub fn amount(self) -> Decimal {
        self.0
    }

    /// The amount in cents. Exact, since a price never has more than two places.
    pub fn cents(self) -> i128 {
        let mut amount = self.0;
        amount.rescale(2);
        amount.mantissa()
    }
}

impl TryFrom<Decimal> for Price {
    type Error = InvalidPrice;

    fn try_from(amount: Decimal) -> Result<Self, Self::Error> {
        // "3.500" is a price, "3.505" is not.
        if amount.normalize().scale() > 2 {
            return Err(InvalidPrice::SubCent(amount));
        }
        Ok(Self(amount))
    }
}

impl FromStr for Price {
    type Err = InvalidPrice;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let amount = Decimal::from_str(s.trim()).map_err(|_| InvalidPrice::Malformed(s.to_string()))?;
        Self::try_from(amount)
    }
}

impl Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut amount = self.0;
        amount.rescale(2);
        write!(f, "{amount}")
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let amount = <Decimal as Deserialize>::deserialize(deserializer)?;
        Price::try_from(amount).map_err(de::Error::custom)
    }
}
