use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// A record that can be referenced from another record by key.
pub trait Keyed {
    type Key: Clone + PartialEq + Debug;

    fn key(&self) -> &Self::Key;
}

/// A reference to another record as the backend returns it.
///
/// Depending on which fields a query asked for, a relation comes back either as
/// the bare key (`"product": "3f0c..."`) or with the related record inlined
/// (`"product": { "id": "3f0c...", "name": "Fries", ... }`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    untagged,
    bound(
        serialize = "T: Serialize, T::Key: Serialize",
        deserialize = "T: Deserialize<'de>, T::Key: Deserialize<'de>"
    )
)]
pub enum Relation<T: Keyed> {
    Id(T::Key),
    Expanded(Box<T>),
}

impl<T: Keyed> Relation<T> {
    pub fn expanded(record: T) -> Self {
        Relation::Expanded(Box::new(record))
    }

    /// The key of the related record, whichever form this relation has.
    pub fn key(&self) -> &T::Key {
        match self {
            Relation::Id(key) => key,
            Relation::Expanded(record) => record.key(),
        }
    }

    pub fn as_expanded(&self) -> Option<&T> {
        match self {
            Relation::Id(_) => None,
            Relation::Expanded(record) => Some(record),
        }
    }

    pub fn is_expanded(&self) -> bool {
        matches!(self, Relation::Expanded(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Ingredient, IngredientId};

    #[test]
    fn bare_key_and_inline_record_both_deserialize() {
        let bare: Relation<Ingredient> = serde_json::from_str(r#""ing-1""#).unwrap();
        assert_eq!(bare, Relation::Id(IngredientId::from("ing-1")));
        assert!(!bare.is_expanded());

        let inline: Relation<Ingredient> =
            serde_json::from_str(r#"{"id":"ing-1","name":"Potatoes","stock":12.5}"#).unwrap();
        assert!(inline.is_expanded());
        assert_eq!(inline.key(), bare.key());
        assert_eq!(inline.as_expanded().map(|i| i.name.as_str()), Some("Potatoes"));
    }

    #[test]
    fn serializes_back_to_the_same_shape() {
        let bare: Relation<Ingredient> = Relation::Id(IngredientId::from("ing-1"));
        assert_eq!(serde_json::to_string(&bare).unwrap(), r#""ing-1""#);
    }
}
