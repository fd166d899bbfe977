//! Menu structure records. Passed through unchanged; nothing here has behavior.

use crate::model::{CategoryId, IngredientId, Keyed, Product, Relation};
use serde::{Deserialize, Serialize};

/// A menu section (a row of `categories`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    #[serde(default)]
    pub sort: i64,
    pub name: String,
    #[serde(default)]
    pub products: Vec<Relation<Product>>,
}

impl Keyed for Category {
    type Key = CategoryId;

    fn key(&self) -> &CategoryId {
        &self.id
    }
}

/// A stock item products draw from (a row of `ingredients`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub id: IngredientId,
    pub name: String,
    pub stock: f64,
}

impl Keyed for Ingredient {
    type Key = IngredientId;

    fn key(&self) -> &IngredientId {
        &self.id
    }
}
