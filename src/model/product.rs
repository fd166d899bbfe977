use crate::model::{Category, Ingredient, Keyed, Price, ProductId, Relation};
use serde::{Deserialize, Serialize};

/// A product on the menu (a row of `products`).
///
/// # Record Actor
/// This struct implements [`ActorRecord`](record_actor::ActorRecord), so the
/// product catalog is cached by a [`RecordActor`](record_actor::RecordActor).
/// See [`product_actor`](crate::product_actor) for the patch type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    /// Publishing status of the row (`published`, `draft`, ...), not an order status.
    #[serde(default)]
    pub status: String,
    pub name: String,
    pub price: Price,
    pub category: Relation<Category>,
    /// Stock item consumed when this product is ordered.
    #[serde(default)]
    pub ingredient: Option<Relation<Ingredient>>,
    /// How much of `ingredient` one order consumes.
    #[serde(default)]
    pub ingredient_quantity: Option<f64>,
    #[serde(default)]
    pub sort: Option<i64>,
    #[serde(default)]
    pub is_selfservice: bool,
}

impl Product {
    /// Creates a published product without a linked ingredient.
    ///
    /// # Arguments
    /// * `id` - Backend key
    /// * `name` - Display name, also the secondary sort key of order items
    /// * `price` - Unit price
    /// * `category` - Key of the menu category
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        price: Price,
        category: impl Into<crate::model::CategoryId>,
    ) -> Self {
        Self {
            id: id.into(),
            status: "published".to_string(),
            name: name.into(),
            price,
            category: Relation::Id(category.into()),
            ingredient: None,
            ingredient_quantity: None,
            sort: None,
            is_selfservice: false,
        }
    }
}

impl Keyed for Product {
    type Key = ProductId;

    fn key(&self) -> &ProductId {
        &self.id
    }
}
