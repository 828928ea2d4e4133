use serde::{Deserialize, Serialize};

use super::{deserialize_id, deserialize_nullable_string, deserialize_nullable_vec};

/// An item presented on the deck.
///
/// Cards are immutable once built: identity is `id`, and a card is owned by
/// exactly one collection at a time (the stack, or the kept queue after a save).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub title: String,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub brand: String,
    #[serde(default, deserialize_with = "deserialize_nullable_string")]
    pub category: String,
    #[serde(default)]
    pub price: f64,
    #[serde(
        default,
        alias = "image",
        alias = "image_ref",
        deserialize_with = "deserialize_nullable_string"
    )]
    pub image_ref: String,
    #[serde(default, deserialize_with = "deserialize_nullable_vec")]
    pub tags: Vec<String>,
}

impl Card {
    /// Build a card with just an id and title; other attributes are empty.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            brand: String::new(),
            category: String::new(),
            price: 0.0,
            image_ref: String::new(),
            tags: Vec::new(),
        }
    }

    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = brand.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    pub fn with_image_ref(mut self, image_ref: impl Into<String>) -> Self {
        self.image_ref = image_ref.into();
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Price formatted for display, e.g. `$24.00`.
    pub fn display_price(&self) -> String {
        format!("${:.2}", self.price)
    }
}
