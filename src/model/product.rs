use crate::model::{generate_id, Id};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: Id,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub price: f64,
}

/// Data for a product that has not been assigned an id yet
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: f64,
}

impl NewProduct {
    pub fn new(title: Option<String>, description: Option<String>, price: f64) -> Self {
        Self {
            title,
            description,
            price,
        }
    }

    pub fn into_product(self) -> Product {
        Product {
            id: generate_id(),
            title: self.title,
            description: self.description,
            price: self.price,
        }
    }
}

/// Field changes for an existing product.
///
/// The outer `Option` of each field tells whether the caller supplied it at
/// all; fields left as `None` keep the stored value. For `title` and
/// `description` an explicit `Some(None)` clears the field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductChanges {
    pub title: Option<Option<String>>,
    pub description: Option<Option<String>>,
    pub price: Option<f64>,
}

impl ProductChanges {
    pub fn price(price: f64) -> Self {
        Self {
            price: Some(price),
            ..Default::default()
        }
    }

    /// Merge the changes over `existing`. The id is always kept.
    pub fn merge_into(self, existing: Product) -> Product {
        Product {
            id: existing.id,
            title: self.title.unwrap_or(existing.title),
            description: self.description.unwrap_or(existing.description),
            price: self.price.unwrap_or(existing.price),
        }
    }
}
