// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

pub type ProductId = i64;

/// Category applied when a creation request omits one (or sends an empty one).
pub const DEFAULT_CATEGORY: &str = "General";

/// Message returned whenever a creation request is missing any required field.
pub const MISSING_REQUIRED_FIELDS: &str = "Missing required fields: name, sku, price, quantity";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError(pub String);

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for ValidationError {}

/// A stock-keeping unit as persisted in the record store.
///
/// `id` and `created_at` are assigned by the store on insert and never change;
/// `sku` is immutable after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub quantity: i64,
    pub price: f64,
    pub category: String,
    pub sku: String,
    pub created_at: String,
}

/// Wire input for product creation.
///
/// Every field is optional at this level so that an absent field can be told
/// apart from a present-but-zero one; `into_draft` is where requiredness is
/// decided. Unknown wire fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateProductInput {
    pub name: Option<String>,
    pub description: Option<String>,
    pub quantity: Option<i64>,
    pub price: Option<f64>,
    pub category: Option<String>,
    pub sku: Option<String>,
}

/// A validated, fully defaulted product ready for insertion.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDraft {
    pub name: String,
    pub description: String,
    pub quantity: i64,
    pub price: f64,
    pub category: String,
    pub sku: String,
}

impl CreateProductInput {
    /// Validates requiredness and applies defaults.
    ///
    /// `name` and `sku` must be present and non-empty; `price` and `quantity`
    /// must be present (`0` is a present value). A negative quantity is
    /// rejected here so it can never reach the store. Empty `description`
    /// stays empty; empty or absent `category` becomes [`DEFAULT_CATEGORY`].
    pub fn into_draft(self) -> Result<ProductDraft, ValidationError> {
        let name = self.name.filter(|v| !v.is_empty());
        let sku = self.sku.filter(|v| !v.is_empty());
        match (name, sku, self.price, self.quantity) {
            (Some(name), Some(sku), Some(price), Some(quantity)) => {
                if quantity < 0 {
                    return Err(ValidationError(
                        "quantity must not be negative".to_string(),
                    ));
                }
                Ok(ProductDraft {
                    name,
                    description: self.description.unwrap_or_default(),
                    quantity,
                    price,
                    category: self
                        .category
                        .filter(|v| !v.is_empty())
                        .unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
                    sku,
                })
            }
            _ => Err(ValidationError(MISSING_REQUIRED_FIELDS.to_string())),
        }
    }
}

/// Partial update for a product. A `None` field retains the stored value.
///
/// `sku` is deliberately not part of this type: the SKU is immutable after
/// creation, so an `sku` member in an update body deserializes into nothing
/// and is silently ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub quantity: Option<i64>,
    pub price: Option<f64>,
    pub category: Option<String>,
}

impl ProductPatch {
    /// Merges the present fields over `product`, field by field.
    pub fn apply_to(&self, product: &mut Product) {
        if let Some(name) = &self.name {
            product.name = name.clone();
        }
        if let Some(description) = &self.description {
            product.description = description.clone();
        }
        if let Some(quantity) = self.quantity {
            product.quantity = quantity;
        }
        if let Some(price) = self.price {
            product.price = price;
        }
        if let Some(category) = &self.category {
            product.category = category.clone();
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.quantity.is_none()
            && self.price.is_none()
            && self.category.is_none()
    }
}
