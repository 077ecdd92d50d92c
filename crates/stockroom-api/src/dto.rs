// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};
use stockroom_model::{stock_status, Product, ProductId};

pub const PRODUCT_DELETED_MESSAGE: &str = "Product deleted successfully";

/// A product as it appears on the wire: every stored field plus the derived
/// `stock_status` label, so clients never re-implement the thresholds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProductDto {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub quantity: i64,
    pub price: f64,
    pub category: String,
    pub sku: String,
    pub created_at: String,
    pub stock_status: String,
}

impl From<Product> for ProductDto {
    fn from(product: Product) -> Self {
        let status = stock_status(product.quantity);
        Self {
            id: product.id,
            name: product.name,
            description: product.description,
            quantity: product.quantity,
            price: product.price,
            category: product.category,
            sku: product.sku,
            created_at: product.created_at,
            stock_status: status.label().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DeleteProductResponseDto {
    pub message: String,
    pub product: ProductDto,
}

impl DeleteProductResponseDto {
    #[must_use]
    pub fn deleted(product: Product) -> Self {
        Self {
            message: PRODUCT_DELETED_MESSAGE.to_string(),
            product: product.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_product(quantity: i64) -> Product {
        Product {
            id: 7,
            name: "Porter Classic".to_string(),
            description: "Traditional porter".to_string(),
            quantity,
            price: 11.99,
            category: "Porter".to_string(),
            sku: "BEER-POR-001".to_string(),
            created_at: "2024-01-01 00:00:00".to_string(),
        }
    }

    #[test]
    fn product_dto_carries_all_fields_plus_derived_status() {
        let dto = ProductDto::from(sample_product(0));
        let value = serde_json::to_value(&dto).expect("serialize dto");
        let object = value.as_object().expect("json object");
        for field in [
            "id",
            "name",
            "description",
            "quantity",
            "price",
            "category",
            "sku",
            "created_at",
            "stock_status",
        ] {
            assert!(object.contains_key(field), "missing field {field}");
        }
        assert_eq!(object["stock_status"], "Out of Stock");
    }

    #[test]
    fn delete_response_wraps_the_pre_delete_record() {
        let response = DeleteProductResponseDto::deleted(sample_product(120));
        assert_eq!(response.message, PRODUCT_DELETED_MESSAGE);
        assert_eq!(response.product.stock_status, "In Stock");
        assert_eq!(response.product.id, 7);
    }
}
