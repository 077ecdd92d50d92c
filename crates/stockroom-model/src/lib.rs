// SPDX-License-Identifier: Apache-2.0

#![forbid(unsafe_code)]

mod product;
mod stock;

pub use product::{
    CreateProductInput, Product, ProductDraft, ProductId, ProductPatch, ValidationError,
    DEFAULT_CATEGORY, MISSING_REQUIRED_FIELDS,
};
pub use stock::{stock_status, StockStatus, LOW_STOCK_THRESHOLD, MEDIUM_STOCK_THRESHOLD};
