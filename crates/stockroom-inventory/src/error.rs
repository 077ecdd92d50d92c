// SPDX-License-Identifier: Apache-2.0

use crate::store::StoreError;
use std::fmt::{Display, Formatter};
use stockroom_model::ProductId;

/// Typed failure raised by the inventory service; the API boundary owns the
/// mapping of each kind to an HTTP status.
#[derive(Debug)]
pub enum InventoryError {
    /// A creation or update input failed validation before reaching the store.
    Validation(String),
    /// A creation collided with an existing SKU; the store was not mutated.
    SkuConflict,
    /// The targeted product does not exist.
    NotFound(ProductId),
    /// Unexpected failure from the persistence layer.
    Store(String),
}

impl Display for InventoryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(message) => write!(f, "{message}"),
            Self::SkuConflict => write!(f, "SKU already exists"),
            Self::NotFound(id) => write!(f, "product {id} not found"),
            Self::Store(message) => write!(f, "store failure: {message}"),
        }
    }
}

impl std::error::Error for InventoryError {}

impl From<StoreError> for InventoryError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::DuplicateSku => Self::SkuConflict,
            StoreError::Sqlite(e) => Self::Store(e.to_string()),
        }
    }
}
