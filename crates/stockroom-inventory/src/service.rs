// SPDX-License-Identifier: Apache-2.0

use crate::error::InventoryError;
use crate::store::ProductStore;
use stockroom_model::{CreateProductInput, Product, ProductId, ProductPatch};

/// Core inventory logic: validation, defaulting, partial-update merge, and
/// translation of store failures into domain error kinds. Holds no locks of
/// its own; atomicity is delegated to the store.
pub struct InventoryService {
    store: ProductStore,
}

impl InventoryService {
    #[must_use]
    pub fn new(store: ProductStore) -> Self {
        Self { store }
    }

    #[must_use]
    pub fn store(&self) -> &ProductStore {
        &self.store
    }

    /// All products, ordered by category ascending then name ascending.
    /// Filtering is a client-side concern over the full list.
    pub async fn list(&self) -> Result<Vec<Product>, InventoryError> {
        Ok(self.store.list_all().await?)
    }

    pub async fn get(&self, id: ProductId) -> Result<Product, InventoryError> {
        self.store
            .get(id)
            .await?
            .ok_or(InventoryError::NotFound(id))
    }

    /// Validates the input, applies defaults, and inserts. Duplicate-SKU
    /// detection is the store constraint's violation translated to
    /// [`InventoryError::SkuConflict`]; a failed create never mutates the
    /// store.
    pub async fn create(&self, input: CreateProductInput) -> Result<Product, InventoryError> {
        let draft = input
            .into_draft()
            .map_err(|e| InventoryError::Validation(e.to_string()))?;
        Ok(self.store.insert(&draft).await?)
    }

    /// Partial merge: each field present in the patch replaces the stored
    /// value, omitted fields are retained, and the SKU cannot be touched.
    ///
    /// A negative patched quantity is rejected up front; since stored
    /// quantities are never negative, this bounds the merged value and keeps
    /// the quantity floor enforced on the update path as well as on create.
    pub async fn update(
        &self,
        id: ProductId,
        patch: ProductPatch,
    ) -> Result<Product, InventoryError> {
        if patch.quantity.is_some_and(|q| q < 0) {
            return Err(InventoryError::Validation(
                "quantity must not be negative".to_string(),
            ));
        }
        self.store
            .apply_patch(id, &patch)
            .await?
            .ok_or(InventoryError::NotFound(id))
    }

    /// Unconditional and irreversible; returns the record as it existed
    /// immediately before removal.
    pub async fn delete(&self, id: ProductId) -> Result<Product, InventoryError> {
        self.store
            .delete(id)
            .await?
            .ok_or(InventoryError::NotFound(id))
    }
}
