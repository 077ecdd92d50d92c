// SPDX-License-Identifier: Apache-2.0

use crate::{ApiError, ApiErrorCode};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApiErrorMapping {
    pub status_code: u16,
}

/// The single owner of error-code → HTTP-status mapping. A SKU conflict on
/// create is a 400 like any other create validation failure.
#[must_use]
pub fn map_error(error: &ApiError) -> ApiErrorMapping {
    let status_code = match error.code {
        ApiErrorCode::ValidationFailed | ApiErrorCode::SkuConflict => 400,
        ApiErrorCode::ProductNotFound => 404,
        ApiErrorCode::Internal => 500,
    };

    ApiErrorMapping { status_code }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_map_to_contract_statuses() {
        assert_eq!(map_error(&ApiError::validation_failed("x")).status_code, 400);
        assert_eq!(map_error(&ApiError::sku_conflict()).status_code, 400);
        assert_eq!(map_error(&ApiError::product_not_found()).status_code, 404);
        assert_eq!(map_error(&ApiError::internal("boom")).status_code, 500);
    }

    #[test]
    fn canned_errors_carry_contract_messages() {
        assert_eq!(ApiError::sku_conflict().message, "SKU already exists");
        assert_eq!(ApiError::product_not_found().message, "Product not found");
    }
}
