// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApiErrorCode {
    ValidationFailed,
    SkuConflict,
    ProductNotFound,
    Internal,
}

/// An API-layer failure: a code driving the HTTP status and the message that
/// becomes the `{error}` body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub code: ApiErrorCode,
    pub message: String,
}

impl ApiError {
    #[must_use]
    pub fn new(code: ApiErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn validation_failed(message: impl Into<String>) -> Self {
        Self::new(ApiErrorCode::ValidationFailed, message)
    }

    #[must_use]
    pub fn sku_conflict() -> Self {
        Self::new(ApiErrorCode::SkuConflict, "SKU already exists")
    }

    #[must_use]
    pub fn product_not_found() -> Self {
        Self::new(ApiErrorCode::ProductNotFound, "Product not found")
    }

    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ApiErrorCode::Internal, message)
    }
}

/// Every failing response carries exactly this body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ErrorBodyDto {
    pub error: String,
}

impl From<&ApiError> for ErrorBodyDto {
    fn from(err: &ApiError) -> Self {
        Self {
            error: err.message.clone(),
        }
    }
}
