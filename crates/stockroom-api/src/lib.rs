// SPDX-License-Identifier: Apache-2.0

#![forbid(unsafe_code)]

mod dto;
mod error_mapping;
mod errors;

pub use dto::{DeleteProductResponseDto, ProductDto, PRODUCT_DELETED_MESSAGE};
pub use error_mapping::{map_error, ApiErrorMapping};
pub use errors::{ApiError, ApiErrorCode, ErrorBodyDto};
