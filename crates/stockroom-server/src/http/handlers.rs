// SPDX-License-Identifier: Apache-2.0

use crate::AppState;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use stockroom_api::{map_error, ApiError, DeleteProductResponseDto, ErrorBodyDto, ProductDto};
use stockroom_inventory::InventoryError;
use stockroom_model::{CreateProductInput, ProductId, ProductPatch};
use tracing::error;

fn api_error_response(err: &ApiError) -> Response {
    let mapping = map_error(err);
    let status =
        StatusCode::from_u16(mapping.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(ErrorBodyDto::from(err))).into_response()
}

fn api_error_for(err: &InventoryError) -> ApiError {
    match err {
        InventoryError::Validation(message) => ApiError::validation_failed(message.clone()),
        InventoryError::SkuConflict => ApiError::sku_conflict(),
        InventoryError::NotFound(_) => ApiError::product_not_found(),
        InventoryError::Store(message) => ApiError::internal(message.clone()),
    }
}

fn service_error_response(err: &InventoryError, route: &'static str) -> Response {
    if let InventoryError::Store(message) = err {
        error!(route, error = %message, "store failure");
    }
    api_error_response(&api_error_for(err))
}

pub(crate) async fn healthz_handler() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

pub(crate) async fn list_products_handler(State(state): State<AppState>) -> Response {
    match state.service.list().await {
        Ok(products) => {
            let body: Vec<ProductDto> = products.into_iter().map(ProductDto::from).collect();
            Json(body).into_response()
        }
        Err(err) => service_error_response(&err, "/api/products"),
    }
}

pub(crate) async fn get_product_handler(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
) -> Response {
    match state.service.get(id).await {
        Ok(product) => Json(ProductDto::from(product)).into_response(),
        Err(err) => service_error_response(&err, "/api/products/:id"),
    }
}

pub(crate) async fn create_product_handler(
    State(state): State<AppState>,
    Json(input): Json<CreateProductInput>,
) -> Response {
    match state.service.create(input).await {
        Ok(product) => {
            (StatusCode::CREATED, Json(ProductDto::from(product))).into_response()
        }
        Err(err) => service_error_response(&err, "/api/products"),
    }
}

pub(crate) async fn update_product_handler(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
    Json(patch): Json<ProductPatch>,
) -> Response {
    match state.service.update(id, patch).await {
        Ok(product) => Json(ProductDto::from(product)).into_response(),
        Err(err) => service_error_response(&err, "/api/products/:id"),
    }
}

pub(crate) async fn delete_product_handler(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
) -> Response {
    match state.service.delete(id).await {
        Ok(product) => Json(DeleteProductResponseDto::deleted(product)).into_response(),
        Err(err) => service_error_response(&err, "/api/products/:id"),
    }
}
