#![forbid(unsafe_code)]

use axum::extract::DefaultBodyLimit;
use axum::routing::get;
use axum::Router;
use std::sync::atomic::AtomicU64;
use std::sync::Arc;
use stockroom_inventory::InventoryService;

mod http;
mod middleware;

pub const CRATE_NAME: &str = "stockroom-server";

const MAX_BODY_BYTES: usize = 16 * 1024;

#[derive(Clone)]
pub struct AppState {
    pub service: Arc<InventoryService>,
    pub request_id_seed: Arc<AtomicU64>,
}

impl AppState {
    #[must_use]
    pub fn new(service: Arc<InventoryService>) -> Self {
        Self {
            service,
            request_id_seed: Arc::new(AtomicU64::new(1)),
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(http::handlers::healthz_handler))
        .route(
            "/api/products",
            get(http::handlers::list_products_handler).post(http::handlers::create_product_handler),
        )
        .route(
            "/api/products/:id",
            get(http::handlers::get_product_handler)
                .put(http::handlers::update_product_handler)
                .delete(http::handlers::delete_product_handler),
        )
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            middleware::request_tracing::request_tracing_middleware,
        ))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .with_state(state)
}
