// SPDX-License-Identifier: Apache-2.0

#![forbid(unsafe_code)]

mod error;
mod seed;
mod service;
mod store;

pub use error::InventoryError;
pub use seed::{seed_demo_catalog, DEMO_CATALOG};
pub use service::InventoryService;
pub use store::{ProductStore, StoreError};

#[cfg(test)]
mod service_tests;
