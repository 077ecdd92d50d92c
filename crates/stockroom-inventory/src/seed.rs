// SPDX-License-Identifier: Apache-2.0

use crate::store::{ProductStore, StoreError};
use stockroom_model::ProductDraft;
use tracing::info;

/// Demo catalog: (name, description, quantity, price, category, sku).
pub const DEMO_CATALOG: &[(&str, &str, i64, f64, &str, &str)] = &[
    (
        "Golden Lager",
        "Classic light lager with crisp finish, 4.5% ABV",
        240,
        8.99,
        "Lager",
        "BEER-LAG-001",
    ),
    (
        "Amber Ale",
        "Rich amber ale with caramel notes, 5.2% ABV",
        180,
        10.99,
        "Ale",
        "BEER-ALE-001",
    ),
    (
        "India Pale Ale",
        "Hoppy IPA with citrus and pine flavors, 6.8% ABV",
        320,
        12.99,
        "IPA",
        "BEER-IPA-001",
    ),
    (
        "Dark Stout",
        "Robust stout with coffee and chocolate notes, 7.2% ABV",
        150,
        13.99,
        "Stout",
        "BEER-STT-001",
    ),
    (
        "Wheat Beer",
        "Smooth wheat beer with banana and clove hints, 5.0% ABV",
        200,
        9.99,
        "Wheat Beer",
        "BEER-WHT-001",
    ),
    (
        "Pilsner Premium",
        "Czech-style pilsner with noble hop character, 4.8% ABV",
        280,
        9.49,
        "Lager",
        "BEER-LAG-002",
    ),
    (
        "Porter Classic",
        "Traditional porter with roasted malt flavor, 6.0% ABV",
        120,
        11.99,
        "Porter",
        "BEER-POR-001",
    ),
    (
        "Belgian Blonde",
        "Belgian-style blonde ale, fruity and spicy, 6.5% ABV",
        95,
        14.99,
        "Ale",
        "BEER-ALE-002",
    ),
    (
        "Double IPA",
        "Bold double IPA with intense hop flavor, 8.5% ABV",
        160,
        15.99,
        "IPA",
        "BEER-IPA-002",
    ),
    (
        "Pale Ale",
        "American pale ale with balanced malt and hops, 5.5% ABV",
        210,
        10.49,
        "Ale",
        "BEER-ALE-003",
    ),
    (
        "Session IPA",
        "Light-bodied session IPA, easy drinking, 4.2% ABV",
        300,
        9.99,
        "IPA",
        "BEER-IPA-003",
    ),
    (
        "Hefeweizen",
        "Bavarian wheat beer, unfiltered and refreshing, 5.3% ABV",
        175,
        10.99,
        "Wheat Beer",
        "BEER-WHT-002",
    ),
    (
        "Red Ale",
        "Irish red ale with toffee and biscuit notes, 5.8% ABV",
        140,
        11.49,
        "Ale",
        "BEER-ALE-004",
    ),
    (
        "Imperial Stout",
        "High-gravity imperial stout, rich and complex, 10.0% ABV",
        80,
        18.99,
        "Stout",
        "BEER-STT-002",
    ),
    (
        "Craft Lager",
        "Modern craft lager with clean finish, 4.7% ABV",
        260,
        9.99,
        "Lager",
        "BEER-LAG-003",
    ),
    (
        "Sour Ale",
        "Fruity sour ale with tart berry flavors, 5.5% ABV",
        110,
        13.49,
        "Sour",
        "BEER-SOU-001",
    ),
    (
        "Brown Ale",
        "Nutty brown ale with sweet malt character, 5.6% ABV",
        130,
        10.99,
        "Ale",
        "BEER-ALE-005",
    ),
    (
        "Barrel-Aged Stout",
        "Bourbon barrel-aged stout, premium edition, 11.5% ABV",
        45,
        24.99,
        "Stout",
        "BEER-STT-003",
    ),
    (
        "Hazy IPA",
        "New England hazy IPA, juicy and tropical, 6.9% ABV",
        220,
        13.99,
        "IPA",
        "BEER-IPA-004",
    ),
    (
        "Light Beer",
        "Low-calorie light beer, crisp and refreshing, 3.8% ABV",
        350,
        7.99,
        "Lager",
        "BEER-LAG-004",
    ),
];

/// Populates an empty store with the demo catalog. A store that already
/// contains products is left untouched and `0` is returned.
pub async fn seed_demo_catalog(store: &ProductStore) -> Result<usize, StoreError> {
    if store.count().await? > 0 {
        info!("database already contains products");
        return Ok(0);
    }
    for (name, description, quantity, price, category, sku) in DEMO_CATALOG {
        let draft = ProductDraft {
            name: (*name).to_string(),
            description: (*description).to_string(),
            quantity: *quantity,
            price: *price,
            category: (*category).to_string(),
            sku: (*sku).to_string(),
        };
        store.insert(&draft).await?;
    }
    info!("database initialized with {} products", DEMO_CATALOG.len());
    Ok(DEMO_CATALOG.len())
}
