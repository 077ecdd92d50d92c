use crate::{seed_demo_catalog, InventoryError, InventoryService, ProductStore, DEMO_CATALOG};
use stockroom_model::{CreateProductInput, ProductPatch, MISSING_REQUIRED_FIELDS};

fn svc() -> InventoryService {
    InventoryService::new(ProductStore::open_in_memory().expect("open memory store"))
}

fn ale_input(name: &str, sku: &str) -> CreateProductInput {
    CreateProductInput {
        name: Some(name.to_string()),
        quantity: Some(10),
        price: Some(9.99),
        sku: Some(sku.to_string()),
        ..Default::default()
    }
}

#[tokio::test]
async fn create_materializes_defaults_and_identity() {
    let svc = svc();
    let product = svc
        .create(ale_input("Test Ale", "T-1"))
        .await
        .expect("create product");
    assert!(product.id >= 1);
    assert_eq!(product.name, "Test Ale");
    assert_eq!(product.description, "");
    assert_eq!(product.category, "General");
    assert_eq!(product.quantity, 10);
    assert!(!product.created_at.is_empty());

    let fetched = svc.get(product.id).await.expect("get product");
    assert_eq!(fetched, product);
}

#[tokio::test]
async fn create_with_quantity_zero_is_valid() {
    let svc = svc();
    let mut input = ale_input("Empty Keg", "E-0");
    input.quantity = Some(0);
    let product = svc.create(input).await.expect("zero quantity is present");
    assert_eq!(product.quantity, 0);
}

#[tokio::test]
async fn create_missing_fields_is_rejected() {
    let svc = svc();
    let mut input = ale_input("Test Ale", "T-1");
    input.price = None;
    match svc.create(input).await {
        Err(InventoryError::Validation(message)) => {
            assert_eq!(message, MISSING_REQUIRED_FIELDS);
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[tokio::test]
async fn create_negative_quantity_is_rejected_before_the_store() {
    let svc = svc();
    let mut input = ale_input("Phantom Ale", "P-1");
    input.quantity = Some(-3);
    assert!(matches!(
        svc.create(input).await,
        Err(InventoryError::Validation(_))
    ));
    assert!(svc.list().await.expect("list").is_empty());
}

#[tokio::test]
async fn duplicate_sku_fails_and_leaves_store_unchanged() {
    let svc = svc();
    let first = svc
        .create(ale_input("Test Ale", "T-1"))
        .await
        .expect("first create");

    let mut second = ale_input("Other Ale", "T-1");
    second.price = Some(1.23);
    assert!(matches!(
        svc.create(second).await,
        Err(InventoryError::SkuConflict)
    ));

    let all = svc.list().await.expect("list");
    assert_eq!(all, vec![first]);
}

#[tokio::test]
async fn empty_patch_leaves_every_field_unchanged() {
    let svc = svc();
    let created = svc
        .create(ale_input("Test Ale", "T-1"))
        .await
        .expect("create");
    let updated = svc
        .update(created.id, ProductPatch::default())
        .await
        .expect("empty update");
    assert_eq!(updated, created);
}

#[tokio::test]
async fn update_merges_present_fields_and_retains_the_rest() {
    let svc = svc();
    let created = svc
        .create(ale_input("Test Ale", "T-1"))
        .await
        .expect("create");
    let updated = svc
        .update(
            created.id,
            ProductPatch {
                quantity: Some(0),
                category: Some("Seasonal".to_string()),
                ..Default::default()
            },
        )
        .await
        .expect("update");
    assert_eq!(updated.quantity, 0);
    assert_eq!(updated.category, "Seasonal");
    assert_eq!(updated.name, created.name);
    assert_eq!(updated.price, created.price);
    assert_eq!(updated.sku, created.sku);
    assert_eq!(updated.created_at, created.created_at);
}

#[tokio::test]
async fn wire_sku_in_update_body_is_silently_ignored() {
    let svc = svc();
    let created = svc
        .create(ale_input("Test Ale", "T-1"))
        .await
        .expect("create");
    let patch: ProductPatch =
        serde_json::from_str(r#"{"sku":"HIJACKED","name":"Renamed Ale"}"#).expect("parse patch");
    let updated = svc.update(created.id, patch).await.expect("update");
    assert_eq!(updated.sku, "T-1");
    assert_eq!(updated.name, "Renamed Ale");
}

#[tokio::test]
async fn update_rejects_negative_quantity() {
    let svc = svc();
    let created = svc
        .create(ale_input("Test Ale", "T-1"))
        .await
        .expect("create");
    assert!(matches!(
        svc.update(
            created.id,
            ProductPatch {
                quantity: Some(-1),
                ..Default::default()
            },
        )
        .await,
        Err(InventoryError::Validation(_))
    ));
    let current = svc.get(created.id).await.expect("get");
    assert_eq!(current.quantity, 10);
}

#[tokio::test]
async fn operations_on_unknown_id_report_not_found() {
    let svc = svc();
    assert!(matches!(
        svc.get(9999).await,
        Err(InventoryError::NotFound(9999))
    ));
    assert!(matches!(
        svc.update(9999, ProductPatch::default()).await,
        Err(InventoryError::NotFound(9999))
    ));
    assert!(matches!(
        svc.delete(9999).await,
        Err(InventoryError::NotFound(9999))
    ));
}

#[tokio::test]
async fn delete_returns_final_state_and_is_terminal() {
    let svc = svc();
    let created = svc
        .create(ale_input("Test Ale", "T-1"))
        .await
        .expect("create");
    let before_delete = svc
        .update(
            created.id,
            ProductPatch {
                quantity: Some(0),
                ..Default::default()
            },
        )
        .await
        .expect("update");

    let deleted = svc.delete(created.id).await.expect("delete");
    assert_eq!(deleted, before_delete);

    assert!(matches!(
        svc.get(created.id).await,
        Err(InventoryError::NotFound(_))
    ));
    assert!(matches!(
        svc.delete(created.id).await,
        Err(InventoryError::NotFound(_))
    ));
    assert!(matches!(
        svc.update(created.id, ProductPatch::default()).await,
        Err(InventoryError::NotFound(_))
    ));
}

#[tokio::test]
async fn sku_is_reusable_after_delete_but_id_is_not() {
    let svc = svc();
    let first = svc
        .create(ale_input("Test Ale", "T-1"))
        .await
        .expect("create");
    svc.delete(first.id).await.expect("delete");

    let second = svc
        .create(ale_input("Reborn Ale", "T-1"))
        .await
        .expect("sku free after delete");
    assert!(second.id > first.id, "deleted ids must not be reused");
}

#[tokio::test]
async fn list_orders_by_category_then_name_case_sensitively() {
    let svc = svc();
    for (name, category, sku) in [
        ("Zesty Sour", "Ale", "Z-1"),
        ("amber", "Ale", "A-1"),
        ("Bitter", "Ale", "B-1"),
        ("Anything", "Lager", "L-1"),
    ] {
        let mut input = ale_input(name, sku);
        input.category = Some(category.to_string());
        svc.create(input).await.expect("create");
    }
    let names: Vec<String> = svc
        .list()
        .await
        .expect("list")
        .into_iter()
        .map(|p| p.name)
        .collect();
    // BINARY collation sorts uppercase before lowercase within a category.
    assert_eq!(names, ["Bitter", "Zesty Sour", "amber", "Anything"]);
}

#[tokio::test]
async fn seed_populates_an_empty_store_exactly_once() {
    let svc = svc();
    let inserted = seed_demo_catalog(svc.store()).await.expect("seed");
    assert_eq!(inserted, DEMO_CATALOG.len());
    assert_eq!(svc.list().await.expect("list").len(), DEMO_CATALOG.len());

    let second = seed_demo_catalog(svc.store()).await.expect("second seed");
    assert_eq!(second, 0);
    assert_eq!(svc.list().await.expect("list").len(), DEMO_CATALOG.len());
}

#[tokio::test]
async fn store_survives_reopen_on_disk() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("inventory.db");

    let svc = InventoryService::new(ProductStore::open(&path).expect("open store"));
    let created = svc
        .create(ale_input("Test Ale", "T-1"))
        .await
        .expect("create");
    drop(svc);

    let reopened = InventoryService::new(ProductStore::open(&path).expect("reopen store"));
    let fetched = reopened.get(created.id).await.expect("get after reopen");
    assert_eq!(fetched, created);
}
