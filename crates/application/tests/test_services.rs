use std::sync::Arc;

use application::{AdminService, InventoryService, NewProduct, ProductUpdate};
use domain::errors::DomainError;
use domain::value_objects::{MovementKind, UserRole};
use storage::{
    DocumentStore, SledGroupRepository, SledMovementRepository, SledProductRepository,
    SledUserRepository,
};

struct TestEnv {
    inventory: InventoryService,
    admin: AdminService,
    _dir: tempfile::TempDir,
}

fn build_env() -> TestEnv {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = DocumentStore::open(dir.path().join("db")).expect("open");

    let inventory = InventoryService::new(
        Arc::new(SledProductRepository::new(&store).expect("products")),
        Arc::new(SledMovementRepository::new(&store).expect("movements")),
    );
    let admin = AdminService::new(
        Arc::new(SledUserRepository::new(&store).expect("users")),
        Arc::new(SledGroupRepository::new(&store).expect("groups")),
    );

    TestEnv {
        inventory,
        admin,
        _dir: dir,
    }
}

fn new_product(name: &str) -> NewProduct {
    NewProduct {
        name: name.to_string(),
        sku: "VW 24.250".to_string(),
        category: "Filtro de Óleo".to_string(),
        quantity: 5,
        reorder_level: 1,
        location: "A31".to_string(),
        price: 85.50,
    }
}

#[tokio::test]
async fn test_product_crud_roundtrip() {
    let env = build_env();

    let product = env
        .inventory
        .add_product("loja-1", new_product("Filtro de Óleo MANN WO 612"))
        .await
        .expect("add");

    let edited = env
        .inventory
        .edit_product(
            "loja-1",
            product.id(),
            ProductUpdate {
                name: "Filtro de Óleo MANN WO 612".to_string(),
                sku: "VW 24.250; MB 1718".to_string(),
                category: "Filtro de Óleo".to_string(),
                reorder_level: 2,
                location: "B34".to_string(),
                price: 76.30,
            },
        )
        .await
        .expect("edit");
    assert_eq!(edited.location(), "B34");
    assert_eq!(edited.group_id(), "loja-1");
    // Quantity is untouched by edits
    assert_eq!(edited.quantity(), 5);

    env.inventory
        .delete_product("loja-1", product.id())
        .await
        .expect("delete");
    let missing = env
        .inventory
        .delete_product("loja-1", product.id())
        .await
        .expect_err("second delete must fail");
    assert!(matches!(missing, DomainError::ProductNotFound(_)));
}

#[tokio::test]
async fn test_movement_updates_product_and_history() {
    let env = build_env();
    let product = env
        .inventory
        .add_product("loja-1", new_product("Filtro de Ar UNIFILTER UST65801"))
        .await
        .expect("add");

    env.inventory
        .record_movement(
            "loja-1",
            product.id(),
            MovementKind::Exit,
            2,
            Some("venda".to_string()),
        )
        .await
        .expect("exit");
    env.inventory
        .record_movement("loja-1", product.id(), MovementKind::Entry, 10, None)
        .await
        .expect("entry");

    let reloaded = env
        .inventory
        .get_product("loja-1", product.id())
        .await
        .expect("get")
        .expect("exists");
    assert_eq!(reloaded.quantity(), 13);

    let history = env
        .inventory
        .movement_history("loja-1", product.id())
        .await
        .expect("history");
    assert_eq!(history.len(), 2);
    // Newest first
    assert_eq!(history[0].kind(), MovementKind::Entry);
}

#[tokio::test]
async fn test_insufficient_stock_is_rejected_and_not_persisted() {
    let env = build_env();
    let product = env
        .inventory
        .add_product("loja-1", new_product("Filtro de Combustível MANN PU 1046"))
        .await
        .expect("add");

    let err = env
        .inventory
        .record_movement("loja-1", product.id(), MovementKind::Exit, 99, None)
        .await
        .expect_err("must reject");
    assert!(matches!(err, DomainError::InsufficientStock { .. }));

    let reloaded = env
        .inventory
        .get_product("loja-1", product.id())
        .await
        .expect("get")
        .expect("exists");
    assert_eq!(reloaded.quantity(), 5);
    assert!(env
        .inventory
        .movement_history("loja-1", product.id())
        .await
        .expect("history")
        .is_empty());
}

#[tokio::test]
async fn test_seed_is_idempotent_per_group() {
    let env = build_env();

    assert_eq!(
        env.inventory.seed_initial_catalog("loja-1").await.expect("seed"),
        32
    );
    assert_eq!(
        env.inventory.seed_initial_catalog("loja-1").await.expect("seed again"),
        0
    );
    // Another tenant seeds independently
    assert_eq!(
        env.inventory.seed_initial_catalog("loja-2").await.expect("seed"),
        32
    );

    let products = env.inventory.list_products("loja-1").await.expect("list");
    assert_eq!(products.len(), 32);
}

#[tokio::test]
async fn test_group_deactivation_cascades_to_users() {
    let env = build_env();

    let group = env
        .admin
        .create_group("Loja Matriz", "Loja principal")
        .await
        .expect("group");
    let user = env
        .admin
        .create_user("maria", UserRole::User, group.id())
        .await
        .expect("user");
    assert!(user.is_active());

    env.admin
        .set_group_active(group.id(), false)
        .await
        .expect("deactivate");

    let users = env.admin.list_users(Some(group.id())).await.expect("list");
    assert!(users.iter().all(|u| !u.is_active()));
}

#[tokio::test]
async fn test_group_with_active_users_cannot_be_deleted() {
    let env = build_env();

    let group = env
        .admin
        .create_group("Loja Filial", "")
        .await
        .expect("group");
    let user = env
        .admin
        .create_user("joão", UserRole::Admin, group.id())
        .await
        .expect("user");

    let err = env
        .admin
        .delete_group(group.id())
        .await
        .expect_err("must refuse");
    assert!(matches!(err, DomainError::GroupHasActiveUsers(_)));

    // Deactivate the user, then deletion (= deactivation) succeeds
    env.admin
        .delete_user(user.id())
        .await
        .expect("deactivate user");
    let deleted = env.admin.delete_group(group.id()).await.expect("delete");
    assert!(!deleted.is_active());
}

#[tokio::test]
async fn test_user_requires_existing_group() {
    let env = build_env();
    let err = env
        .admin
        .create_user("maria", UserRole::User, "missing-group")
        .await
        .expect_err("must fail");
    assert!(matches!(err, DomainError::GroupNotFound(_)));
}
