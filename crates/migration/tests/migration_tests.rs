//! Migrator behaviour against an in-memory SQLite store.

mod common;

use ::error::AppError;
use sea_orm::{EntityTrait, PaginatorTrait};
use migration::{
    Migrator, MigratorTrait, SchemaManager,
    external::missing_external_tables,
    migrator::{migration_states, pending_migration_names},
};

#[tokio::test]
async fn test_migrator_creates_all_tables() {
    let db = common::migrated_db().await;
    let manager = SchemaManager::new(db.connection());

    for table in ["products", "reviews", "payments", "order_items"] {
        assert!(manager.has_table(table).await.unwrap(), "{} should exist", table);
    }
}

#[tokio::test]
async fn test_migrator_creates_indexes() {
    let db = common::migrated_db().await;
    let manager = SchemaManager::new(db.connection());

    assert!(
        manager
            .has_index("products", "idx_products_category_name")
            .await
            .unwrap()
    );
    assert!(
        manager
            .has_index("payments", "idx_payments_payment_type")
            .await
            .unwrap()
    );
}

#[tokio::test]
async fn test_rerunning_migrator_is_a_no_op() {
    let db = common::migrated_db().await;

    Migrator::up(db.connection(), None).await.unwrap();

    assert!(pending_migration_names(db.connection()).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_rerunning_each_migration_directly_is_a_no_op() {
    let db = common::migrated_db().await;
    common::insert(&db, common::product("P1")).await.unwrap();

    let manager = SchemaManager::new(db.connection());
    for migration in Migrator::migrations() {
        migration.up(&manager).await.unwrap();
    }

    // Existing rows are untouched
    assert_eq!(entity::Products::find().count(db.connection()).await.unwrap(), 1);
}

#[tokio::test]
async fn test_status_before_and_after() {
    let db = common::db_with_external_tables().await;

    let before = migration_states(db.connection()).await.unwrap();
    assert_eq!(before.len(), 4);
    assert!(before.iter().all(|m| !m.applied));
    assert_eq!(before[0].name, "m20240101_000001_create_products_table");

    Migrator::up(db.connection(), None).await.unwrap();

    let after = migration_states(db.connection()).await.unwrap();
    assert!(after.iter().all(|m| m.applied));
}

#[tokio::test]
async fn test_missing_orders_table_fails_with_migration_error() {
    let db = common::empty_db().await;

    let err: AppError = Migrator::up(db.connection(), None).await.unwrap_err().into();

    assert!(matches!(err, AppError::Migration { .. }), "got {:?}", err);
    assert!(err.message().contains("orders"));

    // products has no external parents and was applied before the failure
    let manager = SchemaManager::new(db.connection());
    assert!(manager.has_table("products").await.unwrap());
    assert!(!manager.has_table("reviews").await.unwrap());
}

#[tokio::test]
async fn test_missing_sellers_table_blocks_order_items() {
    let db = common::empty_db().await;
    sea_orm::ConnectionTrait::execute_unprepared(
        db.connection(),
        "CREATE TABLE orders (order_id VARCHAR(32) NOT NULL PRIMARY KEY)",
    )
    .await
    .unwrap();

    let err: AppError = Migrator::up(db.connection(), None).await.unwrap_err().into();
    assert!(err.message().contains("sellers"));

    let pending = pending_migration_names(db.connection()).await.unwrap();
    assert_eq!(pending, vec!["m20240101_000004_create_order_items_table"]);
}

#[tokio::test]
async fn test_missing_external_tables() {
    let db = common::empty_db().await;
    assert_eq!(
        missing_external_tables(db.connection()).await.unwrap(),
        vec!["orders", "sellers"]
    );

    let db = common::db_with_external_tables().await;
    assert!(missing_external_tables(db.connection()).await.unwrap().is_empty());
}
