//! # Common Test Utilities
//!
//! Shared infrastructure for the migration integration tests: an in-memory
//! SQLite store, key-only stand-ins for the external tables, and row
//! fixtures.

#![allow(dead_code)]

use std::{str::FromStr, sync::Once};

use chrono::NaiveDateTime;
use entity::{order_items, orders, payments, products, reviews, sellers};
use migration::{Migrator, MigratorTrait, SeaDb};
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ConnectionTrait, EntityTrait, IntoActiveModel, Set};

/// Initialize test logging (run once per test session)
static INIT: Once = Once::new();

/// Initialize test environment including structured logging
pub fn init_test_env() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_max_level(tracing::Level::DEBUG)
            .try_init();
    });
}

/// A fresh in-memory store with nothing in it
pub async fn empty_db() -> SeaDb {
    init_test_env();
    SeaDb::from_connection_string("sqlite::memory:")
        .await
        .expect("in-memory SQLite should connect")
}

/// A store holding only the key-only `orders` and `sellers` tables
pub async fn db_with_external_tables() -> SeaDb {
    let db = empty_db().await;
    let conn = db.connection();
    conn.execute_unprepared("CREATE TABLE orders (order_id VARCHAR(32) NOT NULL PRIMARY KEY)")
        .await
        .expect("orders fixture");
    conn.execute_unprepared("CREATE TABLE sellers (seller_id VARCHAR(32) NOT NULL PRIMARY KEY)")
        .await
        .expect("sellers fixture");
    db
}

/// External tables plus all migrations applied
pub async fn migrated_db() -> SeaDb {
    let db = db_with_external_tables().await;
    Migrator::up(db.connection(), None).await.expect("migrations should apply");
    db
}

pub fn ts(value: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S").expect("valid timestamp")
}

pub fn dec(value: &str) -> Decimal { Decimal::from_str(value).expect("valid decimal") }

pub async fn insert_order(db: &SeaDb, order_id: &str) {
    orders::Entity::insert(orders::ActiveModel {
        order_id: Set(order_id.to_string()),
    })
    .exec_without_returning(db.connection())
    .await
    .expect("order fixture");
}

pub async fn insert_seller(db: &SeaDb, seller_id: &str) {
    sellers::Entity::insert(sellers::ActiveModel {
        seller_id: Set(seller_id.to_string()),
    })
    .exec_without_returning(db.connection())
    .await
    .expect("seller fixture");
}

/// The `P1/toys/10/200/3/500/10/5/5` catalogue row
pub fn product(product_id: &str) -> products::ActiveModel {
    products::ActiveModel {
        product_id:                 Set(product_id.to_string()),
        product_category_name:      Set("toys".to_string()),
        product_name_lenght:        Set(10),
        product_description_lenght: Set(200),
        product_photos_qty:         Set(3),
        product_weight_g:           Set(500),
        product_length_cm:          Set(10),
        product_height_cm:          Set(5),
        product_width_cm:           Set(5),
    }
}

pub fn review(review_id: &str, order_id: &str) -> reviews::ActiveModel {
    reviews::ActiveModel {
        review_id:               Set(review_id.to_string()),
        order_id:                Set(order_id.to_string()),
        review_score:            Set(5),
        review_comment_title:    Set(None),
        review_comment_message:  Set(Some("chegou antes do prazo".to_string())),
        review_creation_date:    Set(ts("2018-01-18 00:00:00")),
        review_answer_timestamp: Set(ts("2018-01-18 21:46:59")),
    }
}

pub fn payment(order_id: &str) -> payments::ActiveModel {
    payments::ActiveModel {
        order_id:             Set(order_id.to_string()),
        payment_sequential:   Set(1),
        payment_type:         Set("credit_card".to_string()),
        payment_installments: Set(8),
        payment_value:        Set(dec("99.33")),
    }
}

pub fn order_item(order_item_id: i32, order_id: &str, product_id: &str, seller_id: &str) -> order_items::ActiveModel {
    order_items::ActiveModel {
        order_item_id:       Set(order_item_id),
        order_id:            Set(order_id.to_string()),
        product_id:          Set(product_id.to_string()),
        seller_id:           Set(seller_id.to_string()),
        shipping_limit_date: Set(ts("2017-09-19 09:45:35")),
        price:               Set(dec("58.90")),
        freight_value:       Set(dec("13.29")),
    }
}

/// Inserts an active model, converting the failure into `AppError`.
pub async fn insert<A>(db: &SeaDb, active: A) -> error::Result<()>
where
    A: ActiveModelTrait + Send,
    <A::Entity as EntityTrait>::Model: IntoActiveModel<A>,
{
    <A::Entity as EntityTrait>::insert(active)
        .exec_without_returning(db.connection())
        .await?;
    Ok(())
}
