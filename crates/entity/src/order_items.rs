//! Order Items Entity
//!
//! Line items of an order. A line item is identified by the full
//! (order_item_id, order_id, product_id, seller_id) tuple, not by
//! `order_item_id` alone.
//!
//! CUSTOMIZATION REGION START: order_items_entity_custom_types
//! This region is preserved during entity regeneration. Add custom types and implementations here.
//! CUSTOMIZATION REGION END

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "order_items")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub order_item_id:       i32,
    #[sea_orm(primary_key, auto_increment = false, column_type = "String(StringLen::N(32))")]
    pub order_id:            String,
    #[sea_orm(primary_key, auto_increment = false, column_type = "String(StringLen::N(32))")]
    pub product_id:          String,
    #[sea_orm(primary_key, auto_increment = false, column_type = "String(StringLen::N(32))")]
    pub seller_id:           String,
    pub shipping_limit_date: DateTime,
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub price:               Decimal,
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub freight_value:       Decimal,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::orders::Entity",
        from = "Column::OrderId",
        to = "super::orders::Column::OrderId",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Order,
    #[sea_orm(
        belongs_to = "super::products::Entity",
        from = "Column::ProductId",
        to = "super::products::Column::ProductId",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Product,
    #[sea_orm(
        belongs_to = "super::sellers::Entity",
        from = "Column::SellerId",
        to = "super::sellers::Column::SellerId",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Seller,
}

impl Related<super::orders::Entity> for Entity {
    fn to() -> RelationDef { Relation::Order.def() }
}

impl Related<super::products::Entity> for Entity {
    fn to() -> RelationDef { Relation::Product.def() }
}

impl Related<super::sellers::Entity> for Entity {
    fn to() -> RelationDef { Relation::Seller.def() }
}

impl ActiveModelBehavior for ActiveModel {}

// CUSTOMIZATION REGION START: order_items_entity_methods
// Add custom methods and trait implementations here
// CUSTOMIZATION REGION END
