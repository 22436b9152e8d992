//! Products Entity
//!
//! Catalogue entries referenced by order items. The `*_lenght` column names
//! keep the spelling of the source dataset.
//!
//! CUSTOMIZATION REGION START: products_entity_custom_types
//! This region is preserved during entity regeneration. Add custom types and implementations here.
//! CUSTOMIZATION REGION END

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "String(StringLen::N(32))")]
    pub product_id:                 String,
    pub product_category_name:      String,
    pub product_name_lenght:        i32,
    pub product_description_lenght: i32,
    pub product_photos_qty:         i32,
    pub product_weight_g:           i32,
    pub product_length_cm:          i32,
    pub product_height_cm:          i32,
    pub product_width_cm:           i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::order_items::Entity")]
    OrderItems,
}

impl Related<super::order_items::Entity> for Entity {
    fn to() -> RelationDef { Relation::OrderItems.def() }
}

impl ActiveModelBehavior for ActiveModel {}

// CUSTOMIZATION REGION START: products_entity_methods
// Add custom methods and trait implementations here
// CUSTOMIZATION REGION END
