//! Orders Entity
//!
//! `orders` is owned outside this schema. Only its string primary key is
//! modelled; the remaining columns are never selected.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "orders")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub order_id: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::reviews::Entity")]
    Reviews,
    #[sea_orm(has_one = "super::payments::Entity")]
    Payment,
    #[sea_orm(has_many = "super::order_items::Entity")]
    OrderItems,
}

impl Related<super::reviews::Entity> for Entity {
    fn to() -> RelationDef { Relation::Reviews.def() }
}

impl Related<super::payments::Entity> for Entity {
    fn to() -> RelationDef { Relation::Payment.def() }
}

impl Related<super::order_items::Entity> for Entity {
    fn to() -> RelationDef { Relation::OrderItems.def() }
}

impl ActiveModelBehavior for ActiveModel {}
