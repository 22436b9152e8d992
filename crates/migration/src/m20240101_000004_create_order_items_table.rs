use sea_orm_migration::{prelude::*, schema::*};

use crate::external::{Orders, Sellers, create_uuid_extension, require_table};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        create_uuid_extension(manager).await?;
        require_table(manager, "orders").await?;
        require_table(manager, "sellers").await?;

        manager
            .create_table(
                Table::create()
                    .table(OrderItems::Table)
                    .if_not_exists()
                    .col(integer(OrderItems::OrderItemId))
                    .col(string_len(OrderItems::OrderId, 32))
                    .col(string_len(OrderItems::ProductId, 32))
                    .col(string_len(OrderItems::SellerId, 32))
                    .col(timestamp(OrderItems::ShippingLimitDate))
                    .col(decimal_len(OrderItems::Price, 10, 2))
                    .col(decimal_len(OrderItems::FreightValue, 10, 2))
                    .primary_key(
                        Index::create()
                            .name("pk_order_items")
                            .col(OrderItems::OrderItemId)
                            .col(OrderItems::OrderId)
                            .col(OrderItems::ProductId)
                            .col(OrderItems::SellerId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_order_items_order_id")
                            .from(OrderItems::Table, OrderItems::OrderId)
                            .to(Orders::Table, Orders::OrderId)
                            .on_delete(ForeignKeyAction::NoAction)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_order_items_product_id")
                            .from(OrderItems::Table, OrderItems::ProductId)
                            .to(Products::Table, Products::ProductId)
                            .on_delete(ForeignKeyAction::NoAction)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_order_items_seller_id")
                            .from(OrderItems::Table, OrderItems::SellerId)
                            .to(Sellers::Table, Sellers::SellerId)
                            .on_delete(ForeignKeyAction::NoAction)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await?;

        logging::log_migration_step!(self.name(), "order_items ready");
        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum OrderItems {
    Table,
    OrderItemId,
    OrderId,
    ProductId,
    SellerId,
    ShippingLimitDate,
    Price,
    FreightValue,
}

// Reference to products table
#[derive(DeriveIden)]
pub enum Products {
    Table,
    ProductId,
}
