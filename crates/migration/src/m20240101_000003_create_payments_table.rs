use sea_orm_migration::{prelude::*, schema::*};

use crate::external::{Orders, create_uuid_extension, require_table};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        create_uuid_extension(manager).await?;
        require_table(manager, "orders").await?;

        // The primary key doubles as the order reference: one payment row per order
        manager
            .create_table(
                Table::create()
                    .table(Payments::Table)
                    .if_not_exists()
                    .col(string_len(Payments::OrderId, 32).primary_key())
                    .col(integer(Payments::PaymentSequential))
                    .col(string_len(Payments::PaymentType, 32))
                    .col(integer(Payments::PaymentInstallments))
                    .col(decimal_len(Payments::PaymentValue, 10, 2))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_payments_order_id")
                            .from(Payments::Table, Payments::OrderId)
                            .to(Orders::Table, Orders::OrderId)
                            .on_delete(ForeignKeyAction::NoAction)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_payments_payment_type")
                    .table(Payments::Table)
                    .col(Payments::PaymentType)
                    .to_owned(),
            )
            .await?;

        logging::log_migration_step!(self.name(), "payments ready");
        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Payments {
    Table,
    OrderId,
    PaymentSequential,
    PaymentType,
    PaymentInstallments,
    PaymentValue,
}
