use sea_orm_migration::{prelude::*, schema::*};

use crate::external::{Orders, create_uuid_extension, require_table};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        create_uuid_extension(manager).await?;
        require_table(manager, "orders").await?;

        manager
            .create_table(
                Table::create()
                    .table(Reviews::Table)
                    .if_not_exists()
                    .col(string_len(Reviews::ReviewId, 32).primary_key())
                    .col(string_len(Reviews::OrderId, 32))
                    .col(integer(Reviews::ReviewScore))
                    .col(string_len_null(Reviews::ReviewCommentTitle, 255))
                    .col(text_null(Reviews::ReviewCommentMessage))
                    .col(timestamp(Reviews::ReviewCreationDate))
                    .col(timestamp(Reviews::ReviewAnswerTimestamp))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reviews_order_id")
                            .from(Reviews::Table, Reviews::OrderId)
                            .to(Orders::Table, Orders::OrderId)
                            .on_delete(ForeignKeyAction::NoAction)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await?;

        logging::log_migration_step!(self.name(), "reviews ready");
        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Reviews {
    Table,
    ReviewId,
    OrderId,
    ReviewScore,
    ReviewCommentTitle,
    ReviewCommentMessage,
    ReviewCreationDate,
    ReviewAnswerTimestamp,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_migration_name() {
        assert_eq!(Migration.name(), "m20240101_000002_create_reviews_table");
    }
}
