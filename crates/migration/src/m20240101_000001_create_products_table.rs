use sea_orm_migration::{prelude::*, schema::*};

use crate::external::create_uuid_extension;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        create_uuid_extension(manager).await?;

        manager
            .create_table(
                Table::create()
                    .table(Products::Table)
                    .if_not_exists()
                    .col(string_len(Products::ProductId, 32).primary_key())
                    .col(string_len(Products::ProductCategoryName, 255))
                    .col(integer(Products::ProductNameLenght))
                    .col(integer(Products::ProductDescriptionLenght))
                    .col(integer(Products::ProductPhotosQty))
                    .col(integer(Products::ProductWeightG))
                    .col(integer(Products::ProductLengthCm))
                    .col(integer(Products::ProductHeightCm))
                    .col(integer(Products::ProductWidthCm))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_products_category_name")
                    .table(Products::Table)
                    .col(Products::ProductCategoryName)
                    .to_owned(),
            )
            .await?;

        logging::log_migration_step!(self.name(), "products ready");
        Ok(())
    }
}

// Column names keep the dataset's "lenght" spelling
#[derive(DeriveIden)]
pub enum Products {
    Table,
    ProductId,
    ProductCategoryName,
    ProductNameLenght,
    ProductDescriptionLenght,
    ProductPhotosQty,
    ProductWeightG,
    ProductLengthCm,
    ProductHeightCm,
    ProductWidthCm,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_migration_name() {
        assert_eq!(Migration.name(), "m20240101_000001_create_products_table");
    }

    #[test]
    fn test_lenght_idens() {
        assert_eq!(Products::ProductNameLenght.to_string(), "product_name_lenght");
        assert_eq!(
            Products::ProductDescriptionLenght.to_string(),
            "product_description_lenght"
        );
        assert_eq!(Products::Table.to_string(), "products");
    }
}
