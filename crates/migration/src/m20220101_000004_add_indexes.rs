use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Family: index on category_id
        manager
            .create_index(
                Index::create()
                    .name("idx_family_category")
                    .table(Family::Table)
                    .col(Family::CategoryId)
                    .to_owned(),
            )
            .await?;

        // Product: index on family_id
        manager
            .create_index(
                Index::create()
                    .name("idx_product_family")
                    .table(Product::Table)
                    .col(Product::FamilyId)
                    .to_owned(),
            )
            .await?;

        // Product: index on name for the search endpoints
        manager
            .create_index(
                Index::create()
                    .name("idx_product_name")
                    .table(Product::Table)
                    .col(Product::Name)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_family_category").table(Family::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_product_family").table(Product::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_product_name").table(Product::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Family { Table, CategoryId }

#[derive(DeriveIden)]
enum Product { Table, FamilyId, Name }
