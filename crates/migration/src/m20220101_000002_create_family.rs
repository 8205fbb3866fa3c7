use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Family::Table)
                    .if_not_exists()
                    .col(pk_auto(Family::Id))
                    .col(string_len(Family::Name, 128).not_null())
                    .col(integer(Family::CategoryId).not_null())
                    .col(string_null(Family::Image))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_family_category")
                            .from(Family::Table, Family::CategoryId)
                            .to(Category::Table, Category::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Family::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Family {
    Table,
    Id,
    Name,
    CategoryId,
    Image,
}

#[derive(DeriveIden)]
enum Category { Table, Id }
