use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Product::Table)
                    .if_not_exists()
                    .col(pk_auto(Product::Id))
                    .col(string_len(Product::Name, 256).not_null())
                    .col(integer(Product::FamilyId).not_null())
                    .col(string_null(Product::Image))
                    // Descriptor columns hold free text such as "3W-40W" and
                    // "4000K,5000K,6000K"; parsing happens in the service layer.
                    .col(string_null(Product::Wattage))
                    .col(string_null(Product::ColorTemp))
                    .col(string_null(Product::MountingType))
                    .col(string_null(Product::LightDistribution))
                    .col(string_null(Product::LampType))
                    .col(string_null(Product::IpRating))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_product_family")
                            .from(Product::Table, Product::FamilyId)
                            .to(Family::Table, Family::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Product::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Product {
    Table,
    Id,
    Name,
    FamilyId,
    Image,
    Wattage,
    ColorTemp,
    MountingType,
    LightDistribution,
    LampType,
    IpRating,
}

#[derive(DeriveIden)]
enum Family { Table, Id }
