use sea_orm_migration::{prelude::*};

use super::m20250101_000001_create_driver_table::Driver;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Car::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Car::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key()
                    )
                    .col(
                        ColumnDef::new(Car::PlateNumber)
                            .string()
                            .not_null()
                            .unique_key()
                    )
                    .col(ColumnDef::new(Car::Model).string().not_null())
                    .col(ColumnDef::new(Car::Color).string().not_null())
                    .col(ColumnDef::new(Car::OwnerId).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_car_owner")
                            .from(Car::Table, Car::OwnerId)
                            .to(Driver::Table, Driver::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade)
                    )
                    .to_owned()
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_car_owner")
                    .table(Car::Table)
                    .col(Car::OwnerId)
                    .to_owned(),
            )
            .await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Car::Table).if_exists().to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Car {
    Table,
    Id,
    PlateNumber,
    Model,
    Color,
    OwnerId,
}
