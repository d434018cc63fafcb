use sea_orm_migration::{prelude::*};

use super::m20250101_000002_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.create_table(
            Table::create()
                .table(StolenCar::Table)
                .if_not_exists()
                .col(
                    ColumnDef::new(StolenCar::Id)
                        .integer()
                        .not_null()
                        .auto_increment()
                        .primary_key()
                )
                .col(ColumnDef::new(StolenCar::PlateNumber).string().not_null())
                .col(ColumnDef::new(StolenCar::Description).string().not_null())
                .col(ColumnDef::new(StolenCar::Status).string_len(16).not_null().default("reported"))
                .col(ColumnDef::new(StolenCar::LastSeenLocation).string().null())
                .col(ColumnDef::new(StolenCar::CreatedAt).timestamp_with_time_zone().not_null().default(Expr::current_timestamp()))
                .col(ColumnDef::new(StolenCar::ReporterId).integer().not_null())
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_stolen_car_reporter")
                        .from(StolenCar::Table, StolenCar::ReporterId)
                        .to(User::Table, User::Id)
                        .on_delete(ForeignKeyAction::Cascade)
                        .on_update(ForeignKeyAction::Cascade)
                )
                .to_owned(),
        ).await?;

        // Sightings look reports up by plate and status.
        m.create_index(
            Index::create()
                .name("idx_stolen_car_plate_status")
                .table(StolenCar::Table)
                .col(StolenCar::PlateNumber)
                .col(StolenCar::Status)
                .to_owned(),
        ).await?;

        Ok(())
    }

    async fn down(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.drop_table(Table::drop().table(StolenCar::Table).if_exists().to_owned()).await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum StolenCar {
    Table,
    Id,
    PlateNumber,
    Description,
    Status,
    LastSeenLocation,
    CreatedAt,
    ReporterId,
}
