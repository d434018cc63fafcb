pub use sea_orm_migration::prelude::*;

mod m20250101_000001_create_driver_table;
mod m20250101_000002_create_user_table;
mod m20250101_000003_create_car_table;
mod m20250101_000004_create_stolen_car_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250101_000001_create_driver_table::Migration),
            Box::new(m20250101_000002_create_user_table::Migration),
            Box::new(m20250101_000003_create_car_table::Migration),
            Box::new(m20250101_000004_create_stolen_car_table::Migration),
        ]
    }
}
