use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::Role;

#[derive(Debug, Clone, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub username: String,
    #[serde(skip_serializing)]
    pub hashed_password: String,
    pub role: Role,
    pub driver_id: Option<i32>,           // FK -> driver.id (nullable)
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::driver::Entity",
        from = "Column::DriverId",
        to   = "super::driver::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Driver,
    #[sea_orm(has_many = "super::stolen_car::Entity")]
    StolenCar,
}

impl Related<super::driver::Entity> for Entity {
    fn to() -> RelationDef { Relation::Driver.def() }
}

impl Related<super::stolen_car::Entity> for Entity {
    fn to() -> RelationDef { Relation::StolenCar.def() }
}

impl ActiveModelBehavior for ActiveModel {}
