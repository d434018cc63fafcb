use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::ReportStatus;

#[derive(Debug, Clone, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "stolen_car")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(indexed)]
    pub plate_number: String,
    pub description: String,
    pub status: ReportStatus,
    pub last_seen_location: Option<String>,
    pub created_at: DateTimeUtc,
    pub reporter_id: i32,                 // FK -> user.id
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::ReporterId",
        to   = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Reporter,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef { Relation::Reporter.def() }
}

impl ActiveModelBehavior for ActiveModel {}
