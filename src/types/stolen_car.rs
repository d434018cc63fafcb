use chrono::{DateTime, Utc};
use entity::ReportStatus;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug)]
pub struct RStolenCarCreate {
    pub plate_number: String,
    pub description: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct StolenCarRes {
    pub id: i32,
    pub plate_number: String,
    pub description: String,
    pub status: ReportStatus,
    pub last_seen_location: Option<String>,
    pub created_at: DateTime<Utc>,
    pub reporter_id: i32,
}

impl From<entity::stolen_car::Model> for StolenCarRes {
    fn from(m: entity::stolen_car::Model) -> Self {
        Self {
            id: m.id,
            plate_number: m.plate_number,
            description: m.description,
            status: m.status,
            last_seen_location: m.last_seen_location,
            created_at: m.created_at,
            reporter_id: m.reporter_id,
        }
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct RSighting {
    pub plate_number: String,
    pub location: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct SightingRes {
    pub message: String,
    pub found: bool,
}
