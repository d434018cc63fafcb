use entity::Role;
use serde::{Deserialize, Serialize};

use crate::types::stolen_car::StolenCarRes;

#[derive(Serialize, Deserialize, Debug)]
pub struct RUserCreate {
    pub username: String,
    pub password: String,
}

pub struct DBUserCreate {
    pub username: String,
    pub hashed_password: String,
    pub role: Role,
    pub driver_id: Option<i32>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct UserRes {
    pub id: i32,
    pub username: String,
    pub role: Role,
    pub driver_id: Option<i32>,
    pub reported_stolen_cars: Vec<StolenCarRes>,
}

impl UserRes {
    pub fn new(user: entity::user::Model, reports: Vec<entity::stolen_car::Model>) -> Self {
        Self {
            id: user.id,
            username: user.username,
            role: user.role,
            driver_id: user.driver_id,
            reported_stolen_cars: reports.into_iter().map(StolenCarRes::from).collect(),
        }
    }
}
