use actix_multipart::form::{tempfile::TempFile, text::Text, MultipartForm};
use serde::{Deserialize, Serialize};

/// Multipart body of the admin driver registration form.
#[derive(MultipartForm)]
pub struct RDriverCreate {
    pub name: Text<String>,
    pub national_id: Text<String>,
    pub license_number: Text<String>,
    pub plate_number: Text<String>,
    pub car_model: Text<String>,
    pub car_color: Text<String>,
    #[multipart(limit = "10MB")]
    pub file: Option<TempFile>,
}

#[derive(Debug, Clone)]
pub struct DriverRegistration {
    pub name: String,
    pub national_id: String,
    pub license_number: String,
    pub plate_number: String,
    pub car_model: String,
    pub car_color: String,
    pub photo_url: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CarRes {
    pub id: i32,
    pub plate_number: String,
    pub model: String,
    pub color: String,
    pub owner_id: i32,
}

impl From<entity::car::Model> for CarRes {
    fn from(car: entity::car::Model) -> Self {
        Self {
            id: car.id,
            plate_number: car.plate_number,
            model: car.model,
            color: car.color,
            owner_id: car.owner_id,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DriverRes {
    pub id: i32,
    pub name: String,
    pub national_id: String,
    pub license_number: String,
    pub photo_url: Option<String>,
    pub cars: Vec<CarRes>,
}

impl DriverRes {
    pub fn new(driver: entity::driver::Model, cars: Vec<entity::car::Model>) -> Self {
        Self {
            id: driver.id,
            name: driver.name,
            national_id: driver.national_id,
            license_number: driver.license_number,
            photo_url: driver.photo_url,
            cars: cars.into_iter().map(CarRes::from).collect(),
        }
    }
}

#[derive(Deserialize, Debug, Clone, Copy)]
pub struct Pagination {
    #[serde(default)]
    pub skip: u64,
    #[serde(default = "Pagination::default_limit")]
    pub limit: u64,
}

impl Pagination {
    fn default_limit() -> u64 {
        100
    }
}
