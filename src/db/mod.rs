pub mod database_service;
pub mod driver;
pub mod stolen_car;
pub mod user;
