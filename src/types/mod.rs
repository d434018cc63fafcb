pub mod driver;
pub mod error;
pub mod response;
pub mod stolen_car;
pub mod token;
pub mod user;
