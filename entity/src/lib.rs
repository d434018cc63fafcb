pub mod car;
pub mod driver;
pub mod sea_orm_active_enums;
pub mod stolen_car;
pub mod user;

pub use sea_orm_active_enums::{ReportStatus, Role};

/*
 Drivers are created by an admin together with their first car and a login.
 The login uses the national id as both username and initial password.
 Generic users only ever report stolen cars; admins manage drivers.
 */
