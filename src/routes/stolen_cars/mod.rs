pub mod list;
pub mod report;
pub mod resolve;
pub mod sighting;
