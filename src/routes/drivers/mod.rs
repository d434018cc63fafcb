pub mod create;
pub mod list;
pub mod public;
pub mod verify;
