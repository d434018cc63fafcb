pub mod me;
pub mod register;
pub mod token;
