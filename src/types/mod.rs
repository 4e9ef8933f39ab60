pub mod errors;
pub mod inventory;
