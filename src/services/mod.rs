pub mod assets;
pub mod config;
pub mod dashboard;
pub mod identity;
pub mod inventory;
pub mod session;
pub mod showcase;
