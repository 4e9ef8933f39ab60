//! Derivation engine over an uploaded inventory snapshot.
//!
//! Input is assumed validated; nothing past [`validator`] can fail.

pub mod display;
pub mod join;
pub mod ranking;
pub mod validator;

pub use join::{join_equipment, EquippedCharacter, JoinedInventory};
pub use ranking::{CharacterSort, InventoryCounts, TopLimits, WeaponSort};
pub use validator::{parse_inventory, validate_inventory};
