//! Typed shape of an uploaded inventory export.
//!
//! Field names follow the export's camelCase convention. Every top-level
//! section is optional on the wire and defaults to empty.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventorySnapshot {
    /// Informational header, carried through untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<serde_json::Value>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub characters: Vec<Character>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub weapons: Vec<Weapon>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub artifacts: Vec<Artifact>,
    /// Material key to owned quantity, in document order.
    #[serde(default, deserialize_with = "null_as_default")]
    pub materials: IndexMap<String, u64>,
}

/// A section written as `null` reads the same as a missing one.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl InventorySnapshot {
    pub fn find_character(&self, key: &str) -> Option<&Character> {
        self.characters.iter().find(|c| c.key == key)
    }

    pub fn has_character(&self, key: &str) -> bool {
        self.find_character(key).is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    pub key: String,
    #[serde(default)]
    pub level: u32,
    #[serde(default)]
    pub constellation: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ascension: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Weapon {
    pub key: String,
    #[serde(default)]
    pub level: u32,
    #[serde(default = "default_refinement")]
    pub refinement: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ascension: Option<u32>,
    /// Key of the character holding this weapon. Empty or absent means unequipped.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lock: Option<bool>,
}

impl Weapon {
    pub fn equipped_by(&self) -> Option<&str> {
        location_key(&self.location)
    }
}

fn default_refinement() -> u32 {
    1
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artifact {
    pub set_key: String,
    pub slot_key: String,
    #[serde(default)]
    pub level: u32,
    #[serde(default)]
    pub rarity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main_stat_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main_stat_value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lock: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub substats: Vec<Substat>,
}

impl Artifact {
    pub fn equipped_by(&self) -> Option<&str> {
        location_key(&self.location)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Substat {
    pub key: String,
    pub value: f64,
}

fn location_key(location: &Option<String>) -> Option<&str> {
    location.as_deref().filter(|l| !l.is_empty())
}

#[cfg(test)]
#[path = "tests/inventory_tests.rs"]
mod tests;
