//! Counts, top-N lists and full-listing sorts.
//!
//! Every function here works on a borrowed copy of the input order; equal
//! keys keep their original relative order (`sort_by` is stable).

use crate::services::inventory::join::{EquippedCharacter, JoinedInventory};
use crate::types::inventory::{Character, InventorySnapshot, Weapon};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashSet;

pub const DEFAULT_TOP_CHARACTERS: usize = 5;
pub const DEFAULT_TOP_WEAPONS: usize = 5;
pub const DEFAULT_TOP_MATERIALS: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopLimits {
    pub characters: usize,
    pub weapons: usize,
    pub materials: usize,
}

impl Default for TopLimits {
    fn default() -> Self {
        Self {
            characters: DEFAULT_TOP_CHARACTERS,
            weapons: DEFAULT_TOP_WEAPONS,
            materials: DEFAULT_TOP_MATERIALS,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct InventoryCounts {
    pub characters: usize,
    pub weapons: usize,
    pub artifacts: usize,
    pub material_kinds: usize,
    pub material_total: u64,
    /// Weapons whose location names a known character.
    pub equipped_weapons: usize,
    /// Artifacts whose location names a known character.
    pub equipped_artifacts: usize,
}

pub fn count_inventory(snapshot: &InventorySnapshot) -> InventoryCounts {
    let known: HashSet<&str> = snapshot.characters.iter().map(|c| c.key.as_str()).collect();
    let is_equipped = |location: Option<&str>| location.is_some_and(|key| known.contains(key));

    InventoryCounts {
        characters: snapshot.characters.len(),
        weapons: snapshot.weapons.len(),
        artifacts: snapshot.artifacts.len(),
        material_kinds: snapshot.materials.len(),
        material_total: snapshot
            .materials
            .values()
            .fold(0u64, |acc, n| acc.saturating_add(*n)),
        equipped_weapons: snapshot
            .weapons
            .iter()
            .filter(|w| is_equipped(w.equipped_by()))
            .count(),
        equipped_artifacts: snapshot
            .artifacts
            .iter()
            .filter(|a| is_equipped(a.equipped_by()))
            .count(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MaterialEntry<'a> {
    pub key: &'a str,
    pub count: u64,
}

/// Highest-level characters first.
pub fn top_characters(characters: &[Character], limit: usize) -> Vec<&Character> {
    sort_characters(characters, CharacterSort::LevelDesc)
        .into_iter()
        .take(limit)
        .collect()
}

/// Same ordering as [`top_characters`], applied to joined views so the
/// equipment travels with each character.
pub fn top_equipped_characters<'a>(
    joined: &JoinedInventory<'a>,
    limit: usize,
) -> Vec<EquippedCharacter<'a>> {
    let mut ranked = sort_equipped_characters(joined, CharacterSort::LevelDesc);
    ranked.truncate(limit);
    ranked
}

/// Highest-level weapons first.
pub fn top_weapons(weapons: &[Weapon], limit: usize) -> Vec<&Weapon> {
    sort_weapons(weapons, WeaponSort::LevelDesc)
        .into_iter()
        .take(limit)
        .collect()
}

/// Largest stacks first; ties keep document order.
pub fn top_materials(snapshot: &InventorySnapshot, limit: usize) -> Vec<MaterialEntry<'_>> {
    let mut entries: Vec<MaterialEntry<'_>> = snapshot
        .materials
        .iter()
        .map(|(key, count)| MaterialEntry {
            key: key.as_str(),
            count: *count,
        })
        .collect();
    entries.sort_by(|a, b| b.count.cmp(&a.count));
    entries.truncate(limit);
    entries
}

/// Sort orders offered on the character listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum CharacterSort {
    NameAsc,
    NameDesc,
    #[default]
    LevelDesc,
    LevelAsc,
    ConstellationDesc,
    ConstellationAsc,
}

/// Sort orders offered on the weapon listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum WeaponSort {
    NameAsc,
    NameDesc,
    #[default]
    LevelDesc,
    LevelAsc,
    RefinementDesc,
    RefinementAsc,
}

pub fn sort_characters(characters: &[Character], order: CharacterSort) -> Vec<&Character> {
    let mut sorted: Vec<&Character> = characters.iter().collect();
    sorted.sort_by(|a, b| compare_characters(a, b, order));
    sorted
}

/// [`sort_characters`] over joined views.
pub fn sort_equipped_characters<'a>(
    joined: &JoinedInventory<'a>,
    order: CharacterSort,
) -> Vec<EquippedCharacter<'a>> {
    let mut sorted = joined.characters.clone();
    sorted.sort_by(|a, b| compare_characters(a.character, b.character, order));
    sorted
}

pub fn sort_weapons(weapons: &[Weapon], order: WeaponSort) -> Vec<&Weapon> {
    let mut sorted: Vec<&Weapon> = weapons.iter().collect();
    sorted.sort_by(|a, b| compare_weapons(a, b, order));
    sorted
}

fn compare_characters(a: &Character, b: &Character, order: CharacterSort) -> Ordering {
    match order {
        CharacterSort::NameAsc => a.key.cmp(&b.key),
        CharacterSort::NameDesc => b.key.cmp(&a.key),
        CharacterSort::LevelDesc => b.level.cmp(&a.level),
        CharacterSort::LevelAsc => a.level.cmp(&b.level),
        CharacterSort::ConstellationDesc => b.constellation.cmp(&a.constellation),
        CharacterSort::ConstellationAsc => a.constellation.cmp(&b.constellation),
    }
}

fn compare_weapons(a: &Weapon, b: &Weapon, order: WeaponSort) -> Ordering {
    match order {
        WeaponSort::NameAsc => a.key.cmp(&b.key),
        WeaponSort::NameDesc => b.key.cmp(&a.key),
        WeaponSort::LevelDesc => b.level.cmp(&a.level),
        WeaponSort::LevelAsc => a.level.cmp(&b.level),
        WeaponSort::RefinementDesc => b.refinement.cmp(&a.refinement),
        WeaponSort::RefinementAsc => a.refinement.cmp(&b.refinement),
    }
}

#[cfg(test)]
#[path = "tests/ranking_tests.rs"]
mod tests;
