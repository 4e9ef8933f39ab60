//! Equipment join: attach weapons and artifacts to the character named by
//! their `location`.
//!
//! The result borrows from the input lists and never modifies them.
//! Equipment pointing at an unknown character is left out of every view.
//! When several weapons point at the same character the last one in input
//! order wins. When character keys repeat, the last character with that key
//! receives all of its equipment.

use crate::types::inventory::{Artifact, Character, Weapon};
use serde::Serialize;
use std::collections::HashMap;

/// A character together with the gear currently equipped on it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EquippedCharacter<'a> {
    #[serde(flatten)]
    pub character: &'a Character,
    pub weapon: Option<&'a Weapon>,
    pub artifacts: Vec<&'a Artifact>,
}

impl<'a> EquippedCharacter<'a> {
    fn bare(character: &'a Character) -> Self {
        Self {
            character,
            weapon: None,
            artifacts: Vec::new(),
        }
    }

    pub fn key(&self) -> &'a str {
        &self.character.key
    }
}

/// Output of [`join_equipment`], in character input order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JoinedInventory<'a> {
    pub characters: Vec<EquippedCharacter<'a>>,
    /// Weapons whose location matched a character, overridden ones included.
    pub equipped_weapons: usize,
    /// Artifacts whose location matched a character.
    pub equipped_artifacts: usize,
}

impl<'a> JoinedInventory<'a> {
    pub fn get(&self, key: &str) -> Option<&EquippedCharacter<'a>> {
        // Same resolution as the join itself: last entry with the key
        self.characters.iter().rev().find(|c| c.key() == key)
    }
}

/// Cross-reference loose equipment lists against characters.
///
/// Runs in O(C + W + A).
pub fn join_equipment<'a>(
    characters: &'a [Character],
    weapons: &'a [Weapon],
    artifacts: &'a [Artifact],
) -> JoinedInventory<'a> {
    let mut index: HashMap<&str, usize> = HashMap::with_capacity(characters.len());
    for (i, character) in characters.iter().enumerate() {
        index.insert(character.key.as_str(), i);
    }

    let mut views: Vec<EquippedCharacter<'a>> =
        characters.iter().map(EquippedCharacter::bare).collect();

    let mut equipped_weapons = 0;
    for weapon in weapons {
        let Some(slot) = weapon.equipped_by().and_then(|loc| index.get(loc)) else {
            continue;
        };
        views[*slot].weapon = Some(weapon);
        equipped_weapons += 1;
    }

    let mut equipped_artifacts = 0;
    for artifact in artifacts {
        let Some(slot) = artifact.equipped_by().and_then(|loc| index.get(loc)) else {
            continue;
        };
        views[*slot].artifacts.push(artifact);
        equipped_artifacts += 1;
    }

    log::debug!(
        "joined {} characters with {} weapons and {} artifacts",
        views.len(),
        equipped_weapons,
        equipped_artifacts
    );

    JoinedInventory {
        characters: views,
        equipped_weapons,
        equipped_artifacts,
    }
}

#[cfg(test)]
#[path = "tests/join_tests.rs"]
mod tests;
