//! Showcase: a fixed row of character slots picked by the user.
//!
//! Slot order matters. The selection itself does not reject a key that is
//! already used in another slot; callers are expected to offer choices from
//! [`ShowcaseSelection::options_for_slot`], which never includes them.

use crate::services::inventory::{EquippedCharacter, JoinedInventory};
use crate::types::errors::ShowcaseError;
use crate::types::inventory::Character;
use serde::{Deserialize, Serialize};

pub const SHOWCASE_SIZE: usize = 5;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Option<String>>", into = "Vec<Option<String>>")]
pub struct ShowcaseSelection {
    slots: [Option<String>; SHOWCASE_SIZE],
}

impl From<Vec<Option<String>>> for ShowcaseSelection {
    /// Extra entries are dropped and missing ones are empty.
    fn from(stored: Vec<Option<String>>) -> Self {
        let mut selection = Self::default();
        for (slot, key) in selection.slots.iter_mut().zip(stored) {
            *slot = key.filter(|k| !k.is_empty());
        }
        selection
    }
}

impl From<ShowcaseSelection> for Vec<Option<String>> {
    fn from(selection: ShowcaseSelection) -> Self {
        selection.slots.into()
    }
}

impl ShowcaseSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn slots(&self) -> &[Option<String>] {
        &self.slots
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.slots.get(index).and_then(|s| s.as_deref())
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// Put `key` into slot `index`, or clear it with `None`.
    pub fn set_slot(&mut self, index: usize, key: Option<String>) -> Result<(), ShowcaseError> {
        let slot = self
            .slots
            .get_mut(index)
            .ok_or(ShowcaseError::SlotOutOfRange {
                index,
                size: SHOWCASE_SIZE,
            })?;
        *slot = key.filter(|k| !k.is_empty());
        Ok(())
    }

    /// Characters selectable for slot `index`: everything not already chosen
    /// in another slot, in input order.
    pub fn options_for_slot<'a>(
        &self,
        index: usize,
        characters: &'a [Character],
    ) -> Result<Vec<&'a Character>, ShowcaseError> {
        if index >= SHOWCASE_SIZE {
            return Err(ShowcaseError::SlotOutOfRange {
                index,
                size: SHOWCASE_SIZE,
            });
        }

        let taken: Vec<&str> = self
            .slots
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != index)
            .filter_map(|(_, s)| s.as_deref())
            .collect();

        Ok(characters
            .iter()
            .filter(|c| !taken.contains(&c.key.as_str()))
            .collect())
    }

    /// Empty every slot whose key fails `is_known`. Returns how many slots were cleared.
    pub fn prune<F>(&mut self, is_known: F) -> usize
    where
        F: Fn(&str) -> bool,
    {
        let mut cleared = 0;
        for slot in self.slots.iter_mut() {
            if slot.as_deref().is_some_and(|key| !is_known(key)) {
                *slot = None;
                cleared += 1;
            }
        }
        cleared
    }

    pub fn has_duplicates(&self) -> bool {
        let filled: Vec<&str> = self.slots.iter().filter_map(|s| s.as_deref()).collect();
        filled
            .iter()
            .enumerate()
            .any(|(i, key)| filled[i + 1..].contains(key))
    }

    /// Joined character views in slot order. Empty slots and keys without a
    /// matching character are skipped; a key set twice shows up twice.
    pub fn curate<'j, 'a>(
        &self,
        joined: &'j JoinedInventory<'a>,
    ) -> Vec<&'j EquippedCharacter<'a>> {
        self.slots
            .iter()
            .filter_map(|s| s.as_deref())
            .filter_map(|key| joined.get(key))
            .collect()
    }
}

#[cfg(test)]
#[path = "tests/showcase_tests.rs"]
mod tests;
