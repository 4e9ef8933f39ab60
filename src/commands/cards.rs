//! Render payloads: engine output plus display names and icon paths.

use crate::services::assets::{AssetKind, AssetResolver, IconSlot};
use crate::services::inventory::display;
use crate::services::inventory::join::EquippedCharacter;
use crate::services::inventory::ranking::MaterialEntry;
use crate::types::inventory::{Artifact, Character, Substat, Weapon};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CharacterCard {
    pub key: String,
    pub display_name: String,
    pub icon: IconSlot,
    pub level: u32,
    pub constellation: u32,
    pub ascension: Option<u32>,
    pub weapon: Option<WeaponCard>,
    pub artifacts: Vec<ArtifactCard>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeaponCard {
    pub key: String,
    pub display_name: String,
    pub icon: IconSlot,
    pub level: u32,
    pub refinement: u32,
    pub ascension: Option<u32>,
    pub equipped_by: Option<String>,
    pub lock: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArtifactCard {
    pub set_key: String,
    pub set_name: String,
    pub icon: IconSlot,
    pub slot_key: String,
    pub level: u32,
    pub rarity: u32,
    pub main_stat_key: Option<String>,
    pub main_stat_value: Option<f64>,
    pub equipped_by: Option<String>,
    pub substats: Vec<Substat>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MaterialLine {
    pub key: String,
    pub display_name: String,
    pub count: u64,
}

/// Slim entry for pickers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CharacterOption {
    pub key: String,
    pub display_name: String,
    pub level: u32,
}

pub fn character_card(assets: &AssetResolver, joined: &EquippedCharacter<'_>) -> CharacterCard {
    let character = joined.character;
    CharacterCard {
        key: character.key.clone(),
        display_name: display::format_character_display_name(&character.key),
        icon: assets.icon(AssetKind::Character, &character.key),
        level: character.level,
        constellation: character.constellation,
        ascension: character.ascension,
        weapon: joined.weapon.map(|w| weapon_card(assets, w)),
        artifacts: joined
            .artifacts
            .iter()
            .map(|a| artifact_card(assets, a))
            .collect(),
    }
}

pub fn weapon_card(assets: &AssetResolver, weapon: &Weapon) -> WeaponCard {
    WeaponCard {
        key: weapon.key.clone(),
        display_name: display::format_weapon_display_name(&weapon.key),
        icon: assets.icon(AssetKind::Weapon, &weapon.key),
        level: weapon.level,
        refinement: weapon.refinement,
        ascension: weapon.ascension,
        equipped_by: weapon.equipped_by().map(str::to_string),
        lock: weapon.lock.unwrap_or(false),
    }
}

pub fn artifact_card(assets: &AssetResolver, artifact: &Artifact) -> ArtifactCard {
    ArtifactCard {
        set_key: artifact.set_key.clone(),
        set_name: display::format_artifact_set_display_name(&artifact.set_key),
        icon: assets.icon(AssetKind::Artifact, &artifact.set_key),
        slot_key: artifact.slot_key.clone(),
        level: artifact.level,
        rarity: artifact.rarity,
        main_stat_key: artifact.main_stat_key.clone(),
        main_stat_value: artifact.main_stat_value,
        equipped_by: artifact.equipped_by().map(str::to_string),
        substats: artifact.substats.clone(),
    }
}

pub fn material_line(entry: &MaterialEntry<'_>) -> MaterialLine {
    MaterialLine {
        key: entry.key.to_string(),
        display_name: display::format_material_display_name(entry.key),
        count: entry.count,
    }
}

pub fn character_option(character: &Character) -> CharacterOption {
    CharacterOption {
        key: character.key.clone(),
        display_name: display::format_character_display_name(&character.key),
        level: character.level,
    }
}
