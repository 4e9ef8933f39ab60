//! Display names and icon file names for raw inventory keys.
//!
//! Everything here is pure and total: any input string yields a usable label.

use regex::Regex;
use std::sync::LazyLock;

/// Compiled regex matching an ASCII capital letter.
static RE_UPPERCASE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([A-Z])").expect("Invalid regex"));

/// Compiled regex matching a run of whitespace.
static RE_WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("Invalid regex"));

/// Multi-word character names that camel-case splitting gets wrong
/// (normalized key -> display name).
const CHARACTER_DISPLAY_NAMES: &[(&str, &str)] = &[
    ("hutao", "Hu Tao"),
    ("kamisatoayaka", "Kamisato Ayaka"),
    ("raidenshogun", "Raiden Shogun"),
    ("yaemiko", "Yae Miko"),
    ("yunjin", "Yun Jin"),
    ("kukishinobu", "Kuki Shinobu"),
    ("kujousara", "Kujou Sara"),
    ("shikanoinheizou", "Shikanoin Heizou"),
    ("kaedeharakazuha", "Kaedehara Kazuha"),
    ("sangonomiyakokomi", "Sangonomiya Kokomi"),
    ("kamisatoayato", "Kamisato Ayato"),
    ("aratakiitto", "Arataki Itto"),
];

/// Portrait assets whose file name does not follow the key
/// (normalized key -> file stem).
const CHARACTER_ICON_NAMES: &[(&str, &str)] = &[
    ("kazuha", "Kaedehara_Kazuha"),
    ("kaedeharakazuha", "Kaedehara_Kazuha"),
    ("hutao", "Hu_Tao"),
    ("ayaka", "Kamisato_Ayaka"),
    ("kamisatoayaka", "Kamisato_Ayaka"),
    ("raidenshogun", "Raiden_Shogun"),
    ("yaemiko", "Yae_Miko"),
    ("yunjin", "Yun_Jin"),
    ("kukishinobu", "Kuki_Shinobu"),
    ("kujousara", "Kujou_Sara"),
    ("shikanoinheizou", "Shikanoin_Heizou"),
];

/// Every traveler variant shares one portrait.
const TRAVELER_PREFIX: &str = "traveler";
const TRAVELER_ICON: &str = "Aether_Icon.png";

const CHARACTER_ICON_SUFFIX: &str = "_Icon.png";
const ITEM_ICON_SUFFIX: &str = ".png";

/// Lowercase and drop whitespace and underscores.
pub fn normalize_key(key: &str) -> String {
    key.chars()
        .filter(|c| !c.is_whitespace() && *c != '_')
        .flat_map(char::to_lowercase)
        .collect()
}

/// Split a raw key into words.
///
/// `"EmblemOfSeveredFate"` -> `"Emblem Of Severed Fate"`,
/// `"Amos_Bow"` -> `"Amos Bow"`.
pub fn format_key_with_spaces(key: &str) -> String {
    let spaced = key.replace('_', " ");
    let split = RE_UPPERCASE.replace_all(&spaced, " $1");
    RE_WHITESPACE
        .replace_all(split.trim(), " ")
        .into_owned()
}

pub fn format_character_display_name(key: &str) -> String {
    let normalized = normalize_key(key);
    lookup(CHARACTER_DISPLAY_NAMES, &normalized)
        .map(str::to_string)
        .unwrap_or_else(|| format_key_with_spaces(key))
}

pub fn format_weapon_display_name(key: &str) -> String {
    format_key_with_spaces(key)
}

pub fn format_artifact_set_display_name(set_key: &str) -> String {
    format_key_with_spaces(set_key)
}

pub fn format_material_display_name(key: &str) -> String {
    format_key_with_spaces(key)
}

pub fn character_icon_filename(key: &str) -> String {
    let normalized = normalize_key(key);
    if normalized.starts_with(TRAVELER_PREFIX) {
        return TRAVELER_ICON.to_string();
    }
    match lookup(CHARACTER_ICON_NAMES, &normalized) {
        Some(stem) => format!("{stem}{CHARACTER_ICON_SUFFIX}"),
        None => format!("{}{CHARACTER_ICON_SUFFIX}", underscore_spaces(key)),
    }
}

pub fn weapon_icon_filename(key: &str) -> String {
    format!("{}{ITEM_ICON_SUFFIX}", underscore_spaces(key))
}

pub fn artifact_icon_filename(set_key: &str) -> String {
    format!("{}{ITEM_ICON_SUFFIX}", underscore_spaces(set_key))
}

fn underscore_spaces(key: &str) -> String {
    RE_WHITESPACE.replace_all(key.trim(), "_").into_owned()
}

fn lookup(table: &[(&str, &'static str)], normalized: &str) -> Option<&'static str> {
    table
        .iter()
        .find(|(k, _)| *k == normalized)
        .map(|(_, v)| *v)
}

#[cfg(test)]
#[path = "tests/display_tests.rs"]
mod tests;
