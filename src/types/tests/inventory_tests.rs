use super::*;
use serde_json::json;

#[test]
fn test_missing_sections_default_to_empty() {
    let snapshot: InventorySnapshot = serde_json::from_value(json!({
        "characters": [{ "key": "Amber", "level": 1, "constellation": 0 }]
    }))
    .unwrap();

    assert_eq!(snapshot.characters.len(), 1);
    assert!(snapshot.weapons.is_empty());
    assert!(snapshot.artifacts.is_empty());
    assert!(snapshot.materials.is_empty());
    assert_eq!(snapshot.characters.len(), 1);
}

#[test]
fn test_header_fields_are_carried_through() {
    let snapshot: InventorySnapshot = serde_json::from_value(json!({
        "format": "GOOD",
        "version": 2,
        "source": "Genshin Optimizer",
        "materials": { "Mora": 10 }
    }))
    .unwrap();

    let round = serde_json::to_value(&snapshot).unwrap();
    assert_eq!(round["format"], "GOOD");
    assert_eq!(round["version"], 2);
    assert_eq!(round["source"], "Genshin Optimizer");
}

#[test]
fn test_materials_keep_document_order() {
    let snapshot: InventorySnapshot = serde_json::from_str(
        r#"{ "materials": { "Mora": 5, "HerosWit": 500, "AdventurersExperience": 12 } }"#,
    )
    .unwrap();

    let keys: Vec<&str> = snapshot.materials.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["Mora", "HerosWit", "AdventurersExperience"]);
}

#[test]
fn test_weapon_location_empty_means_unequipped() {
    let weapon: Weapon = serde_json::from_value(json!({
        "key": "AmosBow", "level": 90, "refinement": 1, "location": ""
    }))
    .unwrap();
    assert_eq!(weapon.equipped_by(), None);

    let weapon: Weapon = serde_json::from_value(json!({
        "key": "AmosBow", "level": 90, "refinement": 1, "location": "Ganyu"
    }))
    .unwrap();
    assert_eq!(weapon.equipped_by(), Some("Ganyu"));
}

#[test]
fn test_artifact_camel_case_fields() {
    let artifact: Artifact = serde_json::from_value(json!({
        "setKey": "CrimsonWitchOfFlames",
        "slotKey": "flower",
        "level": 20,
        "rarity": 5,
        "mainStatKey": "hp",
        "mainStatValue": 4780.0,
        "location": "Diluc",
        "lock": true,
        "substats": [{ "key": "critRate_", "value": 3.9 }]
    }))
    .unwrap();

    assert_eq!(artifact.set_key, "CrimsonWitchOfFlames");
    assert_eq!(artifact.slot_key, "flower");
    assert_eq!(artifact.main_stat_key.as_deref(), Some("hp"));
    assert_eq!(artifact.substats.len(), 1);
    assert_eq!(artifact.equipped_by(), Some("Diluc"));
}

#[test]
fn test_find_character() {
    let snapshot: InventorySnapshot = serde_json::from_value(json!({
        "characters": [
            { "key": "Amber", "level": 1, "constellation": 0 },
            { "key": "Diluc", "level": 90, "constellation": 1 }
        ]
    }))
    .unwrap();

    assert_eq!(snapshot.find_character("Diluc").map(|c| c.level), Some(90));
    assert!(!snapshot.has_character("Venti"));
}
