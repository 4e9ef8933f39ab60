use super::*;

#[test]
fn test_format_key_with_spaces() {
    assert_eq!(
        format_key_with_spaces("EmblemOfSeveredFate"),
        "Emblem Of Severed Fate"
    );
    assert_eq!(format_key_with_spaces("Amos_Bow"), "Amos Bow");
    assert_eq!(format_key_with_spaces("  Mora  "), "Mora");
    assert_eq!(format_key_with_spaces(""), "");
}

#[test]
fn test_format_is_idempotent() {
    let samples = [
        "EmblemOfSeveredFate",
        "Amos_Bow",
        "Wolf's Gravestone",
        "already spaced words",
        "__odd__Input  Here_",
        "HUTAO",
        "raidenshogun",
        "",
    ];
    for raw in samples {
        let once = format_key_with_spaces(raw);
        assert_eq!(format_key_with_spaces(&once), once, "input: {raw:?}");

        let once = format_character_display_name(raw);
        assert_eq!(format_character_display_name(&once), once, "input: {raw:?}");
    }
}

#[test]
fn test_exception_table_precedence() {
    assert_eq!(format_character_display_name("hutao"), "Hu Tao");
    assert_eq!(format_character_display_name("Hu_Tao"), "Hu Tao");
    assert_eq!(format_character_display_name("HUTAO"), "Hu Tao");
    assert_eq!(format_character_display_name("HuTao"), "Hu Tao");
    assert_eq!(format_character_display_name("raidenshogun"), "Raiden Shogun");
}

#[test]
fn test_character_without_exception_is_split() {
    assert_eq!(format_character_display_name("Diluc"), "Diluc");
    assert_eq!(format_character_display_name("KaeyaAlberich"), "Kaeya Alberich");
}

#[test]
fn test_item_display_names() {
    assert_eq!(format_weapon_display_name("SkywardHarp"), "Skyward Harp");
    assert_eq!(
        format_artifact_set_display_name("CrimsonWitchOfFlames"),
        "Crimson Witch Of Flames"
    );
    assert_eq!(format_material_display_name("HerosWit"), "Heros Wit");
}

#[test]
fn test_normalize_key() {
    assert_eq!(normalize_key(" Hu_Tao "), "hutao");
    assert_eq!(normalize_key("Raiden Shogun"), "raidenshogun");
}

#[test]
fn test_character_icon_filename() {
    assert_eq!(character_icon_filename("HuTao"), "Hu_Tao_Icon.png");
    assert_eq!(character_icon_filename("Kazuha"), "Kaedehara_Kazuha_Icon.png");
    assert_eq!(character_icon_filename("Diluc"), "Diluc_Icon.png");
    assert_eq!(character_icon_filename("Some Name"), "Some_Name_Icon.png");
}

#[test]
fn test_traveler_variants_share_icon() {
    assert_eq!(character_icon_filename("TravelerAnemo"), "Aether_Icon.png");
    assert_eq!(character_icon_filename("TravelerGeo"), "Aether_Icon.png");
    assert_eq!(character_icon_filename("Traveler"), "Aether_Icon.png");
}

#[test]
fn test_item_icon_filenames() {
    assert_eq!(weapon_icon_filename("Skyward Harp"), "Skyward_Harp.png");
    assert_eq!(weapon_icon_filename("AmosBow"), "AmosBow.png");
    assert_eq!(
        artifact_icon_filename("CrimsonWitchOfFlames"),
        "CrimsonWitchOfFlames.png"
    );
}
