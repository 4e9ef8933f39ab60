use crate::services::inventory::join_equipment;
use crate::services::inventory::join::EquippedCharacter;
use crate::services::inventory::ranking::{self, InventoryCounts, MaterialEntry, TopLimits};
use crate::services::showcase::ShowcaseSelection;
use crate::types::inventory::{InventorySnapshot, Weapon};
use serde::Serialize;

/// Everything the overview page shows, borrowed from one snapshot.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardView<'a> {
    pub counts: InventoryCounts,
    pub top_characters: Vec<EquippedCharacter<'a>>,
    pub top_weapons: Vec<&'a Weapon>,
    pub top_materials: Vec<MaterialEntry<'a>>,
    pub showcase: Vec<EquippedCharacter<'a>>,
}

/// Derive the overview from a validated snapshot. Pure; never fails.
pub fn build_dashboard<'a>(
    snapshot: &'a InventorySnapshot,
    showcase: &ShowcaseSelection,
    limits: TopLimits,
) -> DashboardView<'a> {
    let joined = join_equipment(&snapshot.characters, &snapshot.weapons, &snapshot.artifacts);

    DashboardView {
        counts: ranking::count_inventory(snapshot),
        top_characters: ranking::top_equipped_characters(&joined, limits.characters),
        top_weapons: ranking::top_weapons(&snapshot.weapons, limits.weapons),
        top_materials: ranking::top_materials(snapshot, limits.materials),
        showcase: showcase.curate(&joined).into_iter().cloned().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::inventory::parse_inventory;
    use crate::test_utils::SAMPLE_EXPORT;

    #[test]
    fn test_sample_dashboard() {
        let snapshot = parse_inventory(SAMPLE_EXPORT).unwrap();
        let mut showcase = ShowcaseSelection::new();
        showcase.set_slot(0, Some("Diluc".into())).unwrap();

        let view = build_dashboard(&snapshot, &showcase, TopLimits::default());

        assert_eq!(view.counts.characters, 2);
        assert_eq!(view.counts.weapons, 1);
        assert_eq!(view.counts.artifacts, 1);
        assert_eq!(view.counts.material_kinds, 2);
        assert_eq!(view.counts.equipped_weapons, 1);
        assert_eq!(view.counts.equipped_artifacts, 1);

        let top: Vec<&str> = view.top_characters.iter().map(|c| c.key()).collect();
        assert_eq!(top, vec!["Diluc", "Amber"]);
        assert_eq!(view.top_materials[0].key, "Mora");

        assert_eq!(view.showcase.len(), 1);
        assert_eq!(
            view.showcase[0].weapon.map(|w| w.key.as_str()),
            Some("Wolf's Gravestone")
        );
    }

    #[test]
    fn test_limits_are_respected() {
        let snapshot = parse_inventory(SAMPLE_EXPORT).unwrap();
        let limits = TopLimits {
            characters: 1,
            weapons: 0,
            materials: 1,
        };
        let view = build_dashboard(&snapshot, &ShowcaseSelection::new(), limits);

        assert_eq!(view.top_characters.len(), 1);
        assert!(view.top_weapons.is_empty());
        assert_eq!(view.top_materials.len(), 1);
        assert!(view.showcase.is_empty());
    }
}
