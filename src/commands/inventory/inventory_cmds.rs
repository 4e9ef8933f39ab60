use crate::commands::cards::{self, ArtifactCard, CharacterCard, MaterialLine, WeaponCard};
use crate::commands::AppState;
use crate::services::inventory::join_equipment;
use crate::services::inventory::ranking::{self, CharacterSort, InventoryCounts, WeaponSort};
use crate::services::session::SessionContext;
use crate::types::errors::CommandResult;
use serde::Serialize;
use std::path::Path;

#[derive(Debug, Clone, Serialize)]
pub struct UploadSummary {
    pub file_name: String,
    pub counts: InventoryCounts,
}

/// Overview page payload in one call.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardPayload {
    pub greeting: String,
    pub counts: InventoryCounts,
    pub top_characters: Vec<CharacterCard>,
    pub top_weapons: Vec<WeaponCard>,
    pub top_materials: Vec<MaterialLine>,
    pub showcase: Vec<CharacterCard>,
}

/// Read an export file and make it the session's inventory.
///
/// The whole file is read in one go; a parse or validation failure leaves
/// the session without data.
pub async fn upload_inventory(
    session: &mut SessionContext,
    path: &Path,
) -> CommandResult<UploadSummary> {
    let text = tokio::fs::read_to_string(path).await?;
    let counts = session.upload(&text).await?;

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    Ok(UploadSummary { file_name, counts })
}

pub fn get_dashboard(
    state: &AppState,
    session: &SessionContext,
) -> CommandResult<DashboardPayload> {
    let view = session.dashboard(state.config.top_limits)?;
    let assets = &state.assets;

    Ok(DashboardPayload {
        greeting: format!("Welcome back, {}!", session.user().greeting_name()),
        counts: view.counts,
        top_characters: view
            .top_characters
            .iter()
            .map(|c| cards::character_card(assets, c))
            .collect(),
        top_weapons: view
            .top_weapons
            .iter()
            .map(|w| cards::weapon_card(assets, w))
            .collect(),
        top_materials: view.top_materials.iter().map(cards::material_line).collect(),
        showcase: view
            .showcase
            .iter()
            .map(|c| cards::character_card(assets, c))
            .collect(),
    })
}

/// Every character with its equipment, in the requested order.
pub fn list_characters(
    state: &AppState,
    session: &SessionContext,
    sort: CharacterSort,
) -> CommandResult<Vec<CharacterCard>> {
    let snapshot = session.require_snapshot()?;
    let joined = join_equipment(&snapshot.characters, &snapshot.weapons, &snapshot.artifacts);

    Ok(ranking::sort_equipped_characters(&joined, sort)
        .iter()
        .map(|c| cards::character_card(&state.assets, c))
        .collect())
}

pub fn list_weapons(
    state: &AppState,
    session: &SessionContext,
    sort: WeaponSort,
) -> CommandResult<Vec<WeaponCard>> {
    let snapshot = session.require_snapshot()?;
    Ok(ranking::sort_weapons(&snapshot.weapons, sort)
        .into_iter()
        .map(|w| cards::weapon_card(&state.assets, w))
        .collect())
}

/// Artifacts in export order.
pub fn list_artifacts(
    state: &AppState,
    session: &SessionContext,
) -> CommandResult<Vec<ArtifactCard>> {
    let snapshot = session.require_snapshot()?;
    Ok(snapshot
        .artifacts
        .iter()
        .map(|a| cards::artifact_card(&state.assets, a))
        .collect())
}

#[cfg(test)]
#[path = "tests/inventory_cmds_tests.rs"]
mod tests;
