use crate::commands::cards::{self, CharacterCard, CharacterOption};
use crate::commands::AppState;
use crate::services::inventory::join_equipment;
use crate::services::session::SessionContext;
use crate::types::errors::CommandResult;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ShowcaseSlotView {
    pub index: usize,
    pub key: Option<String>,
    /// `None` for an empty slot.
    pub character: Option<CharacterCard>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ShowcasePayload {
    pub slots: Vec<ShowcaseSlotView>,
}

pub fn get_showcase(state: &AppState, session: &SessionContext) -> CommandResult<ShowcasePayload> {
    let snapshot = session.require_snapshot()?;
    let joined = join_equipment(&snapshot.characters, &snapshot.weapons, &snapshot.artifacts);

    let slots = session
        .showcase()
        .slots()
        .iter()
        .enumerate()
        .map(|(index, key)| ShowcaseSlotView {
            index,
            key: key.clone(),
            character: key
                .as_deref()
                .and_then(|k| joined.get(k))
                .map(|c| cards::character_card(&state.assets, c)),
        })
        .collect();

    Ok(ShowcasePayload { slots })
}

pub fn get_showcase_options(
    session: &SessionContext,
    slot: usize,
) -> CommandResult<Vec<CharacterOption>> {
    Ok(session
        .showcase_options(slot)?
        .into_iter()
        .map(cards::character_option)
        .collect())
}

/// Set or clear one slot, then return the refreshed showcase.
pub async fn set_showcase_slot(
    state: &AppState,
    session: &mut SessionContext,
    slot: usize,
    key: Option<String>,
) -> CommandResult<ShowcasePayload> {
    session.set_showcase_slot(slot, key).await?;
    get_showcase(state, session)
}

#[cfg(test)]
#[path = "tests/showcase_cmds_tests.rs"]
mod tests;
