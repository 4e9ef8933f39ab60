//! Per-user session: the current snapshot and showcase for one signed-in user.
//!
//! The snapshot is replaced as a whole, never patched. The showcase is read
//! back from storage whenever a snapshot is adopted and written only when the
//! user changes a slot.

use crate::database::storage::{KeyValueStore, SHOWCASE_NAMESPACE, SNAPSHOT_NAMESPACE};
use crate::services::dashboard::{build_dashboard, DashboardView};
use crate::services::identity::UserIdentity;
use crate::services::inventory::ranking::{count_inventory, InventoryCounts, TopLimits};
use crate::services::inventory::parse_inventory;
use crate::services::showcase::ShowcaseSelection;
use crate::types::errors::{CommandError, StorageError};
use crate::types::inventory::{Character, InventorySnapshot};
use std::sync::Arc;

pub const NO_DATA_MESSAGE: &str = "No inventory data loaded. Please upload a JSON file.";

pub struct SessionContext {
    store: Arc<dyn KeyValueStore>,
    user: UserIdentity,
    snapshot: Option<InventorySnapshot>,
    showcase: ShowcaseSelection,
}

impl SessionContext {
    /// Fresh session with no data.
    pub fn new(store: Arc<dyn KeyValueStore>, user: UserIdentity) -> Self {
        Self {
            store,
            user,
            snapshot: None,
            showcase: ShowcaseSelection::new(),
        }
    }

    /// Session seeded from the user's stored snapshot and showcase.
    ///
    /// A stored snapshot that no longer validates is ignored.
    pub async fn restore(
        store: Arc<dyn KeyValueStore>,
        user: UserIdentity,
    ) -> Result<Self, StorageError> {
        let mut session = Self::new(store, user);

        if let Some(saved) = session.store.get(SNAPSHOT_NAMESPACE, &session.user.uid).await? {
            match parse_inventory(&saved) {
                Ok(snapshot) => session.snapshot = Some(snapshot),
                Err(e) => log::warn!(
                    "Ignoring stored inventory for user {}: {e}",
                    session.user.uid
                ),
            }
        }

        session.hydrate_showcase().await?;
        Ok(session)
    }

    pub fn user(&self) -> &UserIdentity {
        &self.user
    }

    pub fn snapshot(&self) -> Option<&InventorySnapshot> {
        self.snapshot.as_ref()
    }

    pub fn require_snapshot(&self) -> Result<&InventorySnapshot, CommandError> {
        self.snapshot
            .as_ref()
            .ok_or_else(|| CommandError::NotFound(NO_DATA_MESSAGE.to_string()))
    }

    pub fn showcase(&self) -> &ShowcaseSelection {
        &self.showcase
    }

    /// Adopt uploaded file content as the current snapshot.
    ///
    /// On a parse or validation failure the current snapshot is dropped so no
    /// stale data is shown, and the error is returned for display.
    pub async fn upload(&mut self, text: &str) -> Result<InventoryCounts, CommandError> {
        let snapshot = match parse_inventory(text) {
            Ok(snapshot) => snapshot,
            Err(e) => {
                log::warn!("Rejected upload for user {}: {e}", self.user.uid);
                self.snapshot = None;
                self.showcase = ShowcaseSelection::new();
                return Err(e.into());
            }
        };

        let encoded = serde_json::to_string(&snapshot).map_err(StorageError::from)?;
        self.store
            .set(SNAPSHOT_NAMESPACE, &self.user.uid, &encoded)
            .await?;

        let counts = count_inventory(&snapshot);
        self.snapshot = Some(snapshot);
        self.hydrate_showcase().await?;

        log::info!(
            "Accepted upload for user {}: {} characters, {} weapons, {} artifacts",
            self.user.uid,
            counts.characters,
            counts.weapons,
            counts.artifacts
        );
        Ok(counts)
    }

    /// Characters offered for showcase slot `index`.
    pub fn showcase_options(&self, index: usize) -> Result<Vec<&Character>, CommandError> {
        let snapshot = self.require_snapshot()?;
        Ok(self.showcase.options_for_slot(index, &snapshot.characters)?)
    }

    /// Change one showcase slot and persist the whole selection.
    pub async fn set_showcase_slot(
        &mut self,
        index: usize,
        key: Option<String>,
    ) -> Result<&ShowcaseSelection, CommandError> {
        let snapshot = self.require_snapshot()?;
        if let Some(k) = key.as_deref().filter(|k| !k.is_empty()) {
            if !snapshot.has_character(k) {
                return Err(CommandError::InvalidInput(format!(
                    "Character {k} is not in the current inventory"
                )));
            }
        }

        self.showcase.set_slot(index, key)?;

        let encoded = serde_json::to_string(&self.showcase).map_err(StorageError::from)?;
        self.store
            .set(SHOWCASE_NAMESPACE, &self.user.uid, &encoded)
            .await?;
        Ok(&self.showcase)
    }

    pub fn dashboard(&self, limits: TopLimits) -> Result<DashboardView<'_>, CommandError> {
        let snapshot = self.require_snapshot()?;
        Ok(build_dashboard(snapshot, &self.showcase, limits))
    }

    /// Load the stored showcase and drop keys missing from the current
    /// snapshot. Never writes: the stored value is left as it was until the
    /// user changes a slot.
    async fn hydrate_showcase(&mut self) -> Result<(), StorageError> {
        let Some(snapshot) = self.snapshot.as_ref() else {
            self.showcase = ShowcaseSelection::new();
            return Ok(());
        };

        let mut selection = match self.store.get(SHOWCASE_NAMESPACE, &self.user.uid).await? {
            Some(saved) => serde_json::from_str(&saved).unwrap_or_else(|e| {
                log::warn!("Ignoring stored showcase for user {}: {e}", self.user.uid);
                ShowcaseSelection::new()
            }),
            None => ShowcaseSelection::new(),
        };

        let cleared = selection.prune(|key| snapshot.has_character(key));
        if cleared > 0 {
            log::info!("Cleared {cleared} showcase slot(s) no longer in inventory");
        }

        self.showcase = selection;
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/session_tests.rs"]
mod tests;
