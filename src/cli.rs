//! Command-line surface. Every subcommand prints its payload as pretty JSON.

use crate::commands::{self, AppState};
use crate::services::config::AppConfig;
use crate::services::identity::{StaticIdentity, UserIdentity};
use crate::services::inventory::{CharacterSort, WeaponSort};
use crate::services::session::SessionContext;
use crate::types::errors::{CommandError, CommandResult};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "gacha-savior",
    author,
    version,
    about = "Browse a Genshin Impact inventory export",
    long_about = None
)]
pub struct Cli {
    /// User id the data is stored under. Falls back to GACHA_SAVIOR_USER.
    #[arg(long, global = true)]
    pub user: Option<String>,

    /// Name used in the greeting. Falls back to GACHA_SAVIOR_USERNAME.
    #[arg(long, global = true)]
    pub username: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Load an exported inventory JSON file
    Upload { file: PathBuf },
    /// Counts, top lists and showcase
    Dashboard,
    Characters {
        #[arg(long, value_enum, default_value_t = CharacterSort::default())]
        sort: CharacterSort,
    },
    Weapons {
        #[arg(long, value_enum, default_value_t = WeaponSort::default())]
        sort: WeaponSort,
    },
    Artifacts,
    /// View or edit the featured characters
    Showcase {
        #[command(subcommand)]
        action: ShowcaseAction,
    },
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum ShowcaseAction {
    Show,
    /// Characters that can go into SLOT
    Options { slot: usize },
    /// Put KEY into SLOT, or clear the slot when KEY is omitted
    Set { slot: usize, key: Option<String> },
}

impl Cli {
    /// Identity from flags, then configuration. No uid means signed out.
    pub fn identity(&self, config: &AppConfig) -> StaticIdentity {
        let uid = self.user.clone().or_else(|| config.default_user.clone());
        let username = self
            .username
            .clone()
            .or_else(|| config.default_username.clone());
        StaticIdentity::new(uid.map(|uid| UserIdentity::new(uid, username)))
    }
}

/// Run one subcommand against a restored session.
pub async fn dispatch(
    state: &AppState,
    user: UserIdentity,
    command: Command,
) -> CommandResult<serde_json::Value> {
    let mut session = SessionContext::restore(state.store.clone(), user).await?;

    match command {
        Command::Upload { file } => {
            to_json(commands::inventory::upload_inventory(&mut session, &file).await?)
        }
        Command::Dashboard => to_json(commands::inventory::get_dashboard(state, &session)?),
        Command::Characters { sort } => {
            to_json(commands::inventory::list_characters(state, &session, sort)?)
        }
        Command::Weapons { sort } => {
            to_json(commands::inventory::list_weapons(state, &session, sort)?)
        }
        Command::Artifacts => to_json(commands::inventory::list_artifacts(state, &session)?),
        Command::Showcase { action } => match action {
            ShowcaseAction::Show => to_json(commands::showcase::get_showcase(state, &session)?),
            ShowcaseAction::Options { slot } => {
                to_json(commands::showcase::get_showcase_options(&session, slot)?)
            }
            ShowcaseAction::Set { slot, key } => to_json(
                commands::showcase::set_showcase_slot(state, &mut session, slot, key).await?,
            ),
        },
    }
}

fn to_json<T: Serialize>(payload: T) -> CommandResult<serde_json::Value> {
    serde_json::to_value(payload).map_err(|e| CommandError::Internal(e.to_string()))
}
