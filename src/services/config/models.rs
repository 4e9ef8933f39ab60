use crate::services::inventory::ranking::{
    TopLimits, DEFAULT_TOP_CHARACTERS, DEFAULT_TOP_MATERIALS, DEFAULT_TOP_WEAPONS,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://gacha_savior.db?mode=rwc";
pub const DEFAULT_ASSET_ROOT: &str = "public";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub database_url: String,
    pub asset_root: PathBuf,
    pub top_limits: TopLimits,
    /// Identity used when none is given on the command line.
    pub default_user: Option<String>,
    pub default_username: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            asset_root: PathBuf::from(DEFAULT_ASSET_ROOT),
            top_limits: TopLimits {
                characters: DEFAULT_TOP_CHARACTERS,
                weapons: DEFAULT_TOP_WEAPONS,
                materials: DEFAULT_TOP_MATERIALS,
            },
            default_user: None,
            default_username: None,
        }
    }
}
