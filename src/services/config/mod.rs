pub mod models;

pub use models::*;

use std::path::PathBuf;

pub const ENV_DATABASE_URL: &str = "GACHA_SAVIOR_DATABASE_URL";
pub const ENV_ASSET_ROOT: &str = "GACHA_SAVIOR_ASSET_ROOT";
pub const ENV_TOP_CHARACTERS: &str = "GACHA_SAVIOR_TOP_CHARACTERS";
pub const ENV_TOP_WEAPONS: &str = "GACHA_SAVIOR_TOP_WEAPONS";
pub const ENV_TOP_MATERIALS: &str = "GACHA_SAVIOR_TOP_MATERIALS";
pub const ENV_USER: &str = "GACHA_SAVIOR_USER";
pub const ENV_USERNAME: &str = "GACHA_SAVIOR_USERNAME";

impl AppConfig {
    /// Load from the process environment, reading `.env` first if present.
    pub fn from_env() -> Self {
        if let Err(e) = dotenvy::dotenv() {
            log::debug!("No .env loaded: {e}");
        }
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary variable source. Missing or unparsable values
    /// keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = AppConfig::default();

        if let Some(url) = non_empty(lookup(ENV_DATABASE_URL)) {
            config.database_url = url;
        }
        if let Some(root) = non_empty(lookup(ENV_ASSET_ROOT)) {
            config.asset_root = PathBuf::from(root);
        }

        config.top_limits.characters =
            parse_limit(&lookup, ENV_TOP_CHARACTERS, config.top_limits.characters);
        config.top_limits.weapons =
            parse_limit(&lookup, ENV_TOP_WEAPONS, config.top_limits.weapons);
        config.top_limits.materials =
            parse_limit(&lookup, ENV_TOP_MATERIALS, config.top_limits.materials);

        config.default_user = non_empty(lookup(ENV_USER));
        config.default_username = non_empty(lookup(ENV_USERNAME));

        config
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_limit<F>(lookup: &F, name: &str, default: usize) -> usize
where
    F: Fn(&str) -> Option<String>,
{
    match non_empty(lookup(name)) {
        None => default,
        Some(raw) => match raw.parse::<usize>() {
            Ok(n) if n > 0 => n,
            _ => {
                log::warn!("Ignoring {name}={raw:?}, using {default}");
                default
            }
        },
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
