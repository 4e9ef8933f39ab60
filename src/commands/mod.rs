pub mod cards;
pub mod inventory;
pub mod showcase;

use crate::database::KeyValueStore;
use crate::services::assets::AssetResolver;
use crate::services::config::AppConfig;
use std::sync::Arc;

/// Shared handles every command needs. One per process.
pub struct AppState {
    pub store: Arc<dyn KeyValueStore>,
    pub config: AppConfig,
    pub assets: AssetResolver,
}

impl AppState {
    pub fn new(store: Arc<dyn KeyValueStore>, config: AppConfig) -> Self {
        let assets = AssetResolver::new(config.asset_root.clone());
        Self {
            store,
            config,
            assets,
        }
    }
}
