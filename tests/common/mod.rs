use gacha_savior_lib::database::storage_repo;
use gacha_savior_lib::database::SqliteStore;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::{Pool, Sqlite};
use std::sync::{Arc, Once};

static INIT: Once = Once::new();

pub struct TestContext {
    pub pool: Pool<Sqlite>,
}

impl TestContext {
    pub fn store(&self) -> Arc<SqliteStore> {
        Arc::new(SqliteStore::new(self.pool.clone()))
    }
}

pub async fn init_test_db() -> TestContext {
    INIT.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to create in-memory database");

    storage_repo::ensure_tables(&pool)
        .await
        .expect("Failed to create tables");

    TestContext { pool }
}

pub const FULL_EXPORT: &str = r#"{
    "format": "GOOD",
    "version": 2,
    "source": "Inventory Kamera",
    "characters": [
        { "key": "HuTao", "level": 90, "constellation": 1, "ascension": 6 },
        { "key": "Xingqiu", "level": 80, "constellation": 6, "ascension": 5 },
        { "key": "TravelerAnemo", "level": 70, "constellation": 0 },
        { "key": "KaedeharaKazuha", "level": 90, "constellation": 0 }
    ],
    "weapons": [
        { "key": "StaffOfHoma", "level": 90, "refinement": 1, "location": "HuTao", "lock": true },
        { "key": "SacrificialSword", "level": 90, "refinement": 5, "location": "Xingqiu" },
        { "key": "FreedomSworn", "level": 90, "refinement": 1, "location": "KaedeharaKazuha" },
        { "key": "DullBlade", "level": 1, "refinement": 1, "location": "" }
    ],
    "artifacts": [
        { "setKey": "CrimsonWitchOfFlames", "slotKey": "flower", "level": 20, "rarity": 5,
          "mainStatKey": "hp", "mainStatValue": 4780, "location": "HuTao",
          "substats": [{ "key": "critRate_", "value": 10.5 }] },
        { "setKey": "EmblemOfSeveredFate", "slotKey": "sands", "level": 20, "rarity": 5,
          "mainStatKey": "enerRech_", "mainStatValue": 51.8, "location": "Xingqiu" },
        { "setKey": "ViridescentVenerer", "slotKey": "goblet", "level": 16, "rarity": 5,
          "location": "Nobody" }
    ],
    "materials": { "Mora": 1200000, "MysticEnhancementOre": 300, "HerosWit": 300, "Primogem": 1600 }
}"#;
