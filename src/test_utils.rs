use crate::database::storage_repo;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::{Pool, Sqlite};
use std::sync::Once;

static INIT: Once = Once::new();

pub struct TestContext {
    pub pool: Pool<Sqlite>,
}

pub async fn init_test_db() -> TestContext {
    INIT.call_once(|| {
        // Initialize logger only once
        let _ = env_logger::builder().is_test(true).try_init();
    });

    // Single connection: every connection to sqlite::memory: is its own database
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

/// Small but complete export used across tests.
pub const SAMPLE_EXPORT: &str = r#"{
    "format": "GOOD",
    "version": 2,
    "source": "Inventory Kamera",
    "characters": [
        { "key": "Amber", "level": 1, "constellation": 0 },
        { "key": "Diluc", "level": 90, "constellation": 1 }
    ],
    "weapons": [
        { "key": "Wolf's Gravestone", "level": 90, "refinement": 1, "location": "Diluc" }
    ],
    "artifacts": [
        { "setKey": "CrimsonWitchOfFlames", "slotKey": "flower", "level": 20, "rarity": 5, "location": "Diluc" }
    ],
    "materials": { "Mora": 5000000, "HerosWit": 500 }
}"#;
