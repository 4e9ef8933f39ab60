use crate::database::storage::KeyValueStore;
use crate::types::errors::StorageError;
use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;

// ── Schema ──────────────────────────────────────────────────

/// Create the storage table if it does not exist (idempotent).
pub async fn ensure_tables(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS user_storage (
            namespace TEXT NOT NULL,
            key TEXT NOT NULL,
            value TEXT NOT NULL,
            updated_at DATETIME DEFAULT CURRENT_TIMESTAMP,
            PRIMARY KEY (namespace, key)
        )",
    )
    .execute(pool)
    .await?;
    Ok(())
}

/// Open (creating if missing) the database at `url` and make sure the schema exists.
pub async fn connect(url: &str) -> Result<SqlitePool, sqlx::Error> {
    let opts = SqliteConnectOptions::from_str(url)?.create_if_missing(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(opts)
        .await?;
    ensure_tables(&pool).await?;
    Ok(pool)
}

// ── KV access ───────────────────────────────────────────────

pub async fn get_value(
    pool: &SqlitePool,
    namespace: &str,
    key: &str,
) -> Result<Option<String>, sqlx::Error> {
    let row: Option<(String,)> =
        sqlx::query_as("SELECT value FROM user_storage WHERE namespace = ? AND key = ?")
            .bind(namespace)
            .bind(key)
            .fetch_optional(pool)
            .await?;
    Ok(row.map(|r| r.0))
}

/// Upsert a single value (INSERT OR REPLACE).
pub async fn set_value(
    pool: &SqlitePool,
    namespace: &str,
    key: &str,
    value: &str,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT OR REPLACE INTO user_storage (namespace, key, value, updated_at)
         VALUES (?, ?, ?, CURRENT_TIMESTAMP)",
    )
    .bind(namespace)
    .bind(key)
    .bind(value)
    .execute(pool)
    .await?;
    Ok(())
}

pub async fn delete_value(pool: &SqlitePool, namespace: &str, key: &str) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM user_storage WHERE namespace = ? AND key = ?")
        .bind(namespace)
        .bind(key)
        .execute(pool)
        .await?;
    Ok(())
}

/// Count stored values in a namespace.
pub async fn count_namespace(pool: &SqlitePool, namespace: &str) -> Result<i64, sqlx::Error> {
    let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM user_storage WHERE namespace = ?")
        .bind(namespace)
        .fetch_one(pool)
        .await?;
    Ok(row.0)
}

// ── Store adapter ───────────────────────────────────────────

/// [`KeyValueStore`] backed by the `user_storage` table.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl KeyValueStore for SqliteStore {
    async fn get(&self, namespace: &str, key: &str) -> Result<Option<String>, StorageError> {
        Ok(get_value(&self.pool, namespace, key).await?)
    }

    async fn set(&self, namespace: &str, key: &str, value: &str) -> Result<(), StorageError> {
        Ok(set_value(&self.pool, namespace, key, value).await?)
    }

    async fn remove(&self, namespace: &str, key: &str) -> Result<(), StorageError> {
        Ok(delete_value(&self.pool, namespace, key).await?)
    }
}

#[cfg(test)]
#[path = "tests/storage_repo_tests.rs"]
mod tests;
