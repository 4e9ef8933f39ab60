pub mod storage;
pub mod storage_repo;

pub use storage::{KeyValueStore, MemoryStore, SHOWCASE_NAMESPACE, SNAPSHOT_NAMESPACE};
pub use storage_repo::SqliteStore;
