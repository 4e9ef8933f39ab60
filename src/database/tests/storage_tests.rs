use super::*;

#[tokio::test]
async fn test_memory_store_round_trip() {
    let store = MemoryStore::new();

    let val = store.get(SNAPSHOT_NAMESPACE, "uid-1").await.unwrap();
    assert!(val.is_none());

    store.set(SNAPSHOT_NAMESPACE, "uid-1", "{}").await.unwrap();
    let val = store.get(SNAPSHOT_NAMESPACE, "uid-1").await.unwrap();
    assert_eq!(val.as_deref(), Some("{}"));

    // Overwrite
    store.set(SNAPSHOT_NAMESPACE, "uid-1", "[]").await.unwrap();
    let val = store.get(SNAPSHOT_NAMESPACE, "uid-1").await.unwrap();
    assert_eq!(val.as_deref(), Some("[]"));

    store.remove(SNAPSHOT_NAMESPACE, "uid-1").await.unwrap();
    assert!(store.get(SNAPSHOT_NAMESPACE, "uid-1").await.unwrap().is_none());
}

#[tokio::test]
async fn test_memory_store_scopes_by_namespace_and_user() {
    let store = MemoryStore::new();
    store.set(SNAPSHOT_NAMESPACE, "uid-1", "snap").await.unwrap();
    store.set(SHOWCASE_NAMESPACE, "uid-1", "show").await.unwrap();
    store.set(SNAPSHOT_NAMESPACE, "uid-2", "other").await.unwrap();

    assert_eq!(
        store.get(SHOWCASE_NAMESPACE, "uid-1").await.unwrap().as_deref(),
        Some("show")
    );
    assert_eq!(
        store.get(SNAPSHOT_NAMESPACE, "uid-2").await.unwrap().as_deref(),
        Some("other")
    );
    assert!(store.get(SHOWCASE_NAMESPACE, "uid-2").await.unwrap().is_none());
}
