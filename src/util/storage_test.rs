use super::*;

#[test]
fn memory_storage_set_get_remove() {
    let mut storage = MemoryStorage::new();
    assert!(storage.is_empty());
    storage.set("token", "T");
    assert_eq!(storage.get("token").as_deref(), Some("T"));
    storage.remove("token");
    assert_eq!(storage.get("token"), None);
    assert_eq!(storage.len(), 0);
}

#[test]
fn load_json_reads_back_saved_value() {
    let mut storage = MemoryStorage::new();
    storage.save_json("draft", &vec![1, 2, 3]);
    assert_eq!(storage.load_json::<Vec<i32>>("draft"), Some(vec![1, 2, 3]));
}

#[test]
fn load_json_treats_garbage_as_missing() {
    let mut storage = MemoryStorage::new();
    storage.set("user", "{not json");
    assert_eq!(storage.load_json::<serde_json::Value>("user"), None);
    assert_eq!(storage.load_json::<serde_json::Value>("absent"), None);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_storage_is_inert_off_browser() {
    let mut storage = BrowserStorage;
    storage.set("token", "T");
    assert_eq!(storage.get("token"), None);
}
