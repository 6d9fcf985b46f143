use super::*;

#[test]
fn memory_store_starts_empty() {
    let store = MemoryStore::new();
    assert!(store.is_empty());
    assert_eq!(store.get("theme"), None);
}

#[test]
fn memory_store_overwrites_existing_value() {
    let store = MemoryStore::new();
    store.set("theme", "light");
    store.set("theme", "dark");
    assert_eq!(store.get("theme").as_deref(), Some("dark"));
    assert_eq!(store.len(), 1);
}

#[test]
fn memory_store_seeds_entries() {
    let store = MemoryStore::with_entries([("theme", "dark"), ("sidebar", "open")]);
    assert_eq!(store.get("theme").as_deref(), Some("dark"));
    assert_eq!(store.get("sidebar").as_deref(), Some("open"));
}

#[test]
fn borrowed_store_writes_through() {
    let store = MemoryStore::new();
    let borrowed = &store;
    borrowed.set("sidebar", "closed");
    assert_eq!(store.get("sidebar").as_deref(), Some("closed"));
}
