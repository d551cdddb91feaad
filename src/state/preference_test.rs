use super::*;

#[test]
fn memory_store_starts_empty() {
    let store = MemoryPreferences::default();
    assert_eq!(store.get(), None);
    assert_eq!(staged_user_type(&store), None);
}

#[test]
fn stage_user_type_writes_wire_name() {
    let mut store = MemoryPreferences::default();
    stage_user_type(&mut store, UserType::Enterprise);
    assert_eq!(store.get().as_deref(), Some("enterprise"));
    assert_eq!(staged_user_type(&store), Some(UserType::Enterprise));
    assert_eq!(store.set_count(), 1);
}

#[test]
fn unknown_staged_value_is_kept_but_not_recognized() {
    let store = MemoryPreferences::with_value("admin");
    assert_eq!(store.get().as_deref(), Some("admin"));
    assert_eq!(staged_user_type(&store), None);
}

#[test]
fn clear_removes_value_and_counts() {
    let mut store = MemoryPreferences::with_value("personal");
    store.clear();
    assert_eq!(store.get(), None);
    assert_eq!(store.clear_count(), 1);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn local_storage_store_is_empty_outside_browser() {
    let mut store = LocalStoragePreferences;
    store.set("personal");
    assert_eq!(store.get(), None);
    store.clear();
}

#[test]
fn storage_key_matches_browser_contract() {
    assert_eq!(STORAGE_KEY, "pendingUserType");
}
