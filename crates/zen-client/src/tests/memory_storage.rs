use crate::{MemoryStorage, Storage, StorageEvent};

use std::time::Duration;

use tokio::time::timeout;

const QUIET: Duration = Duration::from_millis(50);

#[test]
fn test_set_get_remove() {
    let storage = MemoryStorage::new();
    assert_eq!(storage.get_item("k"), None);

    storage.set_item("k", "v").unwrap();
    assert_eq!(storage.get_item("k").as_deref(), Some("v"));

    storage.remove_item("k").unwrap();
    assert_eq!(storage.get_item("k"), None);
}

#[test]
fn test_remove_missing_key_is_ok() {
    let storage = MemoryStorage::new();
    assert!(storage.remove_item("missing").is_ok());
}

#[test]
fn test_keys_lists_every_key() {
    let storage = MemoryStorage::new();
    storage.set_item("b", "2").unwrap();
    storage.set_item("a", "1").unwrap();

    let mut keys = storage.keys();
    keys.sort();
    assert_eq!(keys, vec!["a".to_string(), "b".to_string()]);
}

#[test]
fn test_tabs_share_items() {
    let first = MemoryStorage::new();
    let second = first.new_tab();
    assert_ne!(first.tab(), second.tab());

    first.set_item("shared", "yes").unwrap();
    assert_eq!(second.get_item("shared").as_deref(), Some("yes"));
}

#[tokio::test]
async fn test_other_tab_receives_change_event() {
    let first = MemoryStorage::new();
    let second = first.new_tab();
    let mut events = second.subscribe();

    first.set_item("zenTraderTokens", "{}").unwrap();

    let event = timeout(QUIET, events.recv()).await.unwrap().unwrap();
    assert_eq!(
        event,
        StorageEvent {
            key: Some("zenTraderTokens".into()),
            tab: first.tab(),
        }
    );
}

#[tokio::test]
async fn test_own_writes_are_not_announced_to_self() {
    let storage = MemoryStorage::new();
    let mut events = storage.subscribe();

    storage.set_item("k", "v").unwrap();

    assert!(timeout(QUIET, events.recv()).await.is_err());
}

#[tokio::test]
async fn test_unchanged_value_emits_no_event() {
    let first = MemoryStorage::new();
    first.set_item("k", "v").unwrap();
    let second = first.new_tab();
    let mut events = second.subscribe();

    first.set_item("k", "v").unwrap();
    first.remove_item("missing").unwrap();

    assert!(timeout(QUIET, events.recv()).await.is_err());
}

#[tokio::test]
async fn test_removal_is_announced() {
    let first = MemoryStorage::new();
    first.set_item("k", "v").unwrap();
    let second = first.new_tab();
    let mut events = second.subscribe();

    first.remove_item("k").unwrap();

    let event = timeout(QUIET, events.recv()).await.unwrap().unwrap();
    assert_eq!(event.key.as_deref(), Some("k"));
}

#[test]
fn test_event_concerns() {
    let keyed = StorageEvent {
        key: Some("a".into()),
        tab: 1,
    };
    assert!(keyed.concerns(&["a", "b"]));
    assert!(!keyed.concerns(&["c"]));

    let unknown = StorageEvent { key: None, tab: 1 };
    assert!(unknown.concerns(&["anything"]));
}
