use crate::{FileStorage, Storage, TOKENS_KEY, USER_KEY};

use std::collections::BTreeMap;
use std::time::Duration;

use tempfile::TempDir;
use tokio::time::timeout;

const QUIET: Duration = Duration::from_millis(100);

#[test]
fn test_open_missing_file_starts_empty() {
    let temp = TempDir::new().unwrap();
    let storage = FileStorage::open(temp.path().join("storage.json")).unwrap();

    assert!(storage.keys().is_empty());
}

#[test]
fn test_writes_survive_reopen() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("storage.json");

    {
        let storage = FileStorage::open(&path).unwrap();
        storage.set_item("zenTraderTokens", r#"{"access":"a"}"#).unwrap();
        storage.set_item("other", "1").unwrap();
        storage.remove_item("other").unwrap();
    }

    let reopened = FileStorage::open(&path).unwrap();
    assert_eq!(
        reopened.get_item("zenTraderTokens").as_deref(),
        Some(r#"{"access":"a"}"#)
    );
    assert_eq!(reopened.get_item("other"), None);
}

#[test]
fn test_file_is_a_json_object_of_strings() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("nested").join("storage.json");

    let storage = FileStorage::open(&path).unwrap();
    storage.set_item("k", "v").unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    let parsed: BTreeMap<String, String> = serde_json::from_str(&contents).unwrap();
    assert_eq!(parsed.get("k").map(String::as_str), Some("v"));

    let leftovers: Vec<_> = std::fs::read_dir(path.parent().unwrap())
        .unwrap()
        .map(|entry| entry.unwrap().file_name())
        .filter(|name| name.to_string_lossy().ends_with(".tmp"))
        .collect();
    assert!(leftovers.is_empty(), "temp files left behind: {leftovers:?}");
}

#[test]
fn test_empty_file_starts_empty() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("storage.json");
    std::fs::write(&path, "  \n").unwrap();

    let storage = FileStorage::open(&path).unwrap();
    assert!(storage.keys().is_empty());
}

#[test]
fn test_corrupt_file_is_an_error() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("storage.json");
    std::fs::write(&path, "not json").unwrap();

    let err = FileStorage::open(&path).err().unwrap();
    assert!(err.to_string().contains("storage.json"));
}

#[test]
fn test_write_does_not_restore_key_removed_by_another_process() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("storage.json");

    let watcher = FileStorage::open(&path).unwrap();
    watcher
        .set_item(TOKENS_KEY, r#"{"access":"A1","refresh":"R1"}"#)
        .unwrap();
    let other = FileStorage::open(&path).unwrap();

    other.remove_item(TOKENS_KEY).unwrap();
    watcher.set_item(USER_KEY, "{}").unwrap();

    let reopened = FileStorage::open(&path).unwrap();
    assert_eq!(reopened.get_item(TOKENS_KEY), None);
    assert_eq!(reopened.get_item(USER_KEY).as_deref(), Some("{}"));
}

#[test]
fn test_writes_from_two_processes_are_merged() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("storage.json");

    let first = FileStorage::open(&path).unwrap();
    let second = FileStorage::open(&path).unwrap();

    first.set_item("a", "1").unwrap();
    second.set_item("b", "2").unwrap();
    first.set_item("c", "3").unwrap();

    let reopened = FileStorage::open(&path).unwrap();
    assert_eq!(reopened.keys(), vec!["a", "b", "c"]);
}

#[test]
fn test_reads_see_changes_from_another_process() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("storage.json");

    let watcher = FileStorage::open(&path).unwrap();
    watcher.set_item(TOKENS_KEY, "{}").unwrap();
    let other = FileStorage::open(&path).unwrap();

    other.remove_item(TOKENS_KEY).unwrap();
    other.set_item("zenTraderDemoMode", "true").unwrap();

    assert_eq!(watcher.get_item(TOKENS_KEY), None);
    assert_eq!(watcher.get_item("zenTraderDemoMode").as_deref(), Some("true"));
}

#[tokio::test]
async fn test_change_on_disk_is_announced_to_subscribers() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("storage.json");

    let watcher = FileStorage::open(&path).unwrap();
    watcher.set_item(TOKENS_KEY, "{}").unwrap();
    let other = FileStorage::open(&path).unwrap();
    let mut events = watcher.subscribe();

    other.remove_item(TOKENS_KEY).unwrap();
    assert!(timeout(QUIET, events.recv()).await.is_err());

    assert_eq!(watcher.get_item(TOKENS_KEY), None);
    let event = timeout(QUIET, events.recv()).await.unwrap().unwrap();
    assert_eq!(event.key.as_deref(), Some(TOKENS_KEY));
}

#[tokio::test]
async fn test_own_writes_are_not_announced() {
    let temp = TempDir::new().unwrap();
    let storage = FileStorage::open(temp.path().join("storage.json")).unwrap();
    let mut events = storage.subscribe();

    storage.set_item("k", "v").unwrap();
    storage.get_item("k");
    storage.remove_item("k").unwrap();
    storage.keys();

    assert!(timeout(QUIET, events.recv()).await.is_err());
}

#[test]
fn test_corrupt_file_after_open_keeps_last_known_values() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("storage.json");

    let storage = FileStorage::open(&path).unwrap();
    storage.set_item("k", "v").unwrap();
    std::fs::write(&path, "not json").unwrap();

    assert_eq!(storage.get_item("k").as_deref(), Some("v"));
    assert!(storage.set_item("k", "w").is_err());
}
