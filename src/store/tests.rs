use crate::relay::message::Record;
use crate::store::{DocumentStore, SledStore};
use tempfile::tempdir;

fn sample_record(username: &str, message: &str) -> Record {
    Record {
        date: "2026-08-07 12:00:00.000000".to_string(),
        username: username.to_string(),
        message: message.to_string(),
    }
}

#[test]
fn test_insert_and_load_round_trip() {
    let tmp = tempdir().unwrap();
    let store = SledStore::open(tmp.path().to_str().unwrap()).unwrap();

    let record = sample_record("alice", "hello");
    store.insert(&record).unwrap();

    let records = store.load_all().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0], record);
}

#[test]
fn test_load_preserves_insertion_order() {
    let tmp = tempdir().unwrap();
    let store = SledStore::open(tmp.path().to_str().unwrap()).unwrap();

    for i in 0..3 {
        store.insert(&sample_record("bob", &format!("msg{i}"))).unwrap();
        std::thread::sleep(std::time::Duration::from_millis(2)); // ensure timestamp uniqueness
    }

    let messages: Vec<_> = store
        .load_all()
        .unwrap()
        .into_iter()
        .map(|r| r.message)
        .collect();
    assert_eq!(messages, vec!["msg0", "msg1", "msg2"]);
}

#[test]
fn test_empty_store_returns_empty_vec() {
    let tmp = tempdir().unwrap();
    let store = SledStore::open(tmp.path().to_str().unwrap()).unwrap();
    assert!(store.load_all().unwrap().is_empty());
}

#[test]
fn test_record_serializes_with_expected_field_names() {
    let record = sample_record("alice", "hi");
    let value: serde_json::Value = serde_json::to_value(&record).unwrap();

    assert_eq!(value["date"], "2026-08-07 12:00:00.000000");
    assert_eq!(value["username"], "alice");
    assert_eq!(value["message"], "hi");

    let parsed: Record = serde_json::from_value(value).unwrap();
    assert_eq!(parsed, record);
}
