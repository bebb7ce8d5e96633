use std::fs;

use planner_core::{
    state::{Allocation, BudgetState},
    storage::{JsonStorage, Snapshot, SnapshotBackend},
};
use tempfile::TempDir;

fn storage_with_temp_dir() -> (JsonStorage, TempDir) {
    let temp = TempDir::new().expect("temp dir");
    let storage = JsonStorage::new(Some(temp.path().to_path_buf())).expect("json storage");
    (storage, temp)
}

#[test]
fn snapshot_roundtrips_through_disk() {
    let (storage, _guard) = storage_with_temp_dir();
    let mut state = BudgetState::seed();
    state.total_budget = 5000.0;
    state.display_currency = "USD".into();
    storage.save(&Snapshot::of(&state)).expect("save");

    let loaded = storage.load().expect("load").expect("snapshot present");
    let merged = loaded.merge_into(BudgetState::seed());
    assert_eq!(merged.total_budget, 5000.0);
    assert_eq!(merged.display_currency, "USD");
    assert_eq!(merged.allocations, state.allocations);
}

#[test]
fn partial_snapshot_keeps_seed_for_absent_fields() {
    let (storage, _guard) = storage_with_temp_dir();
    fs::write(storage.path(), r#"{ "total_budget": 750 }"#).expect("write partial");

    let loaded = storage.load().expect("load").expect("snapshot present");
    let merged = loaded.merge_into(BudgetState::seed());
    assert_eq!(merged.total_budget, 750.0);
    assert_eq!(merged.allocations, BudgetState::seed().allocations);
    assert_eq!(merged.display_currency, "EUR");
}

#[test]
fn malformed_fields_fall_back_individually() {
    let (storage, _guard) = storage_with_temp_dir();
    fs::write(
        storage.path(),
        r#"{ "total_budget": "lots", "display_currency": "GBP", "allocations": 7 }"#,
    )
    .expect("write snapshot");

    let loaded = storage.load().expect("load").expect("snapshot present");
    let merged = loaded.merge_into(BudgetState::seed());
    assert_eq!(merged.total_budget, 2000.0);
    assert_eq!(merged.display_currency, "GBP");
    assert_eq!(merged.allocations, BudgetState::seed().allocations);
}

#[test]
fn unparseable_file_yields_no_snapshot() {
    let (storage, _guard) = storage_with_temp_dir();
    fs::write(storage.path(), "{ definitely not json").expect("write junk");
    assert!(storage.load().expect("load").is_none());
}

#[test]
fn snapshot_carries_only_the_three_persisted_fields() {
    let (storage, _guard) = storage_with_temp_dir();
    storage
        .save(&Snapshot::of(&BudgetState::seed()))
        .expect("save");
    let raw = fs::read_to_string(storage.path()).expect("read back");
    let value: serde_json::Value = serde_json::from_str(&raw).expect("valid json");
    let object = value.as_object().expect("object");
    assert_eq!(object.len(), 3);
    assert!(object.contains_key("total_budget"));
    assert!(object.contains_key("allocations"));
    assert!(object.contains_key("display_currency"));
}

#[test]
fn merge_prefers_stored_allocations() {
    let snapshot = Snapshot {
        total_budget: None,
        allocations: Some(vec![Allocation::new("Legal", 200.0)]),
        display_currency: None,
    };
    let merged = snapshot.merge_into(BudgetState::seed());
    assert_eq!(merged.allocations.len(), 1);
    assert_eq!(merged.allocations[0].department, "Legal");
    assert_eq!(merged.total_budget, 2000.0);
}
