use habitgrid_core::{
    entry_description, entry_percentage, DayState, Entry, Habit, HabitStore, MemoryStorage,
    NO_RECORD,
};
use serde_json::{json, Value};

fn store_with_payload(payload: Value) -> (MemoryStorage, HabitStore<MemoryStorage>) {
    let storage = MemoryStorage::with_payload(payload.to_string());
    (storage.clone(), HabitStore::new(storage))
}

#[test]
fn reads_legacy_bare_number_entries() {
    let (_, store) = store_with_payload(json!([{
        "id": "11111111-2222-4333-8444-555555555555",
        "name": "Read",
        "color": "#60A5FA",
        "createdAt": "2024-01-15T08:30:00Z",
        "entries": { "2024-03-05": 85 }
    }]));

    let habits = store.list();
    assert_eq!(habits.len(), 1);
    let entry = habits[0].entry("2024-03-05").unwrap();
    assert_eq!(entry.percentage(), 85);
    assert_eq!(entry.description(), None);
}

#[test]
fn reads_structured_object_entries() {
    let (_, store) = store_with_payload(json!([{
        "id": "11111111-2222-4333-8444-555555555555",
        "name": "Read",
        "color": "#60A5FA",
        "createdAt": "2024-01-15T08:30:00Z",
        "entries": {
            "2024-03-05": { "percentage": 40, "description": "short walk" },
            "2024-03-06": { "percentage": 60 }
        }
    }]));

    let habits = store.list();
    let first = habits[0].entry("2024-03-05").unwrap();
    assert_eq!(first.percentage(), 40);
    assert_eq!(first.description(), Some("short walk"));

    let second = habits[0].entry("2024-03-06").unwrap();
    assert_eq!(second.percentage(), 60);
    assert_eq!(second.description(), None);
}

#[test]
fn reads_mixed_shapes_in_one_collection() {
    let (_, store) = store_with_payload(json!([{
        "id": "11111111-2222-4333-8444-555555555555",
        "name": "Read",
        "color": "#60A5FA",
        "createdAt": "2024-01-15T08:30:00Z",
        "entries": {
            "2024-03-05": 100,
            "2024-03-06": { "percentage": 30, "description": "rainy day" }
        }
    }]));

    let habits = store.list();
    assert_eq!(habits[0].entry("2024-03-05").unwrap().percentage(), 100);
    assert_eq!(
        habits[0].entry("2024-03-06").unwrap().description(),
        Some("rainy day")
    );
}

#[test]
fn legacy_out_of_range_values_clamp_on_read() {
    let (_, store) = store_with_payload(json!([{
        "id": "11111111-2222-4333-8444-555555555555",
        "name": "Read",
        "color": "#60A5FA",
        "createdAt": "2024-01-15T08:30:00Z",
        "entries": { "2024-03-05": 150, "2024-03-06": -5 }
    }]));

    let habits = store.list();
    assert_eq!(habits[0].entry("2024-03-05").unwrap().percentage(), 100);
    assert_eq!(habits[0].entry("2024-03-06").unwrap().percentage(), 0);
}

#[test]
fn writes_bare_number_without_description_and_object_with_one() {
    let storage = MemoryStorage::new();
    let mut store = HabitStore::new(storage.clone());
    let habit = store.create("Read", "#60A5FA").unwrap();

    store.update_entry(habit.id, "2024-03-05", 100, None).unwrap();
    store
        .update_entry(habit.id, "2024-03-06", 40, Some("short walk"))
        .unwrap();

    let payload: Value = serde_json::from_str(&storage.payload().unwrap()).unwrap();
    let entries = &payload[0]["entries"];
    assert_eq!(entries["2024-03-05"], json!(100));
    assert_eq!(
        entries["2024-03-06"],
        json!({ "percentage": 40, "description": "short walk" })
    );
}

#[test]
fn wire_format_uses_camel_case_fields() {
    let storage = MemoryStorage::new();
    let mut store = HabitStore::new(storage.clone());
    store.create("Read", "#60A5FA").unwrap();

    let payload: Value = serde_json::from_str(&storage.payload().unwrap()).unwrap();
    let habit = &payload[0];
    assert!(habit["id"].is_string());
    assert!(habit["createdAt"].is_string());
    assert!(habit["entries"].is_object());
    assert_eq!(habit["name"], json!("Read"));
    assert_eq!(habit["color"], json!("#60A5FA"));
}

#[test]
fn collection_roundtrip_reproduces_equivalent_habits() {
    let mut store = HabitStore::new(MemoryStorage::new());
    let first = store.create("Read", "#60A5FA").unwrap();
    let second = store.create("Run", "#FB923C").unwrap();
    store.update_entry(first.id, "2024-03-05", 100, None).unwrap();
    store
        .update_entry(second.id, "2024-03-06", 55, Some("windy"))
        .unwrap();

    let habits = store.list();
    let serialized = serde_json::to_string(&habits).unwrap();
    let decoded: Vec<Habit> = serde_json::from_str(&serialized).unwrap();
    assert_eq!(decoded, habits);
}

#[test]
fn normalizer_is_total_over_all_shapes() {
    assert_eq!(entry_percentage(None), NO_RECORD);
    assert_eq!(entry_description(None), None);

    let bare = Entry::new(85, None);
    assert_eq!(entry_percentage(Some(&bare)), 85);
    assert_eq!(entry_description(Some(&bare)), None);

    let noted = Entry::new(40, Some("short walk"));
    assert_eq!(entry_percentage(Some(&noted)), 40);
    assert_eq!(entry_description(Some(&noted)), Some("short walk"));
}

#[test]
fn day_state_follows_percentage_bands() {
    assert_eq!(DayState::from_percentage(NO_RECORD), DayState::NoRecord);
    assert_eq!(DayState::from_percentage(0), DayState::Incomplete);
    assert_eq!(DayState::from_percentage(1), DayState::Partial);
    assert_eq!(DayState::from_percentage(99), DayState::Partial);
    assert_eq!(DayState::from_percentage(100), DayState::Complete);

    assert_eq!(DayState::of(None), DayState::NoRecord);
    assert_eq!(DayState::of(Some(&Entry::new(100, None))), DayState::Complete);
}

#[test]
fn completion_stats_tally_entry_states() {
    let mut store = HabitStore::new(MemoryStorage::new());
    let habit = store.create("Read", "#60A5FA").unwrap();
    store.update_entry(habit.id, "2024-03-01", 100, None).unwrap();
    store.update_entry(habit.id, "2024-03-02", 100, None).unwrap();
    store.update_entry(habit.id, "2024-03-03", 45, None).unwrap();
    store.update_entry(habit.id, "2024-03-04", 0, None).unwrap();

    let stats = store.find_by_id(habit.id).unwrap().completion_stats();
    assert_eq!(stats.total, 4);
    assert_eq!(stats.completed, 2);
    assert_eq!(stats.partial, 1);
    assert_eq!(stats.not_completed, 1);
}
