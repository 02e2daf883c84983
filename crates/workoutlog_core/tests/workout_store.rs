use workoutlog_core::{WorkoutRecord, WorkoutRepository, WorkoutService, WorkoutStore};

#[test]
fn fresh_store_lists_exactly_the_seed_entries() {
    let store = WorkoutStore::new();

    let records = store.list();
    assert_eq!(
        records,
        vec![
            WorkoutRecord::new(1, "John Doe", "Running", 30),
            WorkoutRecord::new(2, "Jane Smith", "Cycling", 45),
            WorkoutRecord::new(3, "Mike Johnson", "Yoga", 50),
        ]
    );
}

#[test]
fn add_appends_after_the_seed_in_call_order() {
    let mut store = WorkoutStore::new();

    store.add(WorkoutRecord::new(4, "Ann Lee", "Swimming", 20));
    store.add(WorkoutRecord::new(5, "John Doe", "Rowing", 15));

    let records = store.list();
    assert_eq!(records.len(), 5);
    assert_eq!(records[3], WorkoutRecord::new(4, "Ann Lee", "Swimming", 20));
    assert_eq!(records[4], WorkoutRecord::new(5, "John Doe", "Rowing", 15));
    // Seed prefix is untouched by appends.
    assert_eq!(records[0].id, 1);
    assert_eq!(records[1].id, 2);
    assert_eq!(records[2].id, 3);
}

#[test]
fn repeated_list_without_writes_returns_equal_sequences() {
    let store = WorkoutStore::new();

    let first = store.list();
    let second = store.list();
    assert_eq!(first, second);
}

#[test]
fn list_returns_a_snapshot_not_the_live_collection() {
    let store = WorkoutStore::new();

    let mut snapshot = store.list();
    snapshot.clear();
    snapshot.push(WorkoutRecord::new(99, "intruder", "Hacking", 1));

    // Mutating the returned sequence must not reach the store.
    assert_eq!(store.len(), 3);
    assert_eq!(store.list()[0].name, "John Doe");
}

#[test]
fn store_accepts_duplicate_ids_as_supplied() {
    let mut store = WorkoutStore::new();

    store.add(WorkoutRecord::new(1, "John Doe", "Running", 30));

    let records = store.list();
    assert_eq!(records.len(), 4);
    assert_eq!(records[0].id, records[3].id);
}

#[test]
fn empty_store_can_be_built_from_explicit_records() {
    let store = WorkoutStore::from_records(Vec::new());
    assert!(store.is_empty());
    assert!(store.list().is_empty());

    let mut store = WorkoutStore::from_records(vec![WorkoutRecord::new(7, "solo", "Walking", 10)]);
    store.add(WorkoutRecord::new(8, "solo", "Walking", 12));
    assert_eq!(store.len(), 2);
}

#[test]
fn service_delegates_list_and_append_to_its_repository() {
    let mut service = WorkoutService::new(WorkoutStore::new());

    assert_eq!(service.list_workouts().len(), 3);

    service.log_workout(WorkoutRecord::new(4, "Ann Lee", "Swimming", 20));

    let records = service.list_workouts();
    assert_eq!(records.len(), 4);
    assert_eq!(
        records.last().unwrap(),
        &WorkoutRecord::new(4, "Ann Lee", "Swimming", 20)
    );

    let repo = service.into_repo();
    assert_eq!(repo.len(), 4);
}
