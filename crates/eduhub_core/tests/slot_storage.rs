use chrono::{TimeZone, Utc};
use eduhub_core::db::open_db_in_memory;
use eduhub_core::storage::{load, save};
use eduhub_core::{
    MemorySlotStore, Note, NoteRepository, SlotNoteRepository, SlotStore, SlotTaskRepository,
    SqliteSlotStore, Task, TaskRepository, TaskStatus, NOTES_SLOT, TASKS_SLOT,
};

fn sample_tasks() -> Vec<Task> {
    let created_at = Utc.with_ymd_and_hms(2024, 1, 1, 9, 30, 0).unwrap();
    let mut done = Task::new("Bio", "Cells", None).unwrap();
    done.mark_done();
    vec![
        Task::with_id(
            uuid::Uuid::new_v4(),
            "Math",
            "Algebra",
            Some("2024-01-01"),
            created_at,
        )
        .unwrap(),
        done,
    ]
}

#[test]
fn sqlite_round_trip_returns_equal_tasks() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteSlotStore::new(&conn);
    let tasks = sample_tasks();

    save(&store, TASKS_SLOT, &tasks).unwrap();
    let loaded: Vec<Task> = load(&store, TASKS_SLOT, Vec::new()).unwrap();

    assert_eq!(loaded, tasks);
}

#[test]
fn memory_round_trip_returns_equal_notes() {
    let store = MemorySlotStore::new();
    let repo = SlotNoteRepository::new(store.clone());
    let notes = vec![
        Note::new("Mitosis", "Bio", "Prophase, metaphase, anaphase").unwrap(),
        Note::new("Limits", "Math", "epsilon-delta").unwrap(),
    ];

    repo.save_notes(&notes).unwrap();

    assert_eq!(repo.load_notes().unwrap(), notes);
    assert!(store.read_slot(NOTES_SLOT).unwrap().is_some());
}

#[test]
fn load_returns_fallback_for_absent_slot() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteSlotStore::new(&conn);
    let fallback = sample_tasks();

    let loaded: Vec<Task> = load(&store, TASKS_SLOT, fallback.clone()).unwrap();

    assert_eq!(loaded, fallback);
    assert_eq!(store.read_slot(TASKS_SLOT).unwrap(), None);
}

#[test]
fn load_returns_fallback_for_malformed_slot_without_repairing_it() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteSlotStore::new(&conn);
    store.write_slot(TASKS_SLOT, "{not json").unwrap();

    let repo = SlotTaskRepository::new(store);
    assert!(repo.load_tasks().unwrap().is_empty());
    assert_eq!(
        store.read_slot(TASKS_SLOT).unwrap().as_deref(),
        Some("{not json")
    );
}

#[test]
fn records_written_by_the_web_page_load() {
    let store = MemorySlotStore::new();
    store
        .write_slot(
            TASKS_SLOT,
            r#"[{"subject":"Math","topic":"Algebra","date":"","status":"done","createdAt":"2024-01-01T10:00:00.000Z"}]"#,
        )
        .unwrap();
    store
        .write_slot(
            NOTES_SLOT,
            r#"[{"title":"T","subject":"Bio","content":"C","createdAt":"2024-01-02T10:00:00.000Z"}]"#,
        )
        .unwrap();

    let tasks = SlotTaskRepository::new(store.clone()).load_tasks().unwrap();
    let notes = SlotNoteRepository::new(store).load_notes().unwrap();

    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].date, None);
    assert_eq!(tasks[0].date_label(), "-");
    assert_eq!(tasks[0].status(), TaskStatus::Done);
    assert!(!tasks[0].id.is_nil());
    assert_eq!(notes.len(), 1);
    assert_eq!(
        notes[0].created_at,
        Utc.with_ymd_and_hms(2024, 1, 2, 10, 0, 0).unwrap()
    );
}

#[test]
fn persisted_layout_uses_camel_case_keys() {
    let store = MemorySlotStore::new();
    SlotTaskRepository::new(store.clone())
        .save_tasks(&sample_tasks())
        .unwrap();

    let raw = store.read_slot(TASKS_SLOT).unwrap().unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let first = &value[0];
    assert_eq!(first["subject"], "Math");
    assert_eq!(first["topic"], "Algebra");
    assert_eq!(first["date"], "2024-01-01");
    assert_eq!(first["status"], "pending");
    assert!(first["createdAt"].as_str().unwrap().starts_with("2024-01-01T09:30:00"));
    assert_eq!(value[1]["status"], "done");
}

#[test]
fn remove_slot_clears_value() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteSlotStore::new(&conn);
    store.write_slot(NOTES_SLOT, "[]").unwrap();
    store.write_slot(TASKS_SLOT, "[]").unwrap();
    assert_eq!(store.keys().unwrap(), vec![NOTES_SLOT, TASKS_SLOT]);

    store.remove_slot(NOTES_SLOT).unwrap();
    store.remove_slot(NOTES_SLOT).unwrap();

    assert_eq!(store.read_slot(NOTES_SLOT).unwrap(), None);
    assert_eq!(store.keys().unwrap(), vec![TASKS_SLOT]);
}
