use chrono::NaiveDate;
use eduhub_core::{
    MemorySlotStore, Page, PageSession, SlotStore, SlotTaskRepository, TaskPlanner, NOTES_SLOT,
    STUDY_TIPS, TASKS_SLOT,
};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 9, 2).unwrap()
}

#[test]
fn planner_page_opens_only_the_planner() {
    let store = MemorySlotStore::new();

    let session = PageSession::open(Page::Planner, store.clone(), today()).unwrap();

    assert_eq!(session.page(), Page::Planner);
    assert!(session.planner().is_some());
    assert!(session.notes().is_none());
    assert!(session.dashboard().is_none());
    assert!(session.profile().is_none());
    assert!(store.is_empty());
}

#[test]
fn notes_page_does_not_touch_task_slot() {
    let store = MemorySlotStore::new();
    store.write_slot(TASKS_SLOT, "garbage").unwrap();

    let mut session = PageSession::open(Page::Notes, store.clone(), today()).unwrap();
    session
        .notes_mut()
        .unwrap()
        .create("Cells", "Bio", "mitosis")
        .unwrap();

    assert_eq!(store.read_slot(TASKS_SLOT).unwrap().as_deref(), Some("garbage"));
    assert!(store.read_slot(NOTES_SLOT).unwrap().is_some());
    assert!(session.planner_mut().is_none());
}

#[test]
fn dashboard_and_profile_reflect_planner_writes() {
    let store = MemorySlotStore::new();
    let mut planner = TaskPlanner::open(SlotTaskRepository::new(store.clone())).unwrap();
    planner.create("Math", "Algebra", None).unwrap();
    planner.create("Bio", "Cells", None).unwrap();
    planner.mark_done_at(0).unwrap();

    let dashboard = PageSession::open(Page::Dashboard, store.clone(), today()).unwrap();
    let summary = dashboard.dashboard().unwrap();
    assert_eq!(summary.total_tasks, 2);
    assert_eq!(summary.pending_tasks, 1);
    assert_eq!(summary.tip, STUDY_TIPS[2]);

    let profile = PageSession::open(Page::Profile, store, today()).unwrap();
    let summary = profile.profile().unwrap();
    assert_eq!(summary.completed_tasks, 1);
    assert_eq!(summary.distinct_subjects, 2);
}
