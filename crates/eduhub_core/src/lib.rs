//! Core logic for the EduHub study tracker.
//!
//! Storage, controllers and page routing live here; front ends only parse
//! input and print the view models returned by the controllers.

pub mod db;
pub mod logging;
pub mod model;
pub mod page;
pub mod repo;
pub mod service;
pub mod storage;

pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::note::{Note, NoteId};
pub use model::task::{Task, TaskId, TaskStatus};
pub use model::ValidationError;
pub use page::{ControllerKind, Page, PageSession, UnknownPage};
pub use repo::note_repo::{NoteRepository, SlotNoteRepository};
pub use repo::task_repo::{SlotTaskRepository, TaskRepository};
pub use service::note_board::{NoteBoard, NoteBoardError, NoteCard, NoteList, SubjectFilter};
pub use service::summary::{tip_of_the_day, DashboardSummary, ProfileSummary, STUDY_TIPS};
pub use service::task_planner::{PlannerError, TaskPlanner, TaskRow, TaskTable};
pub use storage::{
    MemorySlotStore, SlotStore, SqliteSlotStore, StoreError, StoreResult, NOTES_SLOT, TASKS_SLOT,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
