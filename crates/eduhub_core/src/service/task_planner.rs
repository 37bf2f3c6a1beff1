//! Task planner controller.
//!
//! # Responsibility
//! - Create, complete and delete tasks.
//! - Render the planner table in insertion order.
//!
//! # Invariants
//! - Mutations address tasks by stable id; positional helpers resolve the
//!   current render position to an id first.
//! - A done task is never set back to pending.

use crate::model::task::{Task, TaskId, TaskStatus};
use crate::model::ValidationError;
use crate::repo::task_repo::TaskRepository;
use crate::storage::{StoreError, StoreResult};
use log::{debug, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Placeholder row text for an empty planner.
pub const EMPTY_TASKS_PLACEHOLDER: &str =
    "No tasks added yet. Start by creating a subject and topic.";

/// Planner operation error.
#[derive(Debug)]
pub enum PlannerError {
    /// Rejected input; nothing was persisted.
    Validation(ValidationError),
    TaskNotFound(TaskId),
    /// Render position does not exist in the current table.
    PositionOutOfRange { position: usize, len: usize },
    Store(StoreError),
}

impl Display for PlannerError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::TaskNotFound(id) => write!(f, "task not found: {id}"),
            Self::PositionOutOfRange { position, len } => {
                write!(f, "no task at position {position} (planner has {len})")
            }
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for PlannerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        // Wrapped errors already print their text in `Display`.
        match self {
            Self::Validation(err) => err.source(),
            Self::Store(err) => err.source(),
            _ => None,
        }
    }
}

impl From<ValidationError> for PlannerError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<StoreError> for PlannerError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// One planner table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRow {
    /// Zero-based render position.
    pub position: usize,
    pub id: TaskId,
    pub subject: String,
    pub topic: String,
    /// Date text, `-` when absent.
    pub date: String,
    pub status: TaskStatus,
}

/// Rendered planner table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskTable {
    Empty { placeholder: &'static str },
    Rows(Vec<TaskRow>),
}

/// Controller owning the task collection for one page lifetime.
pub struct TaskPlanner<R: TaskRepository> {
    repo: R,
    tasks: Vec<Task>,
}

impl<R: TaskRepository> TaskPlanner<R> {
    /// Loads the current collection from `repo`.
    pub fn open(repo: R) -> StoreResult<Self> {
        let tasks = repo.load_tasks()?;
        debug!("event=planner_open module=planner status=ok tasks={}", tasks.len());
        Ok(Self { repo, tasks })
    }

    /// Tasks in render (insertion) order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Appends a pending task and persists the collection.
    ///
    /// # Errors
    /// - `Validation` when subject or topic is blank; state is untouched.
    pub fn create(
        &mut self,
        subject: &str,
        topic: &str,
        date: Option<&str>,
    ) -> Result<Task, PlannerError> {
        let task = Task::new(subject, topic, date).map_err(|err| {
            warn!("event=task_create module=planner status=rejected reason=missing_fields");
            err
        })?;

        let mut next = self.tasks.clone();
        next.push(task.clone());
        self.commit(next)?;

        info!(
            "event=task_create module=planner status=ok task_id={} tasks={}",
            task.id,
            self.tasks.len()
        );
        Ok(task)
    }

    /// Marks the task done. Completing a done task is a no-op.
    pub fn mark_done(&mut self, id: TaskId) -> Result<Task, PlannerError> {
        let index = self.index_of(id)?;
        if self.tasks[index].is_done() {
            debug!("event=task_done module=planner status=unchanged task_id={id}");
            return Ok(self.tasks[index].clone());
        }

        let mut next = self.tasks.clone();
        next[index].mark_done();
        self.commit(next)?;

        info!("event=task_done module=planner status=ok task_id={id}");
        Ok(self.tasks[index].clone())
    }

    /// Marks the task shown at render `position` done.
    pub fn mark_done_at(&mut self, position: usize) -> Result<Task, PlannerError> {
        let id = self.id_at(position)?;
        self.mark_done(id)
    }

    /// Removes the task from any state and returns it.
    pub fn delete(&mut self, id: TaskId) -> Result<Task, PlannerError> {
        let index = self.index_of(id)?;
        let mut next = self.tasks.clone();
        let removed = next.remove(index);
        self.commit(next)?;

        info!(
            "event=task_delete module=planner status=ok task_id={id} tasks={}",
            self.tasks.len()
        );
        Ok(removed)
    }

    /// Removes the task shown at render `position`.
    pub fn delete_at(&mut self, position: usize) -> Result<Task, PlannerError> {
        let id = self.id_at(position)?;
        self.delete(id)
    }

    /// Builds the planner table.
    pub fn render(&self) -> TaskTable {
        if self.tasks.is_empty() {
            return TaskTable::Empty {
                placeholder: EMPTY_TASKS_PLACEHOLDER,
            };
        }

        let rows = self
            .tasks
            .iter()
            .enumerate()
            .map(|(position, task)| TaskRow {
                position,
                id: task.id,
                subject: task.subject.clone(),
                topic: task.topic.clone(),
                date: task.date_label().to_string(),
                status: task.status(),
            })
            .collect();
        TaskTable::Rows(rows)
    }

    fn index_of(&self, id: TaskId) -> Result<usize, PlannerError> {
        self.tasks
            .iter()
            .position(|task| task.id == id)
            .ok_or(PlannerError::TaskNotFound(id))
    }

    fn id_at(&self, position: usize) -> Result<TaskId, PlannerError> {
        self.tasks
            .get(position)
            .map(|task| task.id)
            .ok_or(PlannerError::PositionOutOfRange {
                position,
                len: self.tasks.len(),
            })
    }

    fn commit(&mut self, next: Vec<Task>) -> Result<(), PlannerError> {
        self.repo.save_tasks(&next)?;
        self.tasks = next;
        Ok(())
    }
}
