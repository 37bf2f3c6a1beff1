//! Planner task record.
//!
//! # Invariants
//! - `status` only moves `Pending -> Done`; there is no reopen.
//! - `created_at` is set once at creation.

use super::{blank_as_none, required_field, ValidationError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub type TaskId = Uuid;

/// Two-state task lifecycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    #[default]
    Pending,
    Done,
}

impl TaskStatus {
    /// Status pill label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Done => "Done",
        }
    }
}

/// One study task, persisted in the `eduhub_tasks` slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    #[serde(default = "Uuid::new_v4")]
    pub id: TaskId,
    pub subject: String,
    pub topic: String,
    /// Free-form due date, usually `YYYY-MM-DD`. Not validated.
    #[serde(default, deserialize_with = "blank_as_none")]
    pub date: Option<String>,
    #[serde(default)]
    status: TaskStatus,
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Builds a pending task stamped with the current time.
    ///
    /// # Errors
    /// - `MissingTaskFields` when subject or topic is blank after trimming.
    pub fn new(subject: &str, topic: &str, date: Option<&str>) -> Result<Self, ValidationError> {
        Self::with_id(Uuid::new_v4(), subject, topic, date, Utc::now())
    }

    /// Builds a pending task with a caller-provided id and timestamp.
    pub fn with_id(
        id: TaskId,
        subject: &str,
        topic: &str,
        date: Option<&str>,
        created_at: DateTime<Utc>,
    ) -> Result<Self, ValidationError> {
        let (Some(subject), Some(topic)) = (required_field(subject), required_field(topic)) else {
            return Err(ValidationError::MissingTaskFields);
        };

        Ok(Self {
            id,
            subject,
            topic,
            date: date.and_then(required_field),
            status: TaskStatus::Pending,
            created_at,
        })
    }

    pub fn status(&self) -> TaskStatus {
        self.status
    }

    pub fn is_done(&self) -> bool {
        self.status == TaskStatus::Done
    }

    /// Marks the task done. Returns `false` if it already was.
    pub fn mark_done(&mut self) -> bool {
        let changed = self.status != TaskStatus::Done;
        self.status = TaskStatus::Done;
        changed
    }

    /// Date column text, `-` when no date was given.
    pub fn date_label(&self) -> &str {
        self.date.as_deref().unwrap_or("-")
    }
}
