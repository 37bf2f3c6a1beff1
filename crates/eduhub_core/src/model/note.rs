//! Study note record.

use super::{required_field, ValidationError};
use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Characters of content shown on a note card before the ellipsis.
pub const PREVIEW_MAX_CHARS: usize = 140;
/// Card tag used when a stored note has no subject.
pub const FALLBACK_SUBJECT_TAG: &str = "General";

pub type NoteId = Uuid;

/// One note, persisted in the `eduhub_notes` slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    #[serde(default = "Uuid::new_v4")]
    pub id: NoteId,
    pub title: String,
    /// Grouping and filter key.
    pub subject: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Note {
    /// Builds a note stamped with the current time.
    ///
    /// # Errors
    /// - `MissingNoteFields` when any field is blank after trimming.
    pub fn new(title: &str, subject: &str, content: &str) -> Result<Self, ValidationError> {
        Self::with_id(Uuid::new_v4(), title, subject, content, Utc::now())
    }

    /// Builds a note with a caller-provided id and timestamp.
    pub fn with_id(
        id: NoteId,
        title: &str,
        subject: &str,
        content: &str,
        created_at: DateTime<Utc>,
    ) -> Result<Self, ValidationError> {
        match (
            required_field(title),
            required_field(subject),
            required_field(content),
        ) {
            (Some(title), Some(subject), Some(content)) => Ok(Self {
                id,
                title,
                subject,
                content,
                created_at,
            }),
            _ => Err(ValidationError::MissingNoteFields),
        }
    }

    /// Content shortened for the card view.
    pub fn preview(&self) -> String {
        truncate_preview(&self.content, PREVIEW_MAX_CHARS)
    }

    /// Subject shown on the card tag.
    pub fn subject_tag(&self) -> &str {
        if self.subject.is_empty() {
            FALLBACK_SUBJECT_TAG
        } else {
            &self.subject
        }
    }

    /// Creation time in the local timezone, e.g. `Created: 2024-03-01 14:05`.
    pub fn created_label(&self) -> String {
        format!(
            "Created: {}",
            self.created_at
                .with_timezone(&Local)
                .format("%Y-%m-%d %H:%M")
        )
    }
}

fn truncate_preview(content: &str, max_chars: usize) -> String {
    if content.chars().count() <= max_chars {
        return content.to_string();
    }
    let mut preview = content.chars().take(max_chars).collect::<String>();
    preview.push_str("...");
    preview
}
