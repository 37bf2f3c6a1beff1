//! Note board controller.
//!
//! # Responsibility
//! - Create and delete notes.
//! - Derive subject filter options and render the (filtered) card list.
//!
//! # Invariants
//! - Deletion is by identity, never by position in a filtered view.
//! - Filter options are derived from the current collection on every call.
//! - Subject filtering compares stored values exactly (case-sensitive).

use crate::model::note::{Note, NoteId};
use crate::model::ValidationError;
use crate::repo::note_repo::NoteRepository;
use crate::storage::{StoreError, StoreResult};
use chrono::{DateTime, Utc};
use log::{debug, info, warn};
use std::collections::BTreeSet;
use std::convert::Infallible;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Filter value meaning "no subject restriction".
pub const ALL_SUBJECTS: &str = "all";
/// Placeholder text for an empty (or fully filtered-out) board.
pub const EMPTY_NOTES_PLACEHOLDER: &str = "No notes yet. Create your first note above.";

/// Note board operation error.
#[derive(Debug)]
pub enum NoteBoardError {
    /// Rejected input; nothing was persisted.
    Validation(ValidationError),
    NoteNotFound(NoteId),
    /// Card position does not exist in the requested view.
    PositionOutOfRange { position: usize, len: usize },
    Store(StoreError),
}

impl Display for NoteBoardError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NoteNotFound(id) => write!(f, "note not found: {id}"),
            Self::PositionOutOfRange { position, len } => {
                write!(f, "no note at position {position} (view has {len})")
            }
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for NoteBoardError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        // Wrapped errors already print their text in `Display`.
        match self {
            Self::Validation(err) => err.source(),
            Self::Store(err) => err.source(),
            _ => None,
        }
    }
}

impl From<ValidationError> for NoteBoardError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<StoreError> for NoteBoardError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Subject filter for the note view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum SubjectFilter {
    #[default]
    All,
    Subject(String),
}

impl SubjectFilter {
    /// Parses a filter value; the `all` sentinel maps to `All`.
    pub fn parse(value: &str) -> Self {
        if value == ALL_SUBJECTS {
            Self::All
        } else {
            Self::Subject(value.to_string())
        }
    }

    pub fn matches(&self, note: &Note) -> bool {
        match self {
            Self::All => true,
            Self::Subject(subject) => note.subject == *subject,
        }
    }

    /// Human label, `All subjects` for the sentinel.
    pub fn label(&self) -> &str {
        match self {
            Self::All => "All subjects",
            Self::Subject(subject) => subject,
        }
    }
}

impl FromStr for SubjectFilter {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl Display for SubjectFilter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => f.write_str(ALL_SUBJECTS),
            Self::Subject(subject) => f.write_str(subject),
        }
    }
}

/// One rendered note card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteCard {
    /// Zero-based position inside the rendered view.
    pub position: usize,
    pub id: NoteId,
    pub subject_tag: String,
    pub title: String,
    pub preview: String,
    pub created_at: DateTime<Utc>,
    pub created_label: String,
}

/// Rendered note view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoteList {
    Empty { placeholder: &'static str },
    Cards(Vec<NoteCard>),
}

/// Controller owning the note collection for one page lifetime.
pub struct NoteBoard<R: NoteRepository> {
    repo: R,
    notes: Vec<Note>,
}

impl<R: NoteRepository> NoteBoard<R> {
    /// Loads the current collection from `repo`.
    pub fn open(repo: R) -> StoreResult<Self> {
        let notes = repo.load_notes()?;
        debug!("event=notes_open module=notes status=ok notes={}", notes.len());
        Ok(Self { repo, notes })
    }

    /// All notes in insertion order.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Appends a note and persists the collection.
    ///
    /// # Errors
    /// - `Validation` when any field is blank; state is untouched.
    pub fn create(
        &mut self,
        title: &str,
        subject: &str,
        content: &str,
    ) -> Result<Note, NoteBoardError> {
        let note = Note::new(title, subject, content).map_err(|err| {
            warn!("event=note_create module=notes status=rejected reason=missing_fields");
            err
        })?;

        let mut next = self.notes.clone();
        next.push(note.clone());
        self.commit(next)?;

        info!(
            "event=note_create module=notes status=ok note_id={} notes={}",
            note.id,
            self.notes.len()
        );
        Ok(note)
    }

    /// Removes the note with `id`.
    pub fn delete(&mut self, id: NoteId) -> Result<Note, NoteBoardError> {
        let index = self
            .notes
            .iter()
            .position(|note| note.id == id)
            .ok_or(NoteBoardError::NoteNotFound(id))?;
        self.remove_index(index)
    }

    /// Removes the first note structurally equal to `note`.
    pub fn delete_matching(&mut self, note: &Note) -> Result<Note, NoteBoardError> {
        let index = self
            .notes
            .iter()
            .position(|candidate| candidate == note)
            .ok_or(NoteBoardError::NoteNotFound(note.id))?;
        self.remove_index(index)
    }

    /// Removes the note shown at `position` in the `filter` view.
    pub fn delete_visible_at(
        &mut self,
        filter: &SubjectFilter,
        position: usize,
    ) -> Result<Note, NoteBoardError> {
        let visible = self.visible(filter);
        let id = visible
            .get(position)
            .map(|note| note.id)
            .ok_or(NoteBoardError::PositionOutOfRange {
                position,
                len: visible.len(),
            })?;
        self.delete(id)
    }

    /// Notes matching `filter`, in insertion order.
    pub fn visible(&self, filter: &SubjectFilter) -> Vec<&Note> {
        self.notes.iter().filter(|note| filter.matches(note)).collect()
    }

    /// `All` followed by distinct non-blank subjects, sorted.
    pub fn filter_options(&self) -> Vec<SubjectFilter> {
        let subjects: BTreeSet<&str> = self
            .notes
            .iter()
            .map(|note| note.subject.trim())
            .filter(|subject| !subject.is_empty())
            .collect();

        std::iter::once(SubjectFilter::All)
            .chain(
                subjects
                    .into_iter()
                    .map(|subject| SubjectFilter::Subject(subject.to_string())),
            )
            .collect()
    }

    /// Builds the card list for `filter`.
    pub fn render(&self, filter: &SubjectFilter) -> NoteList {
        let visible = self.visible(filter);
        if visible.is_empty() {
            return NoteList::Empty {
                placeholder: EMPTY_NOTES_PLACEHOLDER,
            };
        }

        let cards = visible
            .into_iter()
            .enumerate()
            .map(|(position, note)| NoteCard {
                position,
                id: note.id,
                subject_tag: note.subject_tag().to_string(),
                title: note.title.clone(),
                preview: note.preview(),
                created_at: note.created_at,
                created_label: note.created_label(),
            })
            .collect();
        NoteList::Cards(cards)
    }

    fn remove_index(&mut self, index: usize) -> Result<Note, NoteBoardError> {
        let mut next = self.notes.clone();
        let removed = next.remove(index);
        self.commit(next)?;

        info!(
            "event=note_delete module=notes status=ok note_id={} notes={}",
            removed.id,
            self.notes.len()
        );
        Ok(removed)
    }

    fn commit(&mut self, next: Vec<Note>) -> Result<(), NoteBoardError> {
        self.repo.save_notes(&next)?;
        self.notes = next;
        Ok(())
    }
}
