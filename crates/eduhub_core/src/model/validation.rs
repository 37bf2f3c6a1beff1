use std::error::Error;
use std::fmt::{Display, Formatter};

/// Rejected user input. The message is shown to the user as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Task subject or topic is blank.
    MissingTaskFields,
    /// Note title, subject or content is blank.
    MissingNoteFields,
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingTaskFields => write!(f, "Please enter both subject and topic."),
            Self::MissingNoteFields => write!(f, "Please fill in all note fields."),
        }
    }
}

impl Error for ValidationError {}
