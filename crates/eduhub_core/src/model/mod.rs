//! Study-tracker records persisted in slots.
//!
//! # Responsibility
//! - Define the `Task` and `Note` shapes stored as JSON arrays.
//! - Normalize user input once, at construction time.
//!
//! # Invariants
//! - Every record carries a stable id; records without one get a fresh id
//!   when decoded.
//! - Text fields are stored trimmed, so read paths compare canonical values.

pub mod note;
pub mod task;
mod validation;

pub use validation::ValidationError;

use serde::{Deserialize, Deserializer};

/// Trims a user-provided field, rejecting blank values.
pub(crate) fn required_field(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Reads an optional string where `""` and `null` both mean absent.
pub(crate) fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.and_then(|text| required_field(&text)))
}
