//! Page controllers.
//!
//! # Responsibility
//! - Own one in-memory copy of a collection for a page lifetime.
//! - Apply read-modify-write mutations through the injected repository.
//! - Produce view models the front end renders as-is.
//!
//! # Invariants
//! - A mutation is committed to memory only after the repository save
//!   succeeds, so a failed write leaves the controller state unchanged.
//! - Controllers never reorder their collection; new records are appended.

pub mod note_board;
pub mod summary;
pub mod task_planner;
