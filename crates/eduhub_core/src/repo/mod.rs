//! Per-collection repositories over the slot store.
//!
//! # Responsibility
//! - Give each controller a `load`/`save` contract for its own collection.
//! - Keep slot names and JSON encoding out of controller code.
//!
//! # Invariants
//! - `save_*` rewrites the full collection; there is no incremental diffing.
//! - `load_*` never fails on malformed slot content; it yields an empty list.

pub mod note_repo;
pub mod task_repo;
