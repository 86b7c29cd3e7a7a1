//! Domain model for viewpoint-bound tasks.
//!
//! # Responsibility
//! - Define the immutable task record and its captured snapshots.
//! - Define the injected assignee roster used to resolve task assignment.
//!
//! # Invariants
//! - Every task is identified by a stable `TaskId` that is never reused.
//! - Captured viewpoint and selection snapshots are frozen at creation.
//!
//! # See also
//! - docs/architecture/data-model.md

pub mod roster;
pub mod selection;
pub mod task;
