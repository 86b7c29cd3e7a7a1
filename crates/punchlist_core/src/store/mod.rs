//! Task storage layer.
//!
//! # Responsibility
//! - Define the append-only task access contract.
//! - Keep the ordered task sequence as the single source of truth for
//!   highlight-group recomputation.
//!
//! # Invariants
//! - Stored tasks are immutable; no update or delete operation exists.
//! - `list()` preserves creation order.

pub mod task_store;
