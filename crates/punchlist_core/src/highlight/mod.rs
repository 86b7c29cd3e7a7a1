//! Named, togglable highlight groups.
//!
//! # Responsibility
//! - Define group keys, dimensions and deterministic group styles.
//! - Own group registration bookkeeping and per-dimension toggle state.
//!
//! # Invariants
//! - Group membership is derived from the live task sequence on every
//!   activation, never incrementally maintained.
//! - Deactivating a dimension empties every group in that dimension.

pub mod group;
pub mod manager;
