//! Injected assignee roster.
//!
//! # Responsibility
//! - Hold the read-only list of people a task can be assigned to.
//! - Resolve submitted assignee names to exactly one roster entry.
//!
//! # Invariants
//! - Entry ids and display names are unique within one roster.
//! - The roster never changes during a viewer session.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Stable identifier for one roster entry.
pub type AssigneeId = u32;

/// One person a task can be assigned to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignee {
    pub id: AssigneeId,
    pub display_name: String,
    pub role: String,
}

impl Assignee {
    pub fn new(id: AssigneeId, display_name: impl Into<String>, role: impl Into<String>) -> Self {
        Self {
            id,
            display_name: display_name.into(),
            role: role.into(),
        }
    }
}

/// Roster construction errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosterError {
    /// A display name is blank after trim.
    BlankDisplayName(AssigneeId),
    /// Two entries share the same id.
    DuplicateId(AssigneeId),
    /// Two entries share the same display name, making name resolution
    /// ambiguous.
    DuplicateDisplayName(String),
}

impl Display for RosterError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankDisplayName(id) => {
                write!(f, "roster entry {id} has a blank display name")
            }
            Self::DuplicateId(id) => write!(f, "roster id already used: {id}"),
            Self::DuplicateDisplayName(name) => {
                write!(f, "roster display name already used: {name}")
            }
        }
    }
}

impl Error for RosterError {}

/// Read-only assignee list passed into the components that need it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    entries: Vec<Assignee>,
}

impl Roster {
    /// Builds a roster, rejecting blank names and duplicate ids/names so a
    /// submitted name can only ever match zero or one entry.
    pub fn new(entries: Vec<Assignee>) -> Result<Self, RosterError> {
        let mut seen_ids = BTreeSet::new();
        let mut seen_names = BTreeSet::new();
        for entry in &entries {
            let name = entry.display_name.trim();
            if name.is_empty() {
                return Err(RosterError::BlankDisplayName(entry.id));
            }
            if !seen_ids.insert(entry.id) {
                return Err(RosterError::DuplicateId(entry.id));
            }
            if !seen_names.insert(name.to_string()) {
                return Err(RosterError::DuplicateDisplayName(name.to_string()));
            }
        }
        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolves a submitted display name to its roster entry.
    pub fn resolve_name(&self, display_name: &str) -> Option<&Assignee> {
        let normalized = display_name.trim();
        self.entries
            .iter()
            .find(|entry| entry.display_name == normalized)
    }

    /// Looks up one entry by id.
    pub fn get(&self, id: AssigneeId) -> Option<&Assignee> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    /// Iterates entries in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &Assignee> {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::{Assignee, Roster, RosterError};

    fn sample_entries() -> Vec<Assignee> {
        vec![
            Assignee::new(1, "Piotr Ostrouch", "Engineer"),
            Assignee::new(2, "Jan Kowalski", "Construction Manager"),
            Assignee::new(3, "Adam Dobry", "Owner"),
        ]
    }

    #[test]
    fn resolves_exact_name_with_trim() {
        let roster = Roster::new(sample_entries()).expect("valid roster");
        let entry = roster
            .resolve_name("  Jan Kowalski  ")
            .expect("name should resolve");
        assert_eq!(entry.id, 2);
    }

    #[test]
    fn unknown_name_resolves_to_none() {
        let roster = Roster::new(sample_entries()).expect("valid roster");
        assert!(roster.resolve_name("Nobody").is_none());
    }

    #[test]
    fn rejects_duplicate_id() {
        let err = Roster::new(vec![
            Assignee::new(1, "A", "Engineer"),
            Assignee::new(1, "B", "Owner"),
        ])
        .expect_err("duplicate id must fail");
        assert_eq!(err, RosterError::DuplicateId(1));
    }

    #[test]
    fn rejects_duplicate_display_name() {
        let err = Roster::new(vec![
            Assignee::new(1, "Same Name", "Engineer"),
            Assignee::new(2, "Same Name", "Owner"),
        ])
        .expect_err("duplicate name must fail");
        assert_eq!(err, RosterError::DuplicateDisplayName("Same Name".into()));
    }

    #[test]
    fn rejects_blank_display_name() {
        let err = Roster::new(vec![Assignee::new(7, "   ", "Engineer")])
            .expect_err("blank name must fail");
        assert_eq!(err, RosterError::BlankDisplayName(7));
    }
}
