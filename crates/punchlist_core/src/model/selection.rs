//! Selection snapshot shape shared by capture, storage and highlighting.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Identifier of a loaded model inside the viewer scene.
pub type ModelId = String;

/// Identifier of a single selectable element within one model.
pub type ElementId = u64;

/// Immutable record of which elements were highlighted at a point in time.
///
/// Keyed by model identifier so selections can span several loaded models.
/// An empty map is a valid snapshot: tasks may exist with no geometric
/// binding.
///
/// Ordered containers keep membership iteration and serialization
/// deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionMap(BTreeMap<ModelId, BTreeSet<ElementId>>);

impl SelectionMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether no element is part of this snapshot.
    ///
    /// Models mapped to empty element sets do not count as members.
    pub fn is_empty(&self) -> bool {
        self.0.values().all(BTreeSet::is_empty)
    }

    /// Total element count across all models.
    pub fn element_count(&self) -> usize {
        self.0.values().map(BTreeSet::len).sum()
    }

    /// Adds one element to the given model entry.
    pub fn insert(&mut self, model: impl Into<ModelId>, element: ElementId) {
        self.0.entry(model.into()).or_default().insert(element);
    }

    /// Merges all members of `other` into this snapshot.
    pub fn union(&mut self, other: &SelectionMap) {
        for (model, elements) in &other.0 {
            self.0
                .entry(model.clone())
                .or_default()
                .extend(elements.iter().copied());
        }
    }

    /// Elements recorded for one model, if any.
    pub fn elements(&self, model: &str) -> Option<&BTreeSet<ElementId>> {
        self.0.get(model)
    }

    /// Iterates `(model, elements)` pairs in stable model order.
    pub fn iter(&self) -> impl Iterator<Item = (&ModelId, &BTreeSet<ElementId>)> {
        self.0.iter()
    }
}

impl FromIterator<(ModelId, BTreeSet<ElementId>)> for SelectionMap {
    fn from_iter<I: IntoIterator<Item = (ModelId, BTreeSet<ElementId>)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
