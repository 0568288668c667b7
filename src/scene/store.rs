use indexmap::IndexMap;

use crate::scene::node::ElementId;
use crate::series::element::ElementOption;
use crate::series::transition::TransitionHints;

/// Transient bookkeeping attached to one live scene element.
///
/// `series_index`/`data_index` are a back-reference to the render callback
/// that produced the element; the record never owns the element itself.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementRecord {
    /// Last declared option for this element, with group children stripped.
    pub option: ElementOption,
    /// Merged transition hints, including the prior leave-to snapshot.
    pub transition: TransitionHints,
    /// Resolved morph hint (element declaration or series default).
    pub morph: bool,
    pub series_index: usize,
    pub data_index: usize,
}

/// Associative store keyed by element identity.
///
/// Entry lifetime is tied to the element's lifetime: the scene inserts a
/// record on mount and removes it (with all descendants) on removal.
#[derive(Debug, Default)]
pub struct ElementStore {
    entries: IndexMap<ElementId, ElementRecord>,
}

impl ElementStore {
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn contains(&self, id: ElementId) -> bool {
        self.entries.contains_key(&id)
    }

    #[must_use]
    pub fn get(&self, id: ElementId) -> Option<&ElementRecord> {
        self.entries.get(&id)
    }

    pub(crate) fn insert(&mut self, id: ElementId, record: ElementRecord) {
        self.entries.insert(id, record);
    }

    pub(crate) fn get_mut(&mut self, id: ElementId) -> Option<&mut ElementRecord> {
        self.entries.get_mut(&id)
    }

    pub(crate) fn remove(&mut self, id: ElementId) -> Option<ElementRecord> {
        self.entries.shift_remove(&id)
    }
}
