//! Retained scene: one optional root element per (series, data index),
//! reconciled against declared element trees by name-keyed diffing.

pub mod diff;
pub mod node;
pub mod store;

pub use diff::DiffOp;
pub use node::{ElementId, NodeShape, SceneNode};
pub use store::{ElementRecord, ElementStore};

use indexmap::IndexMap;

use crate::scene::diff::{DiffContext, remove_element, sync_slot};
use crate::scene::node::ElementIdGen;
use crate::series::element::ElementOption;

/// Retained element trees for every registered series.
#[derive(Debug, Default)]
pub struct Scene {
    series_roots: IndexMap<usize, Vec<Option<SceneNode>>>,
    id_gen: ElementIdGen,
}

impl Scene {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reconciles the root slot of one datum against its declared option,
    /// appending the performed operations to `ops` and keeping `store`
    /// entries in sync with element lifetimes.
    pub fn sync_root(
        &mut self,
        store: &mut ElementStore,
        series_index: usize,
        data_index: usize,
        universal_transition: bool,
        option: Option<&ElementOption>,
        ops: &mut Vec<DiffOp>,
    ) {
        let roots = self.series_roots.entry(series_index).or_default();
        if data_index >= roots.len() {
            roots.resize_with(data_index + 1, || None);
        }

        let mut ctx = DiffContext {
            store,
            id_gen: &mut self.id_gen,
            series_index,
            data_index,
            universal_transition,
            ops,
        };
        sync_slot(&mut ctx, &mut roots[data_index], option);
    }

    /// Removes retained roots beyond the current data length.
    pub fn truncate_series(
        &mut self,
        store: &mut ElementStore,
        series_index: usize,
        len: usize,
        ops: &mut Vec<DiffOp>,
    ) {
        let Some(roots) = self.series_roots.get_mut(&series_index) else {
            return;
        };

        while roots.len() > len {
            let data_index = roots.len() - 1;
            if let Some(node) = roots.pop().flatten() {
                let mut ctx = DiffContext {
                    store: &mut *store,
                    id_gen: &mut self.id_gen,
                    series_index,
                    data_index,
                    universal_transition: false,
                    ops: &mut *ops,
                };
                remove_element(&mut ctx, node);
            }
        }
    }

    /// Drops every retained element of one series.
    pub fn remove_series(
        &mut self,
        store: &mut ElementStore,
        series_index: usize,
        ops: &mut Vec<DiffOp>,
    ) {
        let Some(roots) = self.series_roots.shift_remove(&series_index) else {
            return;
        };

        for (data_index, slot) in roots.into_iter().enumerate() {
            if let Some(node) = slot {
                let mut ctx = DiffContext {
                    store: &mut *store,
                    id_gen: &mut self.id_gen,
                    series_index,
                    data_index,
                    universal_transition: false,
                    ops: &mut *ops,
                };
                remove_element(&mut ctx, node);
            }
        }
    }

    #[must_use]
    pub fn root(&self, series_index: usize, data_index: usize) -> Option<&SceneNode> {
        self.series_roots
            .get(&series_index)?
            .get(data_index)?
            .as_ref()
    }

    #[must_use]
    pub fn roots(&self, series_index: usize) -> &[Option<SceneNode>] {
        self.series_roots
            .get(&series_index)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Series indices holding retained roots, in registration order.
    pub fn series_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.series_roots.keys().copied()
    }

    /// Locates any retained node by id.
    #[must_use]
    pub fn find(&self, id: ElementId) -> Option<&SceneNode> {
        self.series_roots
            .values()
            .flatten()
            .filter_map(Option::as_ref)
            .find_map(|root| root.find(id))
    }

    /// Total retained node count across every series.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.series_roots
            .values()
            .flatten()
            .filter_map(Option::as_ref)
            .map(SceneNode::subtree_len)
            .sum()
    }
}
