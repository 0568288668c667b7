//! Shape-diffing of declared element trees against retained scene nodes.
//!
//! Children carrying a name match the retained child of the same name;
//! unnamed children match positionally among the unnamed. A kind change is a
//! replace. Resulting child order always follows the newly declared order.

use indexmap::IndexMap;

use crate::scene::node::{ElementId, ElementIdGen, NodeShape, SceneNode};
use crate::scene::store::{ElementRecord, ElementStore};
use crate::series::element::{ElementKind, ElementOption};
use crate::series::transition::PropSnapshot;

/// One step of a scene patch, in application order.
#[derive(Debug, Clone, PartialEq)]
pub enum DiffOp {
    Mount {
        id: ElementId,
        kind: ElementKind,
        name: Option<String>,
    },
    Update {
        id: ElementId,
        kind: ElementKind,
    },
    Remove {
        id: ElementId,
        kind: ElementKind,
        /// Resolved leave-to snapshot recorded for the element, handed to the
        /// animation subsystem alongside the removal.
        leave_to: Option<PropSnapshot>,
    },
}

pub(crate) struct DiffContext<'a> {
    pub store: &'a mut ElementStore,
    pub id_gen: &'a mut ElementIdGen,
    pub series_index: usize,
    pub data_index: usize,
    pub universal_transition: bool,
    pub ops: &'a mut Vec<DiffOp>,
}

/// Reconciles one root slot against the declared option.
pub(crate) fn sync_slot(
    ctx: &mut DiffContext<'_>,
    slot: &mut Option<SceneNode>,
    option: Option<&ElementOption>,
) {
    match (slot.take(), option) {
        (None, None) => {}
        (None, Some(declared)) => *slot = Some(mount_element(ctx, declared)),
        (Some(node), None) => remove_element(ctx, node),
        (Some(mut node), Some(declared)) => {
            if node.kind == declared.kind() {
                update_element(ctx, &mut node, declared);
                *slot = Some(node);
            } else {
                remove_element(ctx, node);
                *slot = Some(mount_element(ctx, declared));
            }
        }
    }
}

pub(crate) fn mount_element(ctx: &mut DiffContext<'_>, option: &ElementOption) -> SceneNode {
    let id = ctx.id_gen.allocate();
    let common = option.common();

    ctx.ops.push(DiffOp::Mount {
        id,
        kind: option.kind(),
        name: common.name.clone(),
    });
    ctx.store.insert(
        id,
        ElementRecord {
            option: shallow_option(option),
            transition: common.transition.clone(),
            morph: common.morph.unwrap_or(ctx.universal_transition),
            series_index: ctx.series_index,
            data_index: ctx.data_index,
        },
    );

    let children = option
        .children()
        .iter()
        .map(|child| mount_element(ctx, child))
        .collect();

    SceneNode {
        id,
        kind: option.kind(),
        name: common.name.clone(),
        transform: common.transform,
        style: common.style,
        z: common.z,
        zlevel: common.zlevel,
        invisible: common.invisible,
        shape: node_shape(option),
        children,
    }
}

pub(crate) fn remove_element(ctx: &mut DiffContext<'_>, node: SceneNode) {
    let leave_to = ctx
        .store
        .remove(node.id)
        .and_then(|record| record.transition.leave_to);
    ctx.ops.push(DiffOp::Remove {
        id: node.id,
        kind: node.kind,
        leave_to,
    });
    for child in node.children {
        remove_element(ctx, child);
    }
}

/// Re-applies a declared option to a retained node of the same kind.
///
/// Transform and visibility are replaced, style merges declared fields, and
/// unset z/zlevel overrides keep their stored values.
pub(crate) fn update_element(
    ctx: &mut DiffContext<'_>,
    node: &mut SceneNode,
    option: &ElementOption,
) {
    debug_assert_eq!(node.kind, option.kind());
    let common = option.common();

    node.transform = common.transform;
    node.style.merge_from(&common.style);
    node.z = common.z.or(node.z);
    node.zlevel = common.zlevel.or(node.zlevel);
    node.invisible = common.invisible;
    node.shape = node_shape(option);

    if let Some(record) = ctx.store.get_mut(node.id) {
        record.option = shallow_option(option);
        record.transition.merge_from(&common.transition);
        if let Some(morph) = common.morph {
            record.morph = morph;
        }
    }

    ctx.ops.push(DiffOp::Update {
        id: node.id,
        kind: node.kind,
    });

    if node.kind == ElementKind::Group {
        diff_children(ctx, &mut node.children, option.children());
    }
}

fn diff_children(
    ctx: &mut DiffContext<'_>,
    children: &mut Vec<SceneNode>,
    declared: &[ElementOption],
) {
    let mut slots: Vec<Option<SceneNode>> =
        std::mem::take(children).into_iter().map(Some).collect();

    let mut by_name: IndexMap<String, usize> = IndexMap::new();
    let mut unnamed: Vec<usize> = Vec::new();
    for (index, slot) in slots.iter().enumerate() {
        let Some(node) = slot else { continue };
        match &node.name {
            Some(name) => {
                by_name.insert(name.clone(), index);
            }
            None => unnamed.push(index),
        }
    }

    let mut unnamed_cursor = 0;
    let mut next = Vec::with_capacity(declared.len());
    for option in declared {
        let matched = match option.name() {
            Some(name) => by_name.swap_remove(name),
            None => {
                let candidate = unnamed.get(unnamed_cursor).copied();
                unnamed_cursor += 1;
                candidate
            }
        };

        match matched.and_then(|index| slots[index].take()) {
            Some(mut node) if node.kind == option.kind() => {
                update_element(ctx, &mut node, option);
                next.push(node);
            }
            Some(node) => {
                remove_element(ctx, node);
                next.push(mount_element(ctx, option));
            }
            None => next.push(mount_element(ctx, option)),
        }
    }

    for slot in slots {
        if let Some(node) = slot {
            remove_element(ctx, node);
        }
    }

    *children = next;
}

fn node_shape(option: &ElementOption) -> NodeShape {
    match option {
        ElementOption::Path(element) => NodeShape::Path(element.shape.clone()),
        ElementOption::Image(element) => NodeShape::Image(element.shape.clone()),
        ElementOption::Text(element) => NodeShape::Text(element.shape.clone()),
        ElementOption::Group(_) => NodeShape::Group,
    }
}

/// Copy of an option with group children stripped; the store tracks each
/// element's own declaration, not its subtree.
fn shallow_option(option: &ElementOption) -> ElementOption {
    match option {
        ElementOption::Group(group) => {
            let mut shallow = group.clone();
            shallow.children = Vec::new();
            ElementOption::Group(shallow)
        }
        other => other.clone(),
    }
}
