use serde::{Deserialize, Serialize};

use crate::series::element::{ElementKind, ImageShape, PathShape, TextShape, TransformProps};
use crate::series::style::StyleProps;

/// Engine-assigned identity of one retained scene element.
///
/// Ids are never reused within an engine; bookkeeping keyed by id can only
/// resolve elements that are still alive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ElementId(pub(crate) u64);

impl ElementId {
    #[must_use]
    pub fn raw(self) -> u64 {
        self.0
    }
}

/// Monotonic id source owned by the scene.
#[derive(Debug, Default, Clone)]
pub(crate) struct ElementIdGen {
    next: u64,
}

impl ElementIdGen {
    pub(crate) fn allocate(&mut self) -> ElementId {
        let id = ElementId(self.next);
        self.next += 1;
        id
    }
}

/// Shape payload of a retained node; groups carry children instead.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeShape {
    Path(PathShape),
    Image(ImageShape),
    Text(TextShape),
    Group,
}

/// One retained scene element.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneNode {
    pub id: ElementId,
    pub kind: ElementKind,
    pub name: Option<String>,
    pub transform: TransformProps,
    pub style: StyleProps,
    pub z: Option<f64>,
    pub zlevel: Option<i32>,
    pub invisible: bool,
    pub shape: NodeShape,
    pub children: Vec<SceneNode>,
}

impl SceneNode {
    /// Locates a node in this subtree by id.
    #[must_use]
    pub fn find(&self, id: ElementId) -> Option<&SceneNode> {
        if self.id == id {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(id))
    }

    /// Number of nodes in this subtree, including self.
    #[must_use]
    pub fn subtree_len(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(SceneNode::subtree_len)
            .sum::<usize>()
    }
}
