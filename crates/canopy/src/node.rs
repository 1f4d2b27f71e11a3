//! Caller-facing description of a tree node.

use serde::{Deserialize, Serialize};

use canopy_core::{geometry::Size, identifier::Id};

/// One node of the input tree.
///
/// The order of `children` is significant: it is the left-to-right order of
/// the node's sibling group in the final layout.
///
/// Deserializes from `{ "id": .., "children": [..], "width": .., "height": .. }`
/// where ids may be strings or integers and `children` may be omitted for
/// leaves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeInput {
    id: Id,
    #[serde(default)]
    children: Vec<Id>,
    width: f32,
    height: f32,
}

impl NodeInput {
    /// Creates a leaf node with the given box size.
    pub fn new(id: impl Into<Id>, size: Size) -> Self {
        Self {
            id: id.into(),
            children: Vec::new(),
            width: size.width(),
            height: size.height(),
        }
    }

    /// Replaces the node's children, keeping their order.
    pub fn with_children<I, T>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Id>,
    {
        self.children = children.into_iter().map(Into::into).collect();
        self
    }

    pub fn id(&self) -> Id {
        self.id
    }

    pub fn children(&self) -> &[Id] {
        &self.children
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}
