//! Horizontal tree layout.
//!
//! A layout call runs three stages over a [`ValidTree`]:
//!
//! 1. [`layer`] groups nodes by depth into sibling groups and seeds each
//!    node's offset with its rank.
//! 2. [`traversal`] fixes the order in which nodes are relaxed.
//! 3. [`relax`] repeatedly centers parents over their children and pushes
//!    apart neighbours that are closer than [`STRUT`].
//!
//! The result is an immutable [`TreeLayout`].

mod layer;
mod relax;
mod traversal;

pub use relax::{MAX_PASSES, STRUT};

use std::collections::HashMap;

use log::{debug, warn};
use serde::Serialize;

use canopy_core::{
    geometry::{Size, Span},
    identifier::Id,
};

use crate::{diagnostics::Diagnostics, validate::ValidTree};

/// Working record for one node during a layout call.
#[derive(Debug, Clone)]
pub(crate) struct Slot {
    id: Id,
    size: Size,
    parent: Option<usize>,
    children: Vec<usize>,
    layer: usize,
    group: usize,
    rank: usize,
    offset: f32,
}

impl Slot {
    fn from_tree(tree: &ValidTree) -> Vec<Slot> {
        (0..tree.len())
            .map(|index| {
                let node = tree.node(index);
                Slot {
                    id: node.id(),
                    size: node.size(),
                    parent: tree.parent(index),
                    children: tree.children(index).to_vec(),
                    layer: 0,
                    group: 0,
                    rank: 0,
                    offset: 0.0,
                }
            })
            .collect()
    }
}

/// A node with its computed placement.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacedNode {
    id: Id,
    parent: Option<Id>,
    children: Vec<Id>,
    #[serde(flatten)]
    size: Size,
    layer: usize,
    group: usize,
    rank: usize,
    offset: f32,
}

impl PlacedNode {
    pub fn id(&self) -> Id {
        self.id
    }

    /// Parent id, or `None` for the root.
    pub fn parent(&self) -> Option<Id> {
        self.parent
    }

    pub fn children(&self) -> &[Id] {
        &self.children
    }

    pub fn size(&self) -> Size {
        self.size
    }

    /// Depth of the node; the root is at layer 0.
    pub fn layer(&self) -> usize {
        self.layer
    }

    /// Index of the node's sibling group within its layer.
    pub fn group(&self) -> usize {
        self.group
    }

    /// Position of the node among its siblings.
    pub fn rank(&self) -> usize {
        self.rank
    }

    /// Horizontal position of the node's left edge.
    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Horizontal interval covered by the node's box.
    pub fn span(&self) -> Span {
        Span::from_offset(self.offset, self.size.width())
    }
}

/// Children of one parent, in caller order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SiblingGroup {
    parent: Option<Id>,
    members: Vec<Id>,
}

impl SiblingGroup {
    /// Parent shared by the group, or `None` for the root's own group.
    pub fn parent(&self) -> Option<Id> {
        self.parent
    }

    pub fn members(&self) -> &[Id] {
        &self.members
    }
}

/// All sibling groups at one depth, left to right.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layer {
    depth: usize,
    groups: Vec<SiblingGroup>,
}

impl Layer {
    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn groups(&self) -> &[SiblingGroup] {
        &self.groups
    }

    /// Node ids of the layer from left to right, across group boundaries.
    pub fn members(&self) -> impl Iterator<Item = Id> + '_ {
        self.groups
            .iter()
            .flat_map(|group| group.members.iter().copied())
    }
}

/// The outcome of a successful layout call.
///
/// Nodes are stored in input order. Layers, traversal order and relaxation
/// statistics are kept alongside so callers can inspect how the offsets came
/// about.
#[derive(Debug, Clone, Serialize)]
pub struct TreeLayout {
    root: Id,
    nodes: Vec<PlacedNode>,
    layers: Vec<Layer>,
    traversal: Vec<Id>,
    passes: usize,
    converged: bool,
    #[serde(skip)]
    positions: HashMap<Id, usize>,
}

impl TreeLayout {
    pub fn root(&self) -> Id {
        self.root
    }

    /// Looks up a node by id.
    pub fn node(&self, id: impl Into<Id>) -> Option<&PlacedNode> {
        self.positions
            .get(&id.into())
            .map(|&index| &self.nodes[index])
    }

    /// Convenience accessor for a node's offset.
    pub fn offset(&self, id: impl Into<Id>) -> Option<f32> {
        self.node(id).map(PlacedNode::offset)
    }

    /// All nodes in input order.
    pub fn nodes(&self) -> &[PlacedNode] {
        &self.nodes
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Order in which nodes were visited on every relaxation pass.
    pub fn traversal(&self) -> &[Id] {
        &self.traversal
    }

    /// Number of relaxation passes that ran, between 1 and [`MAX_PASSES`].
    pub fn passes(&self) -> usize {
        self.passes
    }

    /// Whether the final pass left every offset unchanged.
    ///
    /// When this is `false` the pass limit was reached and some neighbours
    /// may still be closer than [`STRUT`].
    pub fn converged(&self) -> bool {
        self.converged
    }

    /// Number of layers in the tree.
    pub fn depth(&self) -> usize {
        self.layers.len()
    }

    /// Horizontal interval covered by all node boxes.
    pub fn extent(&self) -> Span {
        self.nodes
            .iter()
            .map(PlacedNode::span)
            .reduce(Span::union)
            .unwrap_or_else(|| Span::new(0.0, 0.0))
    }
}

/// Runs the layering, traversal and relaxation stages over a validated tree.
pub(crate) fn compute<D>(tree: &ValidTree, diagnostics: &mut D) -> TreeLayout
where
    D: Diagnostics + ?Sized,
{
    let mut slots = Slot::from_tree(tree);
    let root = tree.root();

    let layers = layer::build(&mut slots, root);
    debug!(layers = layers.len(); "Layers built");

    let order = traversal::build(&slots, root);
    let outcome = relax::Relaxer::new(&mut slots, &layers, diagnostics).run(&order);
    if !outcome.converged {
        warn!(
            passes = outcome.passes;
            "Relaxation stopped at the pass limit before offsets settled"
        );
    }

    assemble(slots, &layers, &order, root, outcome)
}

fn assemble(
    slots: Vec<Slot>,
    layers: &[layer::LayerSlots],
    order: &[usize],
    root: usize,
    outcome: relax::Outcome,
) -> TreeLayout {
    let id_of = |index: usize| slots[index].id;

    let layers = layers
        .iter()
        .enumerate()
        .map(|(depth, groups)| Layer {
            depth,
            groups: groups
                .iter()
                .map(|members| SiblingGroup {
                    parent: slots[members[0]].parent.map(id_of),
                    members: members.iter().copied().map(id_of).collect(),
                })
                .collect(),
        })
        .collect();
    let traversal = order.iter().copied().map(id_of).collect();
    let root = id_of(root);

    let nodes: Vec<PlacedNode> = slots
        .iter()
        .map(|slot| PlacedNode {
            id: slot.id,
            parent: slot.parent.map(id_of),
            children: slot.children.iter().copied().map(id_of).collect(),
            size: slot.size,
            layer: slot.layer,
            group: slot.group,
            rank: slot.rank,
            offset: slot.offset,
        })
        .collect();
    let positions = nodes
        .iter()
        .enumerate()
        .map(|(index, node)| (node.id, index))
        .collect();

    TreeLayout {
        root,
        nodes,
        layers,
        traversal,
        passes: outcome.passes,
        converged: outcome.converged,
        positions,
    }
}

/// Builds working slots for a small integer-labelled tree.
#[cfg(test)]
pub(crate) fn test_slots(edges: &[(u32, &[u32])]) -> (Vec<Slot>, usize) {
    use crate::{node::NodeInput, validate::validate};

    let nodes = edges
        .iter()
        .map(|(id, children)| {
            NodeInput::new(*id, Size::new(20.0, 20.0)).with_children(children.iter().copied())
        })
        .collect();
    let tree = validate(nodes).expect("test tree should be valid");
    (Slot::from_tree(&tree), tree.root())
}

#[cfg(test)]
mod tests {
    use crate::{node::NodeInput, validate::validate};

    use super::*;

    fn run(edges: &[(u32, &[u32])]) -> TreeLayout {
        let nodes = edges
            .iter()
            .map(|(id, children)| {
                NodeInput::new(*id, Size::new(20.0, 20.0)).with_children(children.iter().copied())
            })
            .collect();
        let tree = validate(nodes).unwrap();
        compute(&tree, &mut ())
    }

    #[test]
    fn test_assembled_layers_carry_parents() {
        let layout = run(&[(1, &[2, 3]), (2, &[4]), (3, &[]), (4, &[])]);

        assert_eq!(layout.depth(), 3);
        let first = &layout.layers()[0];
        assert_eq!(first.depth(), 0);
        assert_eq!(first.groups()[0].parent(), None);
        assert_eq!(first.groups()[0].members(), &[Id::from(1u32)]);

        let second = &layout.layers()[1];
        assert_eq!(second.groups()[0].parent(), Some(Id::from(1u32)));
        assert_eq!(
            second.members().collect::<Vec<_>>(),
            vec![Id::from(2u32), Id::from(3u32)]
        );
    }

    #[test]
    fn test_nodes_keep_input_order_and_links() {
        let layout = run(&[(3, &[]), (1, &[2, 3]), (2, &[])]);

        let ids: Vec<Id> = layout.nodes().iter().map(PlacedNode::id).collect();
        assert_eq!(ids, vec![Id::from(3u32), Id::from(1u32), Id::from(2u32)]);

        let three = layout.node(3u32).unwrap();
        assert_eq!(three.parent(), Some(Id::from(1u32)));
        assert_eq!(three.layer(), 1);
        assert_eq!(three.group(), 0);
        assert_eq!(three.rank(), 1);
        assert_eq!(layout.root(), "1");
        assert!(layout.node(9u32).is_none());
    }

    #[test]
    fn test_extent_covers_every_box() {
        let layout = run(&[(1, &[2, 3]), (2, &[]), (3, &[])]);

        assert_eq!(layout.extent(), Span::new(0.0, 45.0));
        for node in layout.nodes() {
            assert!(layout.extent().contains(node.span()));
        }
    }

    #[test]
    fn test_serialized_node_shape() {
        let layout = run(&[(1, &[2]), (2, &[])]);
        let json = serde_json::to_value(&layout).unwrap();

        assert_eq!(json["root"], "1");
        assert_eq!(json["nodes"][1]["id"], "2");
        assert_eq!(json["nodes"][1]["parent"], "1");
        assert_eq!(json["nodes"][1]["width"], 20.0);
        assert_eq!(json["nodes"][1]["offset"], 0.0);
        assert_eq!(json["passes"], 1);
        assert_eq!(json["converged"], true);
        assert!(json.get("positions").is_none());
    }
}
