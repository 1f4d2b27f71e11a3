//! Structural validation of a caller's node list.
//!
//! Checks run in a fixed order so that the reported error is deterministic:
//! emptiness, duplicate ids, extents, dangling child references, shared
//! children, root detection, then reachability. The first failing check wins.

use indexmap::{IndexMap, map::Entry};
use log::trace;

use canopy_core::identifier::Id;

use crate::{error::LayoutError, node::NodeInput};

/// A node list known to form exactly one rooted tree.
///
/// Nodes keep their input order. Child and parent links are resolved to
/// positions in that order.
#[derive(Debug)]
pub(crate) struct ValidTree {
    nodes: IndexMap<Id, NodeInput>,
    children: Vec<Vec<usize>>,
    parents: Vec<Option<usize>>,
    root: usize,
}

impl ValidTree {
    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    pub(crate) fn root(&self) -> usize {
        self.root
    }

    pub(crate) fn node(&self, index: usize) -> &NodeInput {
        &self.nodes[index]
    }

    pub(crate) fn children(&self, index: usize) -> &[usize] {
        &self.children[index]
    }

    pub(crate) fn parent(&self, index: usize) -> Option<usize> {
        self.parents[index]
    }
}

/// Validates `nodes` and resolves their links.
///
/// # Errors
///
/// Returns the first [`LayoutError`] found, in the order listed in the
/// module documentation.
pub(crate) fn validate(nodes: Vec<NodeInput>) -> Result<ValidTree, LayoutError> {
    if nodes.is_empty() {
        return Err(LayoutError::EmptyTree);
    }

    let mut table: IndexMap<Id, NodeInput> = IndexMap::with_capacity(nodes.len());
    for node in nodes {
        match table.entry(node.id()) {
            Entry::Occupied(entry) => return Err(LayoutError::DuplicateNode(*entry.key())),
            Entry::Vacant(entry) => {
                entry.insert(node);
            }
        }
    }

    if let Some(node) = table.values().find(|node| !node.size().is_positive()) {
        let size = node.size();
        return Err(LayoutError::InvalidExtent {
            id: node.id(),
            width: size.width(),
            height: size.height(),
        });
    }

    let children = resolve_children(&table)?;
    let parents = resolve_parents(&table, &children)?;
    let root = find_root(&table, &parents)?;
    check_reachable(&table, &children, root)?;

    trace!(nodes = table.len(), root:% = table[root].id(); "Node list validated");

    Ok(ValidTree {
        nodes: table,
        children,
        parents,
        root,
    })
}

fn resolve_children(table: &IndexMap<Id, NodeInput>) -> Result<Vec<Vec<usize>>, LayoutError> {
    table
        .values()
        .map(|node| {
            node.children()
                .iter()
                .map(|&child| {
                    table
                        .get_index_of(&child)
                        .ok_or(LayoutError::MissingNode {
                            parent: node.id(),
                            child,
                        })
                })
                .collect()
        })
        .collect()
}

fn resolve_parents(
    table: &IndexMap<Id, NodeInput>,
    children: &[Vec<usize>],
) -> Result<Vec<Option<usize>>, LayoutError> {
    let mut parents: Vec<Option<usize>> = vec![None; table.len()];
    for (parent, kids) in children.iter().enumerate() {
        for &child in kids {
            if let Some(first) = parents[child] {
                return Err(LayoutError::MultipleParents {
                    child: table[child].id(),
                    first: table[first].id(),
                    second: table[parent].id(),
                });
            }
            parents[child] = Some(parent);
        }
    }
    Ok(parents)
}

fn find_root(
    table: &IndexMap<Id, NodeInput>,
    parents: &[Option<usize>],
) -> Result<usize, LayoutError> {
    let candidates: Vec<usize> = parents
        .iter()
        .enumerate()
        .filter_map(|(index, parent)| parent.is_none().then_some(index))
        .collect();

    match candidates.as_slice() {
        [] => Err(LayoutError::NoRoot),
        [root] => Ok(*root),
        many => Err(LayoutError::MultipleRoots(
            many.iter().map(|&index| table[index].id()).collect(),
        )),
    }
}

/// Every node has at most one parent here, so a walk from the root cannot
/// revisit a node. Anything it misses sits on a cycle detached from the root.
fn check_reachable(
    table: &IndexMap<Id, NodeInput>,
    children: &[Vec<usize>],
    root: usize,
) -> Result<(), LayoutError> {
    let mut visited = vec![false; table.len()];
    let mut stack = vec![root];
    while let Some(index) = stack.pop() {
        visited[index] = true;
        stack.extend(children[index].iter().copied());
    }

    let unreachable: Vec<Id> = visited
        .iter()
        .enumerate()
        .filter_map(|(index, &seen)| (!seen).then(|| table[index].id()))
        .collect();

    if unreachable.is_empty() {
        Ok(())
    } else {
        Err(LayoutError::Unreachable {
            root: table[root].id(),
            nodes: unreachable,
        })
    }
}

#[cfg(test)]
mod tests {
    use canopy_core::geometry::Size;

    use super::*;

    fn node(id: u32, children: &[u32]) -> NodeInput {
        NodeInput::new(id, Size::new(20.0, 20.0)).with_children(children.iter().copied())
    }

    #[test]
    fn test_valid_tree_resolves_links() {
        let tree = validate(vec![node(2, &[5, 6]), node(1, &[2]), node(5, &[]), node(6, &[])])
            .unwrap();

        assert_eq!(tree.len(), 4);
        assert_eq!(tree.root(), 1);
        assert_eq!(tree.node(tree.root()).id(), "1");
        assert_eq!(tree.children(0), &[2, 3]);
        assert_eq!(tree.parent(0), Some(1));
        assert_eq!(tree.parent(1), None);
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(validate(Vec::new()).unwrap_err(), LayoutError::EmptyTree);
    }

    #[test]
    fn test_duplicate_id() {
        let err = validate(vec![node(1, &[2]), node(2, &[]), node(2, &[])]).unwrap_err();
        assert_eq!(err, LayoutError::DuplicateNode(Id::from(2u32)));
    }

    #[test]
    fn test_invalid_extent() {
        let nodes = vec![node(1, &[2]), NodeInput::new(2u32, Size::new(0.0, 20.0))];
        let err = validate(nodes).unwrap_err();
        assert!(matches!(err, LayoutError::InvalidExtent { id, .. } if id == "2"));
    }

    #[test]
    fn test_missing_child_reports_parent_and_child() {
        let err = validate(vec![node(1, &[2, 3, 4]), node(2, &[]), node(3, &[])]).unwrap_err();
        assert_eq!(
            err,
            LayoutError::MissingNode {
                parent: Id::from(1u32),
                child: Id::from(4u32),
            }
        );
    }

    #[test]
    fn test_shared_child() {
        let err = validate(vec![
            node(1, &[2, 3]),
            node(2, &[4]),
            node(3, &[4]),
            node(4, &[]),
        ])
        .unwrap_err();
        assert_eq!(
            err,
            LayoutError::MultipleParents {
                child: Id::from(4u32),
                first: Id::from(2u32),
                second: Id::from(3u32),
            }
        );
    }

    #[test]
    fn test_forest_lists_roots_in_input_order() {
        let err = validate(vec![node(3, &[]), node(1, &[2]), node(2, &[])]).unwrap_err();
        assert_eq!(
            err,
            LayoutError::MultipleRoots(vec![Id::from(3u32), Id::from(1u32)])
        );
    }

    #[test]
    fn test_pure_cycle_has_no_root() {
        let err = validate(vec![node(1, &[2]), node(2, &[1])]).unwrap_err();
        assert_eq!(err, LayoutError::NoRoot);
    }

    #[test]
    fn test_self_parent_has_no_root() {
        let err = validate(vec![node(1, &[1])]).unwrap_err();
        assert_eq!(err, LayoutError::NoRoot);
    }

    #[test]
    fn test_detached_cycle_is_unreachable() {
        let err = validate(vec![
            node(1, &[2]),
            node(2, &[]),
            node(3, &[4]),
            node(4, &[3]),
        ])
        .unwrap_err();
        assert_eq!(
            err,
            LayoutError::Unreachable {
                root: Id::from(1u32),
                nodes: vec![Id::from(3u32), Id::from(4u32)],
            }
        );
    }

    #[test]
    fn test_zero_id_is_accepted_as_root() {
        let tree = validate(vec![node(0, &[1]), node(1, &[])]).unwrap();
        assert_eq!(tree.node(tree.root()).id(), "0");
    }
}
