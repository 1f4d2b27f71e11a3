//! Error types for Canopy operations.
//!
//! [`LayoutError`] covers structural problems in a node list and is returned
//! by the engine itself. [`CanopyError`] wraps it together with the failures
//! of the outer surfaces (reading inputs, loading configuration, exporting).

use std::io;

use thiserror::Error;

use canopy_core::identifier::Id;

/// Structural problems detected while validating a node list.
///
/// Validation runs to completion before any layout work starts, so a call
/// that returns one of these has produced no partial state.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    #[error("node list is empty")]
    EmptyTree,

    #[error("node `{0}` is declared more than once")]
    DuplicateNode(Id),

    #[error("node `{id}` has extent {width}x{height}; width and height must be positive")]
    InvalidExtent { id: Id, width: f32, height: f32 },

    /// `parent` lists `child`, but no node with that id was given.
    #[error("node `{parent}` lists child `{child}`, which is not in the node list")]
    MissingNode { parent: Id, child: Id },

    #[error("node `{child}` is listed as a child of both `{first}` and `{second}`")]
    MultipleParents { child: Id, first: Id, second: Id },

    #[error("tree has {} roots ({}); exactly one node may be nobody's child", .0.len(), join_ids(.0))]
    MultipleRoots(Vec<Id>),

    #[error("every node is listed as somebody's child; the tree has no root")]
    NoRoot,

    #[error("{} node(s) cannot be reached from root `{root}`: {}", .nodes.len(), join_ids(.nodes))]
    Unreachable { root: Id, nodes: Vec<Id> },
}

fn join_ids(ids: &[Id]) -> String {
    ids.iter()
        .map(Id::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// The main error type for Canopy operations outside the engine core.
#[derive(Debug, Error)]
pub enum CanopyError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Input error: {0}")]
    Input(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Layout error: {0}")]
    Layout(#[from] LayoutError),

    #[error("Export error: {0}")]
    Export(#[from] crate::export::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_node_message_names_both_ends() {
        let err = LayoutError::MissingNode {
            parent: Id::from(1u32),
            child: Id::from(4u32),
        };
        assert_eq!(
            err.to_string(),
            "node `1` lists child `4`, which is not in the node list"
        );
    }

    #[test]
    fn test_multiple_roots_message_lists_candidates() {
        let err = LayoutError::MultipleRoots(vec![Id::new("a"), Id::new("b")]);
        assert_eq!(
            err.to_string(),
            "tree has 2 roots (a, b); exactly one node may be nobody's child"
        );
    }

    #[test]
    fn test_layout_error_converts_into_canopy_error() {
        let err: CanopyError = LayoutError::NoRoot.into();
        assert!(matches!(err, CanopyError::Layout(LayoutError::NoRoot)));
        assert_eq!(
            err.to_string(),
            "Layout error: every node is listed as somebody's child; the tree has no root"
        );
    }
}
