//! Canopy - horizontal layout for ordered trees.
//!
//! Given a rooted tree whose nodes carry box sizes, Canopy assigns every node
//! a horizontal offset so that parents sit over their children and no two
//! neighbours in a layer come closer than [`STRUT`]. Vertical placement is the
//! node's depth and is left to the caller.
//!
//! # Examples
//!
//! ```
//! use canopy::{NodeInput, geometry::Size};
//!
//! let size = Size::new(20.0, 20.0);
//! let layout = canopy::layout(vec![
//!     NodeInput::new(1u32, size).with_children([2u32, 3]),
//!     NodeInput::new(2u32, size),
//!     NodeInput::new(3u32, size),
//! ])
//! .expect("valid tree");
//!
//! assert_eq!(layout.offset(2u32), Some(0.0));
//! assert_eq!(layout.offset(3u32), Some(25.0));
//! assert_eq!(layout.offset(1u32), Some(25.0));
//! ```

pub mod config;
pub mod diagnostics;
pub mod export;

mod error;
mod layout;
mod node;
mod validate;

pub use canopy_core::{geometry, identifier};

pub use diagnostics::{Diagnostics, LogDiagnostics};
pub use error::{CanopyError, LayoutError};
pub use layout::{Layer, MAX_PASSES, PlacedNode, STRUT, SiblingGroup, TreeLayout};
pub use node::NodeInput;

use log::{debug, info};

/// Lays out a tree with the default [`LogDiagnostics`] sink.
///
/// Shorthand for `LayoutEngine::new().layout(nodes)`.
///
/// # Errors
///
/// Returns a [`LayoutError`] if the nodes do not form exactly one rooted tree
/// or if any node has a non-positive extent.
pub fn layout(nodes: impl IntoIterator<Item = NodeInput>) -> Result<TreeLayout, LayoutError> {
    LayoutEngine::new().layout(nodes)
}

/// Reusable layout entry point with a configurable diagnostics sink.
///
/// Each call to [`LayoutEngine::layout`] is independent; the engine holds no
/// per-tree state between calls.
///
/// # Examples
///
/// ```
/// use canopy::{LayoutEngine, NodeInput, geometry::Size};
///
/// let size = Size::new(20.0, 20.0);
/// let mut engine = LayoutEngine::new().with_diagnostics(Vec::<String>::new());
///
/// engine
///     .layout(vec![
///         NodeInput::new("root", size).with_children(["a", "b"]),
///         NodeInput::new("a", size),
///         NodeInput::new("b", size),
///     ])
///     .expect("valid tree");
///
/// assert_eq!(engine.diagnostics().len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct LayoutEngine<D = LogDiagnostics> {
    diagnostics: D,
}

impl LayoutEngine {
    /// Creates an engine that reports diagnostics through the `log` facade.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<D: Diagnostics> LayoutEngine<D> {
    /// Replaces the diagnostics sink.
    ///
    /// # Arguments
    ///
    /// * `diagnostics` - Sink receiving centering moves and late-pass notices.
    pub fn with_diagnostics<E: Diagnostics>(self, diagnostics: E) -> LayoutEngine<E> {
        LayoutEngine { diagnostics }
    }

    /// Returns the diagnostics sink.
    pub fn diagnostics(&self) -> &D {
        &self.diagnostics
    }

    /// Consumes the engine and returns its diagnostics sink.
    pub fn into_diagnostics(self) -> D {
        self.diagnostics
    }

    /// Validates `nodes` and computes their layout.
    ///
    /// Node order matters only for error reporting and for the order of
    /// [`TreeLayout::nodes`]. Children order determines left-to-right
    /// placement.
    ///
    /// # Errors
    ///
    /// Returns a [`LayoutError`] describing the first structural problem
    /// found. No layout work is done for an invalid tree.
    pub fn layout(
        &mut self,
        nodes: impl IntoIterator<Item = NodeInput>,
    ) -> Result<TreeLayout, LayoutError> {
        let nodes: Vec<NodeInput> = nodes.into_iter().collect();
        info!(nodes = nodes.len(); "Laying out tree");

        let tree = validate::validate(nodes)?;
        debug!("Tree validated");

        let result = layout::compute(&tree, &mut self.diagnostics);
        info!(
            depth = result.depth(),
            passes = result.passes(),
            converged = result.converged();
            "Layout computed"
        );

        Ok(result)
    }
}
