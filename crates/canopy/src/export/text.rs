//! Plain-text export, one block per layer.
//!
//! ```text
//! layer 0:
//!  [1:62]
//! layer 1:
//!  [(1) 2:37, 3:62, 4:87]
//! ```
//!
//! Each bracketed list is one sibling group, prefixed by its parent.

use std::fmt::Write;

use crate::layout::{SiblingGroup, TreeLayout};

use super::{Error, Exporter};

#[derive(Debug, Default, Clone, Copy)]
pub struct TextExporter {
    show_traversal: bool,
}

impl TextExporter {
    /// Creates a text exporter.
    ///
    /// When `show_traversal` is set, the layer listing is followed by the
    /// relaxation order and a pass summary.
    pub fn new(show_traversal: bool) -> Self {
        Self { show_traversal }
    }

    fn write_group(
        out: &mut String,
        layout: &TreeLayout,
        group: &SiblingGroup,
    ) -> Result<(), Error> {
        out.push_str(" [");
        if let Some(parent) = group.parent() {
            write!(out, "({parent}) ")?;
        }
        for (position, &id) in group.members().iter().enumerate() {
            if position > 0 {
                out.push_str(", ");
            }
            let offset = layout
                .offset(id)
                .ok_or_else(|| Error::Render(format!("layer lists unknown node `{id}`")))?;
            write!(out, "{id}:{offset}")?;
        }
        out.push(']');
        Ok(())
    }
}

impl Exporter for TextExporter {
    fn export(&self, layout: &TreeLayout) -> Result<String, Error> {
        let mut out = String::new();

        for layer in layout.layers() {
            writeln!(out, "layer {}:", layer.depth())?;
            for group in layer.groups() {
                Self::write_group(&mut out, layout, group)?;
            }
            out.push('\n');
        }

        if self.show_traversal {
            let order: Vec<String> = layout
                .traversal()
                .iter()
                .map(ToString::to_string)
                .collect();
            writeln!(out, "traversal: {}", order.join(" "))?;
            let state = if layout.converged() {
                "converged"
            } else {
                "pass limit reached"
            };
            writeln!(out, "passes: {} ({state})", layout.passes())?;
        }

        Ok(out)
    }
}
