//! Error adapter for converting CanopyError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error types
//! and miette's rich diagnostic formatting used in the CLI. Canopy errors
//! carry no source spans, so each report is a message with a code and, for
//! structural layout problems, a per-variant code and a help line.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan};

use canopy::{CanopyError, LayoutError};

/// Adapter presenting a [`CanopyError`] as a miette diagnostic.
pub struct ErrorAdapter<'a>(pub &'a CanopyError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        std::error::Error::source(self.0)
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            CanopyError::Io(_) => "canopy::io",
            CanopyError::Input(_) => "canopy::input",
            CanopyError::Config(_) => "canopy::config",
            CanopyError::Layout(err) => layout_code(err),
            CanopyError::Export(_) => "canopy::export",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let CanopyError::Layout(err) = &self.0 else {
            return None;
        };
        let help = match err {
            LayoutError::EmptyTree => "the input must contain at least one node",
            LayoutError::DuplicateNode(_) => "give every node a unique id",
            LayoutError::InvalidExtent { .. } => {
                "width and height must be finite numbers above zero"
            }
            LayoutError::MissingNode { .. } => {
                "declare the child as a node or remove it from the list"
            }
            LayoutError::MultipleParents { .. } => {
                "a node may appear in only one `children` list"
            }
            LayoutError::MultipleRoots(_) => {
                "connect the extra roots under a single top-level node"
            }
            LayoutError::NoRoot => "exactly one node must be left out of every `children` list",
            LayoutError::Unreachable { .. } => {
                "the listed nodes form a cycle; break it and attach them to the tree"
            }
        };
        Some(Box::new(help))
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}

fn layout_code(err: &LayoutError) -> &'static str {
    match err {
        LayoutError::EmptyTree => "canopy::layout::empty_tree",
        LayoutError::DuplicateNode(_) => "canopy::layout::duplicate_node",
        LayoutError::InvalidExtent { .. } => "canopy::layout::invalid_extent",
        LayoutError::MissingNode { .. } => "canopy::layout::missing_node",
        LayoutError::MultipleParents { .. } => "canopy::layout::multiple_parents",
        LayoutError::MultipleRoots(_) => "canopy::layout::multiple_roots",
        LayoutError::NoRoot => "canopy::layout::no_root",
        LayoutError::Unreachable { .. } => "canopy::layout::unreachable",
    }
}

/// Wraps a [`CanopyError`] for rendering by a miette report handler.
pub fn to_reportable(err: &CanopyError) -> ErrorAdapter<'_> {
    ErrorAdapter(err)
}

#[cfg(test)]
mod tests {
    use canopy::identifier::Id;
    use miette::{GraphicalReportHandler, GraphicalTheme};

    use super::*;

    #[test]
    fn test_layout_error_has_code_and_help() {
        let err = CanopyError::Layout(LayoutError::DuplicateNode(Id::new("a")));
        let adapter = to_reportable(&err);

        assert_eq!(
            adapter.to_string(),
            "Layout error: node `a` is declared more than once"
        );
        assert_eq!(
            adapter.code().unwrap().to_string(),
            "canopy::layout::duplicate_node"
        );
        assert_eq!(adapter.help().unwrap().to_string(), "give every node a unique id");
    }

    #[test]
    fn test_input_error_has_no_help() {
        let err = CanopyError::Input("tree.json: expected value".to_string());
        let adapter = to_reportable(&err);

        assert_eq!(adapter.code().unwrap().to_string(), "canopy::input");
        assert!(adapter.help().is_none());
        assert!(adapter.labels().is_none());
    }

    #[test]
    fn test_report_renders() {
        let err = CanopyError::Layout(LayoutError::NoRoot);
        let mut out = String::new();
        GraphicalReportHandler::new_themed(GraphicalTheme::unicode_nocolor())
            .with_width(200)
            .render_report(&mut out, &to_reportable(&err))
            .unwrap();

        assert!(out.contains("canopy::layout::no_root"));
        assert!(out.contains("no root"));
    }
}
