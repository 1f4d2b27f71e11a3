//! Export of finished layouts.
//!
//! The [`Exporter`] trait turns a [`TreeLayout`] into a document. It is the
//! last step after validation and relaxation.
//!
//! # Available Backends
//!
//! - [`text`]: layer-by-layer offset report via [`text::TextExporter`]
//! - [`json`]: the whole layout as pretty JSON via [`json::JsonExporter`]
//!
//! [`exporter_for`] picks one from an [`OutputConfig`].
//!
//! # Error Handling
//!
//! Export operations return [`Error`], which converts into
//! [`CanopyError::Export`](crate::CanopyError::Export) at the crate boundary.

pub mod json;
pub mod text;

use std::fmt;

use crate::{
    config::{OutputConfig, OutputFormat},
    layout::TreeLayout,
};

/// Renders a finished layout into a textual document.
pub trait Exporter {
    fn export(&self, layout: &TreeLayout) -> Result<String, Error>;
}

/// Picks the exporter matching the configured [`OutputFormat`].
pub fn exporter_for(config: &OutputConfig) -> Box<dyn Exporter> {
    match config.format() {
        OutputFormat::Text => Box::new(text::TextExporter::new(config.show_traversal())),
        OutputFormat::Json => Box::new(json::JsonExporter),
    }
}

#[derive(Debug)]
pub enum Error {
    Render(String),
    Json(serde_json::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Render(msg) => write!(f, "Render error: {msg}"),
            Self::Json(err) => write!(f, "JSON error: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Render(_) => None,
            Self::Json(err) => Some(err),
        }
    }
}

impl From<fmt::Error> for Error {
    fn from(err: fmt::Error) -> Self {
        Self::Render(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}
