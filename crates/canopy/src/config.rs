//! Configuration types for Canopy layout output.
//!
//! The engine itself has no tunables; configuration only shapes how a
//! computed [`TreeLayout`](crate::TreeLayout) is exported. All types implement
//! [`serde::Deserialize`] so they can be loaded from external sources.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level application configuration.
//! - [`OutputConfig`] - Selects the [`OutputFormat`] and optional extras.
//!
//! # Example
//!
//! ```
//! # use canopy::config::{AppConfig, OutputFormat};
//! let config = AppConfig::default();
//! assert_eq!(config.output().format(), OutputFormat::Text);
//! assert!(!config.output().show_traversal());
//! ```

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Output configuration section.
    #[serde(default)]
    output: OutputConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified output configuration.
    pub fn new(output: OutputConfig) -> Self {
        Self { output }
    }

    /// Returns the output configuration.
    pub fn output(&self) -> &OutputConfig {
        &self.output
    }

    /// Returns a copy of this configuration with the output format replaced.
    ///
    /// Used when a command-line flag overrides the configured format.
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.output.format = format;
        self
    }
}

/// Controls how a layout is rendered to text.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OutputConfig {
    /// Exporter used for the layout.
    #[serde(default)]
    format: OutputFormat,

    /// Whether the text exporter also prints the relaxation order and pass count.
    #[serde(default)]
    show_traversal: bool,
}

impl OutputConfig {
    /// Creates a new [`OutputConfig`].
    ///
    /// # Arguments
    ///
    /// * `format` - Exporter used for the layout.
    /// * `show_traversal` - Include traversal order and pass summary in text output.
    pub fn new(format: OutputFormat, show_traversal: bool) -> Self {
        Self {
            format,
            show_traversal,
        }
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    pub fn show_traversal(&self) -> bool {
        self.show_traversal
    }
}

/// Available layout export formats.
///
/// The names match external configuration strings (lowercase).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Per-layer offset listing (default)
    #[default]
    Text,
    /// Full layout as pretty-printed JSON
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(format!(
                "Unsupported output format `{other}` (expected `text` or `json`)"
            )),
        }
    }
}

impl From<OutputFormat> for &'static str {
    fn from(val: OutputFormat) -> Self {
        match val {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: &'static str = (*self).into();
        write!(f, "{s}")
    }
}
