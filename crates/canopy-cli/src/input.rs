//! Reading node lists from disk.
//!
//! Two encodings are accepted, chosen by file extension:
//!
//! - `.toml`: an array of `[[node]]` tables.
//! - anything else: a JSON array of node objects.
//!
//! Both use the field names of [`NodeInput`]: `id`, `children`, `width` and
//! `height`.

use std::{fs, path::Path};

use log::debug;
use serde::Deserialize;

use canopy::{CanopyError, NodeInput};

#[derive(Debug, Deserialize)]
struct TomlTree {
    #[serde(rename = "node", default)]
    nodes: Vec<NodeInput>,
}

/// Reads and decodes the node list at `path`.
///
/// # Errors
///
/// Returns [`CanopyError::Io`] if the file cannot be read and
/// [`CanopyError::Input`] if its contents cannot be decoded.
pub fn load_nodes(path: impl AsRef<Path>) -> Result<Vec<NodeInput>, CanopyError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;

    let is_toml = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

    let nodes = if is_toml {
        parse_toml(&content)
    } else {
        parse_json(&content)
    }
    .map_err(|message| CanopyError::Input(format!("{}: {message}", path.display())))?;

    debug!(path = path.display().to_string(), nodes = nodes.len(); "Input decoded");
    Ok(nodes)
}

fn parse_json(content: &str) -> Result<Vec<NodeInput>, String> {
    serde_json::from_str(content).map_err(|err| err.to_string())
}

fn parse_toml(content: &str) -> Result<Vec<NodeInput>, String> {
    toml::from_str::<TomlTree>(content)
        .map(|tree| tree.nodes)
        .map_err(|err| err.to_string())
}
