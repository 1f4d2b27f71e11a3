//! JSON export of a complete layout.

use log::debug;

use crate::layout::TreeLayout;

use super::{Error, Exporter};

/// Serializes the whole [`TreeLayout`] as pretty-printed JSON.
///
/// The document carries the root id, every placed node in input order, the
/// layers with their sibling groups, the traversal order and the relaxation
/// statistics.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonExporter;

impl Exporter for JsonExporter {
    fn export(&self, layout: &TreeLayout) -> Result<String, Error> {
        debug!(nodes = layout.nodes().len(); "Exporting layout as JSON");
        Ok(serde_json::to_string_pretty(layout)?)
    }
}

#[cfg(test)]
mod tests {
    use canopy_core::geometry::Size;

    use crate::{NodeInput, layout};

    use super::*;

    #[test]
    fn test_json_document_round_trips_through_value() {
        let tree = layout(vec![
            NodeInput::new(0u32, Size::new(20.0, 20.0)).with_children([1u32, 2]),
            NodeInput::new(1u32, Size::new(20.0, 20.0)),
            NodeInput::new(2u32, Size::new(20.0, 20.0)),
        ])
        .unwrap();

        let json = JsonExporter.export(&tree).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["root"], "0");
        assert_eq!(value["nodes"].as_array().unwrap().len(), 3);
        assert_eq!(value["nodes"][0]["offset"], 25.0);
        assert_eq!(value["layers"][1]["groups"][0]["parent"], "0");
        assert_eq!(value["layers"][1]["groups"][0]["members"][1], "2");
        assert_eq!(value["traversal"][0], "1");
    }
}
