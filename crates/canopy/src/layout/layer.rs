//! Depth layering.
//!
//! Layer 0 holds the root alone. Every parent contributes one sibling group
//! to the layer below it, and groups are appended in depth-first order, so a
//! layer reads left to right the way the tree does.

use super::Slot;

/// Sibling groups of one layer, each a list of slot indices.
pub(super) type LayerSlots = Vec<Vec<usize>>;

/// Assigns layer, group and rank to every slot and seeds its offset.
///
/// A node's seed offset is its rank, which keeps siblings in order before
/// the first relaxation pass. The root starts at offset 0.
pub(super) fn build(slots: &mut [Slot], root: usize) -> Vec<LayerSlots> {
    let mut layers: Vec<LayerSlots> = vec![vec![vec![root]]];
    let slot = &mut slots[root];
    slot.layer = 0;
    slot.group = 0;
    slot.rank = 0;
    slot.offset = 0.0;

    let mut stack = vec![root];
    while let Some(index) = stack.pop() {
        let children = slots[index].children.clone();
        if children.is_empty() {
            continue;
        }

        let depth = slots[index].layer + 1;
        if layers.len() == depth {
            layers.push(Vec::new());
        }
        let group = layers[depth].len();

        for (rank, &child) in children.iter().enumerate() {
            let slot = &mut slots[child];
            slot.layer = depth;
            slot.group = group;
            slot.rank = rank;
            slot.offset = rank as f32;
        }

        stack.extend(children.iter().rev().copied());
        layers[depth].push(children);
    }

    layers
}
