//! Offset relaxation.
//!
//! Each pass walks the traversal order once. A parent is moved toward the
//! middle of its children's span; a leading leaf irons its layer. Ironing
//! walks neighbours left to right and pushes any node that sits closer than
//! [`STRUT`] to its left neighbour. Offsets only ever grow.
//!
//! Passes repeat until one changes nothing or [`MAX_PASSES`] have run.

use log::trace;

use crate::diagnostics::Diagnostics;

use super::{Slot, layer::LayerSlots};

/// Minimum horizontal gap between neighbouring boxes in a layer.
pub const STRUT: f32 = 5.0;

/// Upper bound on relaxation passes per layout call.
pub const MAX_PASSES: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct Outcome {
    pub(super) passes: usize,
    pub(super) converged: bool,
}

pub(super) struct Relaxer<'a, D: Diagnostics + ?Sized> {
    slots: &'a mut [Slot],
    layers: &'a [LayerSlots],
    diagnostics: &'a mut D,
}

impl<'a, D: Diagnostics + ?Sized> Relaxer<'a, D> {
    pub(super) fn new(
        slots: &'a mut [Slot],
        layers: &'a [LayerSlots],
        diagnostics: &'a mut D,
    ) -> Self {
        Self {
            slots,
            layers,
            diagnostics,
        }
    }

    pub(super) fn run(mut self, order: &[usize]) -> Outcome {
        let mut passes = 0;
        let mut changed = true;

        while changed && passes < MAX_PASSES {
            passes += 1;
            if passes > 2 {
                self.diagnostics
                    .log(&format!("pass {passes}: offsets still moving"));
            }

            changed = false;
            for &index in order {
                changed |= self.visit(index);
            }
            trace!(pass = passes, changed; "Relaxation pass finished");
        }

        Outcome {
            passes,
            converged: !changed,
        }
    }

    fn visit(&mut self, index: usize) -> bool {
        let slot = &self.slots[index];
        if !slot.children.is_empty() {
            self.center(index)
        } else if slot.rank == 0 {
            self.iron_from(index)
        } else {
            false
        }
    }

    /// Moves a parent and its first child's subtree toward each other.
    ///
    /// A parent left of its target moves right. A parent right of its target
    /// stays put and the first child's subtree moves right instead, since
    /// offsets never decrease.
    fn center(&mut self, index: usize) -> bool {
        let target = self.centering_target(index);
        let delta = target - self.slots[index].offset;
        if delta == 0.0 {
            return false;
        }

        self.diagnostics
            .log(&format!("center {}: delta {delta}", self.slots[index].id));

        if delta > 0.0 {
            self.slots[index].offset += delta;
            self.iron_from(index);
        } else {
            let first = self.slots[index].children[0];
            self.translate_subtree(first, -delta);
            self.iron_from(first);
        }
        true
    }

    /// Midpoint between the span anchor and the rightmost child offset, floored.
    ///
    /// The anchor is the smallest child offset, except that a child resting
    /// at offset 0 only anchors when no later child replaces it.
    fn centering_target(&self, index: usize) -> f32 {
        let mut anchor: Option<f32> = None;
        let mut rightmost = f32::MIN;
        for &child in &self.slots[index].children {
            let offset = self.slots[child].offset;
            anchor = match anchor {
                Some(current) if current != 0.0 && current <= offset => Some(current),
                _ => Some(offset),
            };
            rightmost = rightmost.max(offset);
        }

        let anchor = anchor.unwrap_or(rightmost);
        ((anchor + rightmost) / 2.0).floor()
    }

    fn translate_subtree(&mut self, top: usize, delta: f32) {
        let mut stack = vec![top];
        while let Some(index) = stack.pop() {
            let slot = &mut self.slots[index];
            slot.offset += delta;
            stack.extend(slot.children.iter().copied());
        }
    }

    /// Irons from `start` to the right end of its layer, then every deeper layer.
    ///
    /// The start layer is one chain beginning at `start` and continuing
    /// through the following sibling groups. Each deeper layer is its own
    /// chain across all of its groups.
    fn iron_from(&mut self, start: usize) -> bool {
        let layers = self.layers;
        let slot = &self.slots[start];
        let (depth, group, rank) = (slot.layer, slot.group, slot.rank);

        let groups = &layers[depth];
        let head = groups[group][rank..]
            .iter()
            .chain(groups[group + 1..].iter().flatten())
            .copied();
        let mut changed = self.iron_chain(head);

        for deeper in &layers[depth + 1..] {
            changed |= self.iron_chain(deeper.iter().flatten().copied());
        }
        changed
    }

    fn iron_chain(&mut self, mut chain: impl Iterator<Item = usize>) -> bool {
        let Some(mut previous) = chain.next() else {
            return false;
        };

        let mut changed = false;
        for next in chain {
            let left = &self.slots[previous];
            let minimum = left.offset + left.size.width() + STRUT;
            let right = &mut self.slots[next];
            if right.offset < minimum {
                right.offset = minimum;
                changed = true;
            }
            previous = next;
        }
        changed
    }
}
