//! Relaxation order.
//!
//! A node is visited after its first child's subtree and before the
//! subtrees of its remaining children. Leftmost leaves come first, and each
//! parent is centered once its first child has settled.

use super::Slot;

enum Step {
    Descend(usize),
    Emit(usize),
}

/// Returns slot indices in relaxation order.
pub(super) fn build(slots: &[Slot], root: usize) -> Vec<usize> {
    let mut order = Vec::with_capacity(slots.len());
    let mut stack = vec![Step::Descend(root)];

    while let Some(step) = stack.pop() {
        match step {
            Step::Emit(index) => order.push(index),
            Step::Descend(index) => match slots[index].children.split_first() {
                None => order.push(index),
                Some((&first, rest)) => {
                    stack.extend(rest.iter().rev().map(|&child| Step::Descend(child)));
                    stack.push(Step::Emit(index));
                    stack.push(Step::Descend(first));
                }
            },
        }
    }

    order
}
