//! Geometry value types used by the layout engine.
//!
//! Only horizontal geometry is computed by the engine; vertical placement is
//! the layer index. [`Size`] carries a node's box extents and [`Span`]
//! describes a closed horizontal interval.

use serde::{Deserialize, Serialize};

/// Width and height of a node's bounding box.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    width: f32,
    height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns the width dimension of this size
    pub fn width(self) -> f32 {
        self.width
    }

    /// Returns the height dimension of this size
    pub fn height(self) -> f32 {
        self.height
    }

    /// Returns `true` when both dimensions are finite and strictly positive.
    pub fn is_positive(self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

/// A closed horizontal interval `[start, end]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Span {
    start: f32,
    end: f32,
}

impl Span {
    /// Creates a span, swapping the bounds if they are given in reverse.
    pub fn new(start: f32, end: f32) -> Self {
        if start <= end {
            Self { start, end }
        } else {
            Self {
                start: end,
                end: start,
            }
        }
    }

    /// Span covered by a box placed at `offset` with the given `width`.
    pub fn from_offset(offset: f32, width: f32) -> Self {
        Self::new(offset, offset + width)
    }

    pub fn start(self) -> f32 {
        self.start
    }

    pub fn end(self) -> f32 {
        self.end
    }

    /// Smallest span containing both spans.
    pub fn union(self, other: Span) -> Self {
        Self {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    /// Returns `true` if `other` lies entirely within this span.
    pub fn contains(self, other: Span) -> bool {
        self.start <= other.start && other.end <= self.end
    }
}


#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use super::*;

    proptest! {
        #[test]
        fn union_contains_both_operands(
            a in -1000.0f32..1000.0,
            aw in 0.0f32..100.0,
            b in -1000.0f32..1000.0,
            bw in 0.0f32..100.0,
        ) {
            let left = Span::from_offset(a, aw);
            let right = Span::from_offset(b, bw);
            let union = left.union(right);
            prop_assert!(union.contains(left));
            prop_assert!(union.contains(right));
            prop_assert!(union.start() <= left.start().min(right.start()));
            prop_assert!(union.end() >= left.end().max(right.end()));
        }
    }
}
