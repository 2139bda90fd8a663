//! Declarative board layouts.
//!
//! A `Layout` is pure data: which slots exist on each layer and how upper
//! layers cover lower ones. It carries no tile kinds - those are dealt onto
//! the slots by the builder.
//!
//! Layouts are `serde` types so presentation code can ship them as data:
//!
//! ```
//! use mahjong_solitaire::board::{Coverage, Layout};
//!
//! let json = r#"{ "layers": [[0, 1, 2, 3], [0, 1]], "coverage": "Halving" }"#;
//! let layout: Layout = serde_json::from_str(json).unwrap();
//! assert_eq!(layout, Layout::two_layer());
//! assert_eq!(layout.slot_count(), 6);
//! ```

use serde::{Deserialize, Serialize};

use crate::core::SlotRef;

/// How tiles on upper layers cover tiles on lower layers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Coverage {
    /// The tile at position `i` on layer `L + 1` covers positions `2i` and
    /// `2i + 1` on layer `L`, where those slots exist.
    Halving,
    /// The tile at position `i` on layer `L + 1` covers position `i` on
    /// layer `L`, where that slot exists.
    Stacked,
    /// Explicit links. Every named slot must exist and each upper slot must
    /// sit on a strictly higher layer than its lower slot.
    Explicit(Vec<CoverLink>),
}

/// One explicit covering link.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverLink {
    pub upper: SlotRef,
    pub lower: SlotRef,
}

impl CoverLink {
    #[must_use]
    pub const fn new(upper: SlotRef, lower: SlotRef) -> Self {
        Self { upper, lower }
    }
}

/// Slot positions per layer (layer 0 is the bottom) plus a coverage rule.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layout {
    /// Positions on each layer. Order within a layer doesn't matter; the
    /// builder walks positions in ascending order.
    pub layers: Vec<Vec<i32>>,
    pub coverage: Coverage,
}

impl Layout {
    /// Create a layout from explicit layers and a coverage rule.
    pub fn new(layers: Vec<Vec<i32>>, coverage: Coverage) -> Self {
        Self { layers, coverage }
    }

    /// Four tiles on the bottom layer, two on top, each top tile covering
    /// two bottom tiles. Six slots in total.
    #[must_use]
    pub fn two_layer() -> Self {
        Self::new(vec![vec![0, 1, 2, 3], vec![0, 1]], Coverage::Halving)
    }

    /// A halving pyramid: `base_width` slots on layer 0, half as many on each
    /// layer above, stopping after `height` layers or when a layer would be
    /// empty. Widths beyond `i32::MAX` are capped there.
    ///
    /// ```
    /// use mahjong_solitaire::board::Layout;
    ///
    /// let layout = Layout::pyramid(8, 3);
    /// assert_eq!(layout.layers, vec![
    ///     vec![0, 1, 2, 3, 4, 5, 6, 7],
    ///     vec![0, 1, 2, 3],
    ///     vec![0, 1],
    /// ]);
    /// ```
    #[must_use]
    pub fn pyramid(base_width: usize, height: usize) -> Self {
        let mut layers = Vec::with_capacity(height);
        let mut width = base_width;
        while layers.len() < height && width > 0 {
            layers.push(row(width).collect());
            width /= 2;
        }
        Self::new(layers, Coverage::Halving)
    }

    /// `height` layers of `width` slots stacked directly on top of each other.
    /// Widths beyond `i32::MAX` are capped there.
    #[must_use]
    pub fn stacked(width: usize, height: usize) -> Self {
        let positions: Vec<i32> = row(width).collect();
        Self::new(vec![positions; height], Coverage::Stacked)
    }

    /// Total number of slots across all layers.
    #[must_use]
    pub fn slot_count(&self) -> usize {
        self.layers.iter().map(Vec::len).sum()
    }

    /// Number of layers.
    #[must_use]
    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }
}

/// Positions `0..width`, capped at the largest width an `i32` can address.
fn row(width: usize) -> std::ops::Range<i32> {
    0..i32::try_from(width).unwrap_or(i32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_layer_shape() {
        let layout = Layout::two_layer();
        assert_eq!(layout.layer_count(), 2);
        assert_eq!(layout.slot_count(), 6);
        assert_eq!(layout.coverage, Coverage::Halving);
    }

    #[test]
    fn test_pyramid_stops_at_empty_layer() {
        let layout = Layout::pyramid(4, 10);
        assert_eq!(layout.layers, vec![vec![0, 1, 2, 3], vec![0, 1], vec![0]]);
        assert_eq!(layout.slot_count(), 7);

        assert!(Layout::pyramid(0, 3).layers.is_empty());
    }

    #[test]
    fn test_stacked() {
        let layout = Layout::stacked(3, 2);
        assert_eq!(layout.layers, vec![vec![0, 1, 2], vec![0, 1, 2]]);
        assert_eq!(layout.coverage, Coverage::Stacked);
    }

    #[test]
    fn test_row_caps_width() {
        assert_eq!(row(5), 0..5);
        assert_eq!(row(i32::MAX as usize), 0..i32::MAX);
        assert_eq!(row(usize::MAX), 0..i32::MAX);
    }

    #[test]
    fn test_explicit_serde() {
        let layout = Layout::new(
            vec![vec![0, 1], vec![5]],
            Coverage::Explicit(vec![
                CoverLink::new(SlotRef::new(1, 5), SlotRef::new(0, 0)),
                CoverLink::new(SlotRef::new(1, 5), SlotRef::new(0, 1)),
            ]),
        );

        let json = serde_json::to_string(&layout).unwrap();
        let deserialized: Layout = serde_json::from_str(&json).unwrap();
        assert_eq!(layout, deserialized);
    }
}
