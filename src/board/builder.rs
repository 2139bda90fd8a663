//! Board construction from a layout and a kind multiset.
//!
//! Construction is atomic: either every slot gets a tile, every neighbour
//! and coverer link is wired and a `Board` comes back, or nothing is built
//! and a `LayoutError` explains why.
//!
//! ## Traversal Order
//!
//! Slots are visited layer-major (layer 0 first), then by ascending
//! position. That order assigns tile IDs and decides which label lands on
//! which slot, so the same layout, kinds and RNG seed always produce the
//! same board.

use rand::seq::SliceRandom;
use rand::Rng;
use rustc_hash::FxHashMap;
use tracing::{debug, instrument};

use super::graph::Board;
use super::layout::{Coverage, Layout};
use crate::core::{LayoutError, SlotRef, Tile, TileId, TileKind};

/// Builds boards from a `Layout`.
///
/// ## Example
///
/// ```
/// use mahjong_solitaire::board::{BoardBuilder, Layout};
/// use mahjong_solitaire::core::{GameRng, TileKind};
///
/// let kinds = TileKind::pairs(3, 1);
/// let board = BoardBuilder::new(Layout::two_layer())
///     .build(&kinds, &mut GameRng::new(42))
///     .unwrap();
///
/// assert_eq!(board.len(), 6);
/// assert_eq!(board.free_tiles().count(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct BoardBuilder {
    layout: Layout,
}

impl BoardBuilder {
    pub fn new(layout: Layout) -> Self {
        Self { layout }
    }

    #[must_use]
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Shuffle `kinds` with `rng` and deal them onto the layout.
    ///
    /// `kinds` is a multiset: one entry per slot, every kind an even number
    /// of times.
    #[instrument(skip(self, kinds, rng), fields(slots = self.layout.slot_count()))]
    pub fn build<R: Rng + ?Sized>(&self, kinds: &[TileKind], rng: &mut R) -> Result<Board, LayoutError> {
        validate_kinds(kinds, self.layout.slot_count())?;

        let mut dealt = kinds.to_vec();
        dealt.shuffle(rng);
        self.assemble(&dealt)
    }

    /// Deal `kinds` onto the layout in traversal order without shuffling.
    ///
    /// Same validation as `build`. Used for authored boards.
    #[instrument(skip(self, kinds), fields(slots = self.layout.slot_count()))]
    pub fn build_with_kinds(&self, kinds: &[TileKind]) -> Result<Board, LayoutError> {
        validate_kinds(kinds, self.layout.slot_count())?;
        self.assemble(kinds)
    }

    fn assemble(&self, kinds: &[TileKind]) -> Result<Board, LayoutError> {
        let layer_count = self.layout.layer_count();
        if layer_count > u16::MAX as usize + 1 {
            return Err(LayoutError::TooManyLayers(layer_count));
        }

        // Create tiles in traversal order.
        let mut tiles = Vec::with_capacity(kinds.len());
        let mut slots: FxHashMap<SlotRef, TileId> = FxHashMap::default();
        let mut dealt = kinds.iter().copied();

        for (layer_idx, positions) in self.layout.layers.iter().enumerate() {
            let layer = layer_idx as u16;
            let mut sorted = positions.clone();
            sorted.sort_unstable();

            for position in sorted {
                let slot = SlotRef::new(layer, position);
                let id = TileId(tiles.len() as u32);
                if slots.insert(slot, id).is_some() {
                    return Err(LayoutError::DuplicatePosition(slot));
                }
                // validate_kinds guarantees one label per slot
                let kind = dealt.next().ok_or(LayoutError::KindCountMismatch {
                    slots: self.layout.slot_count(),
                    kinds: kinds.len(),
                })?;
                tiles.push(Tile::new(id, layer, position, kind));
            }
        }

        // Lateral neighbours. Nothing sits past either end of the i32 range.
        let neighbour = |layer: u16, position: Option<i32>| {
            position.and_then(|p| slots.get(&SlotRef::new(layer, p)).copied())
        };
        for tile in &mut tiles {
            tile.left = neighbour(tile.layer(), tile.position().checked_sub(1));
            tile.right = neighbour(tile.layer(), tile.position().checked_add(1));
        }

        // Coverers.
        for (upper, lower) in self.cover_pairs(&slots)? {
            let coverers = &mut tiles[lower.index()].coverers;
            if !coverers.contains(&upper) {
                coverers.push(upper);
            }
        }

        debug!(tiles = tiles.len(), layers = layer_count, "board built");
        Ok(Board::from_tiles(tiles, layer_count))
    }

    /// Resolve the coverage rule to `(upper, lower)` tile pairs.
    fn cover_pairs(&self, slots: &FxHashMap<SlotRef, TileId>) -> Result<Vec<(TileId, TileId)>, LayoutError> {
        let mut pairs = Vec::new();

        match &self.layout.coverage {
            Coverage::Halving | Coverage::Stacked => {
                let halving = self.layout.coverage == Coverage::Halving;
                for (layer_idx, positions) in self.layout.layers.iter().enumerate().skip(1) {
                    let below = (layer_idx - 1) as u16;
                    for &position in positions {
                        let Some(&upper) = slots.get(&SlotRef::new(layer_idx as u16, position)) else {
                            continue;
                        };
                        // Footprint slots outside the i32 range can't exist.
                        let footprint = if halving {
                            let first = position.checked_mul(2);
                            vec![first, first.and_then(|p| p.checked_add(1))]
                        } else {
                            vec![Some(position)]
                        };
                        for lower_pos in footprint.into_iter().flatten() {
                            if let Some(&lower) = slots.get(&SlotRef::new(below, lower_pos)) {
                                pairs.push((upper, lower));
                            }
                        }
                    }
                }
            }
            Coverage::Explicit(links) => {
                for link in links {
                    if link.upper.layer <= link.lower.layer {
                        return Err(LayoutError::CoverNotAbove {
                            upper: link.upper,
                            lower: link.lower,
                        });
                    }
                    let upper = *slots.get(&link.upper).ok_or(LayoutError::UnknownSlot(link.upper))?;
                    let lower = *slots.get(&link.lower).ok_or(LayoutError::UnknownSlot(link.lower))?;
                    pairs.push((upper, lower));
                }
            }
        }

        Ok(pairs)
    }
}

/// Check that `kinds` has one label per slot and every kind pairs up.
fn validate_kinds(kinds: &[TileKind], slots: usize) -> Result<(), LayoutError> {
    let mut counts: FxHashMap<TileKind, usize> = FxHashMap::default();
    for &kind in kinds {
        *counts.entry(kind).or_default() += 1;
    }

    // Report the lowest offending kind so the error is deterministic.
    let odd = counts
        .iter()
        .filter(|&(_, &count)| count % 2 != 0)
        .min_by_key(|&(&kind, _)| kind);
    if let Some((&kind, &count)) = odd {
        return Err(LayoutError::OddKindCount { kind, count });
    }

    if kinds.len() != slots {
        return Err(LayoutError::KindCountMismatch {
            slots,
            kinds: kinds.len(),
        });
    }

    Ok(())
}
