//! The board graph: a tile arena plus reachability queries.
//!
//! Tiles live in a `Vec` indexed by `TileId`. Relations are stored as IDs
//! inside each tile (left/right neighbour, coverers), so every adjacency
//! or covering lookup is O(1) and there are no back-references to manage.
//!
//! ## Free Tiles
//!
//! A tile is free when all of the following hold:
//! - it hasn't been removed
//! - every tile covering it has been removed
//! - its left neighbour is missing or removed, **or** its right neighbour
//!   is missing or removed
//!
//! Free status is recomputed on every query. Nothing is cached, since any
//! removal can change it for up to a handful of other tiles.
//!
//! ## Ordering
//!
//! Every iterator walks the arena in ID order, which is layer-major then
//! ascending position. The same removal state always yields the same
//! sequence.

use rustc_hash::FxHashMap;

use crate::core::{Tile, TileId, TileKind, TileNotFound};

/// Tiles stacked in layers, with their covering and adjacency relations.
///
/// Topology is fixed at construction (see `BoardBuilder`). The only state
/// that changes is each tile's `removed` flag.
#[derive(Clone, Debug)]
pub struct Board {
    tiles: Vec<Tile>,
    layer_count: usize,
}

impl Board {
    pub(crate) fn from_tiles(tiles: Vec<Tile>, layer_count: usize) -> Self {
        Self { tiles, layer_count }
    }

    // === Lookup ===

    /// Get a tile by ID.
    pub fn tile(&self, id: TileId) -> Result<&Tile, TileNotFound> {
        self.tiles.get(id.index()).ok_or(TileNotFound(id))
    }

    /// Find the tile occupying a slot, removed or not.
    #[must_use]
    pub fn tile_at(&self, layer: u16, position: i32) -> Option<TileId> {
        // Arena is sorted by (layer, position).
        self.tiles
            .binary_search_by_key(&(layer, position), |t| (t.layer(), t.position()))
            .ok()
            .map(|idx| self.tiles[idx].id())
    }

    /// All tiles in ID order, removed ones included.
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> + '_ {
        self.tiles.iter()
    }

    /// Total number of tiles the board was built with.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    #[must_use]
    pub fn layer_count(&self) -> usize {
        self.layer_count
    }

    // === Reachability ===

    /// Check whether a tile can currently be selected.
    pub fn is_free(&self, id: TileId) -> Result<bool, TileNotFound> {
        let tile = self.tile(id)?;
        Ok(self.tile_is_free(tile))
    }

    fn tile_is_free(&self, tile: &Tile) -> bool {
        if tile.is_removed() {
            return false;
        }

        let uncovered = tile.coverers().iter().all(|&c| self.is_gone(c));
        let left_clear = tile.left().map_or(true, |n| self.is_gone(n));
        let right_clear = tile.right().map_or(true, |n| self.is_gone(n));

        uncovered && (left_clear || right_clear)
    }

    /// Relations are only ever wired to IDs from this arena.
    fn is_gone(&self, id: TileId) -> bool {
        self.tiles[id.index()].is_removed()
    }

    /// Tiles that can be selected right now.
    pub fn free_tiles(&self) -> impl Iterator<Item = &Tile> + '_ {
        self.tiles.iter().filter(move |t| self.tile_is_free(t))
    }

    /// Tiles that haven't been removed yet.
    pub fn remaining_tiles(&self) -> impl Iterator<Item = &Tile> + '_ {
        self.tiles.iter().filter(|t| !t.is_removed())
    }

    #[must_use]
    pub fn remaining_count(&self) -> usize {
        self.remaining_tiles().count()
    }

    /// Number of free tiles per kind.
    #[must_use]
    pub fn free_kind_counts(&self) -> FxHashMap<TileKind, usize> {
        let mut counts = FxHashMap::default();
        for tile in self.free_tiles() {
            *counts.entry(tile.kind()).or_default() += 1;
        }
        counts
    }

    /// Every pair of free tiles sharing a kind, as `(lower id, higher id)`.
    ///
    /// Pairs are ordered by first ID then second ID.
    ///
    /// ```
    /// use mahjong_solitaire::board::{BoardBuilder, Layout};
    /// use mahjong_solitaire::core::{TileId, TileKind};
    ///
    /// // Top layer dealt kinds 0 and 0, so the two top tiles pair up.
    /// let kinds = [1, 2, 2, 1, 0, 0].map(TileKind::new);
    /// let board = BoardBuilder::new(Layout::two_layer()).build_with_kinds(&kinds).unwrap();
    ///
    /// let hints: Vec<_> = board.available_matches().collect();
    /// assert_eq!(hints, vec![(TileId(4), TileId(5))]);
    /// ```
    pub fn available_matches(&self) -> impl Iterator<Item = (TileId, TileId)> + '_ {
        let free: Vec<&Tile> = self.free_tiles().collect();
        (0..free.len()).flat_map(move |i| {
            let a = free[i];
            free[i + 1..]
                .iter()
                .filter(move |b| b.kind() == a.kind())
                .map(move |b| (a.id(), b.id()))
                .collect::<Vec<_>>()
        })
    }

    /// Whether at least one pair of free tiles shares a kind.
    #[must_use]
    pub fn has_available_match(&self) -> bool {
        self.free_kind_counts().values().any(|&n| n >= 2)
    }

    // === Mutation ===

    /// Mark a tile removed. Removing a removed tile again is a no-op.
    ///
    /// This does not check free status; selection rules live in
    /// `MatchEngine`.
    pub fn mark_removed(&mut self, id: TileId) -> Result<(), TileNotFound> {
        let tile = self.tiles.get_mut(id.index()).ok_or(TileNotFound(id))?;
        tile.mark_removed();
        Ok(())
    }
}
