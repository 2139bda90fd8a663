//! Tile identification and the per-tile record stored in the board arena.
//!
//! ## ID Layout
//!
//! Tile IDs are arena indices assigned by the board builder in traversal
//! order: layer-major, then ascending position within the layer. An ID is
//! stable for the lifetime of the board it came from and means nothing
//! outside of it.
//!
//! ## Usage
//!
//! ```
//! use mahjong_solitaire::core::{TileId, TileKind};
//!
//! let id = TileId(3);
//! assert_eq!(id.index(), 3);
//!
//! let bamboo = TileKind::new(7);
//! assert_eq!(format!("{}", bamboo), "Kind(7)");
//! ```

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Unique identifier for a tile within one board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TileId(pub u32);

impl TileId {
    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Index into the board arena.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl From<u32> for TileId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for TileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Tile({})", self.0)
    }
}

/// Type label of a tile. Two free tiles of the same kind can be matched.
///
/// The engine doesn't interpret kinds - they're opaque labels.
/// Presentation code decides which face each kind is drawn with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TileKind(pub u16);

impl TileKind {
    /// Create a new tile kind.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Get the raw kind value.
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }

    /// Build a multiset holding `pairs` copies of each of `kinds` kinds,
    /// i.e. `kinds * pairs * 2` labels, ordered by kind.
    ///
    /// ```
    /// use mahjong_solitaire::core::TileKind;
    ///
    /// let labels = TileKind::pairs(3, 1);
    /// assert_eq!(labels.len(), 6);
    /// assert_eq!(labels[0], TileKind::new(0));
    /// assert_eq!(labels[5], TileKind::new(2));
    /// ```
    pub fn pairs(kinds: u16, pairs: usize) -> Vec<TileKind> {
        (0..kinds)
            .flat_map(|k| std::iter::repeat(TileKind(k)).take(pairs * 2))
            .collect()
    }
}

impl std::fmt::Display for TileKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Kind({})", self.0)
    }
}

/// A slot address inside a layout: layer index plus position in that layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SlotRef {
    pub layer: u16,
    pub position: i32,
}

impl SlotRef {
    #[must_use]
    pub const fn new(layer: u16, position: i32) -> Self {
        Self { layer, position }
    }
}

impl std::fmt::Display for SlotRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.layer, self.position)
    }
}

/// A single tile in the board arena.
///
/// Identity, placement and relations are fixed when the board is built.
/// The only mutable part is the `removed` flag, which goes from `false`
/// to `true` exactly once.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tile {
    id: TileId,
    layer: u16,
    position: i32,
    kind: TileKind,
    removed: bool,

    /// Neighbour at `position - 1` in the same layer.
    pub(crate) left: Option<TileId>,
    /// Neighbour at `position + 1` in the same layer.
    pub(crate) right: Option<TileId>,
    /// Tiles on higher layers whose footprint overlaps this one.
    /// Most tiles have at most two.
    pub(crate) coverers: SmallVec<[TileId; 2]>,
}

impl Tile {
    pub(crate) fn new(id: TileId, layer: u16, position: i32, kind: TileKind) -> Self {
        Self {
            id,
            layer,
            position,
            kind,
            removed: false,
            left: None,
            right: None,
            coverers: SmallVec::new(),
        }
    }

    #[must_use]
    pub fn id(&self) -> TileId {
        self.id
    }

    #[must_use]
    pub fn layer(&self) -> u16 {
        self.layer
    }

    #[must_use]
    pub fn position(&self) -> i32 {
        self.position
    }

    #[must_use]
    pub fn kind(&self) -> TileKind {
        self.kind
    }

    #[must_use]
    pub fn is_removed(&self) -> bool {
        self.removed
    }

    /// Left neighbour, if any.
    #[must_use]
    pub fn left(&self) -> Option<TileId> {
        self.left
    }

    /// Right neighbour, if any.
    #[must_use]
    pub fn right(&self) -> Option<TileId> {
        self.right
    }

    /// Tiles covering this one from above.
    #[must_use]
    pub fn coverers(&self) -> &[TileId] {
        &self.coverers
    }

    /// Mark the tile as removed. Removing an already-removed tile is a no-op.
    pub fn mark_removed(&mut self) {
        self.removed = true;
    }
}
