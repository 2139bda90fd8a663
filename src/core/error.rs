//! Error types.
//!
//! Only two things can go wrong in the engine:
//! - `LayoutError`: a layout or kind multiset rejected by the builder
//! - `TileNotFound`: a query for an ID the board never issued
//!
//! Misclicks (selecting a blocked tile, selecting the same tile twice) are
//! ordinary input and never surface as errors.

use super::tile::{SlotRef, TileId, TileKind};

/// Board construction failed. The caller can retry with a corrected layout.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LayoutError {
    /// A kind appears an odd number of times, so it can never be fully paired.
    OddKindCount { kind: TileKind, count: usize },
    /// The kind multiset doesn't have exactly one label per slot.
    KindCountMismatch { slots: usize, kinds: usize },
    /// Two slots in the same layer share a position.
    DuplicatePosition(SlotRef),
    /// A covering link names a slot that isn't in the layout.
    UnknownSlot(SlotRef),
    /// A covering link whose upper slot isn't on a strictly higher layer.
    CoverNotAbove { upper: SlotRef, lower: SlotRef },
    /// More layers than a `u16` layer index can address.
    TooManyLayers(usize),
}

impl std::fmt::Display for LayoutError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LayoutError::OddKindCount { kind, count } => {
                write!(f, "{} appears {} times; every kind needs an even count", kind, count)
            }
            LayoutError::KindCountMismatch { slots, kinds } => {
                write!(f, "layout has {} slots but {} kinds were supplied", slots, kinds)
            }
            LayoutError::DuplicatePosition(slot) => {
                write!(f, "duplicate slot at {}", slot)
            }
            LayoutError::UnknownSlot(slot) => write!(f, "covering link names unknown slot {}", slot),
            LayoutError::CoverNotAbove { upper, lower } => {
                write!(f, "slot {} cannot cover {}: it is not on a higher layer", upper, lower)
            }
            LayoutError::TooManyLayers(n) => write!(f, "layout has {} layers", n),
        }
    }
}

impl std::error::Error for LayoutError {}

/// A tile ID that doesn't belong to the board it was used with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TileNotFound(pub TileId);

impl std::fmt::Display for TileNotFound {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} is not on this board", self.0)
    }
}

impl std::error::Error for TileNotFound {}

/// Any engine error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    Layout(LayoutError),
    NotFound(TileNotFound),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Layout(e) => write!(f, "invalid layout: {}", e),
            Error::NotFound(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Layout(e) => Some(e),
            Error::NotFound(e) => Some(e),
        }
    }
}

impl From<LayoutError> for Error {
    fn from(e: LayoutError) -> Self {
        Error::Layout(e)
    }
}

impl From<TileNotFound> for Error {
    fn from(e: TileNotFound) -> Self {
        Error::NotFound(e)
    }
}
