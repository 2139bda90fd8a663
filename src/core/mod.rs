//! Core engine types: tile IDs and kinds, errors, RNG.
//!
//! Everything here is independent of any particular board shape.

pub mod error;
pub mod rng;
pub mod tile;

pub use error::{Error, LayoutError, TileNotFound};
pub use rng::GameRng;
pub use tile::{SlotRef, Tile, TileId, TileKind};
