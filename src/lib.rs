//! # mahjong-solitaire
//!
//! The rules core of a layered-tile matching puzzle (Mahjong Solitaire).
//!
//! ## Design Principles
//!
//! 1. **Shape-Agnostic**: Boards of any size and shape are described as
//!    data (`Layout`). Nothing assumes a particular arrangement.
//!
//! 2. **Arena, Not Pointers**: Tiles live in a `Vec` indexed by `TileId`.
//!    Neighbour and coverer relations are ID lists inside each tile.
//!
//! 3. **Deterministic**: The same layout, kinds and seed always deal the
//!    same board, and every tile iterator has a fixed order.
//!
//! 4. **No Globals**: All game state is owned by a `Session` (or by a
//!    `Board` + `MatchEngine` pair the caller manages).
//!
//! ## Modules
//!
//! - `core`: Tile IDs and kinds, errors, RNG
//! - `board`: Layouts, the board builder and the board graph
//! - `rules`: Match engine and win/lose evaluation
//! - `session`: One game, driven pick by pick
//!
//! Rendering, input and geometry belong to the caller; the engine only
//! ever sees tile IDs.

pub mod core;
pub mod board;
pub mod rules;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    Error, LayoutError, TileNotFound,
    GameRng,
    SlotRef, Tile, TileId, TileKind,
};

pub use crate::board::{Board, BoardBuilder, CoverLink, Coverage, Layout};

pub use crate::rules::{Evaluator, GameStatus, MatchEngine, SelectState, Selection};

pub use crate::session::Session;
