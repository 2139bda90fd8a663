//! Selection state machine and the pairing rule.
//!
//! ```text
//!            select(free a)
//!   Idle ─────────────────────▶ OneSelected(a)
//!    ▲                              │
//!    │  select(a)        → Idle     │
//!    │  select(free b)   → Matched / Mismatched
//!    └──────────────────────────────┘
//! ```
//!
//! Selecting a tile that isn't free is ignored in either state. At most two
//! tiles are ever in flight; after the second pick the engine is back to
//! `Idle` whatever the outcome.

use tracing::{debug, trace};

use crate::board::Board;
use crate::core::{TileId, TileNotFound};

/// Where the engine is between calls.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SelectState {
    #[default]
    Idle,
    OneSelected(TileId),
}

/// What a single `select` call did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Selection {
    /// Nothing is selected (rejected pick from `Idle`, or a deselect).
    Idle,
    /// One tile is held, waiting for its partner.
    OneSelected(TileId),
    /// Both tiles shared a kind and were removed.
    Matched(TileId, TileId),
    /// The tiles differed; neither was removed.
    Mismatched(TileId, TileId),
}

impl Selection {
    #[must_use]
    pub fn is_match(&self) -> bool {
        matches!(self, Selection::Matched(..))
    }
}

/// Two-pick selection engine.
///
/// The engine holds no board; callers pass the board they are playing on.
///
/// ## Example
///
/// ```
/// use mahjong_solitaire::board::{BoardBuilder, Layout};
/// use mahjong_solitaire::core::{TileId, TileKind};
/// use mahjong_solitaire::rules::{MatchEngine, Selection};
///
/// let kinds = [1, 2, 2, 1, 0, 0].map(TileKind::new);
/// let mut board = BoardBuilder::new(Layout::two_layer()).build_with_kinds(&kinds).unwrap();
/// let mut engine = MatchEngine::new();
///
/// assert_eq!(engine.select(&mut board, TileId(4)), Ok(Selection::OneSelected(TileId(4))));
/// assert_eq!(engine.select(&mut board, TileId(5)), Ok(Selection::Matched(TileId(4), TileId(5))));
/// assert_eq!(board.remaining_count(), 4);
/// ```
#[derive(Clone, Debug, Default)]
pub struct MatchEngine {
    state: SelectState,
}

impl MatchEngine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> SelectState {
        self.state
    }

    /// The tile waiting for a partner, if any.
    #[must_use]
    pub fn selected(&self) -> Option<TileId> {
        match self.state {
            SelectState::Idle => None,
            SelectState::OneSelected(id) => Some(id),
        }
    }

    /// Drop any pending selection.
    pub fn reset(&mut self) {
        self.state = SelectState::Idle;
    }

    /// Feed one pick into the state machine.
    ///
    /// Returns `Err` only for an ID that isn't on `board`; the engine state
    /// is left untouched in that case.
    pub fn select(&mut self, board: &mut Board, id: TileId) -> Result<Selection, TileNotFound> {
        let free = board.is_free(id)?;

        let outcome = match self.state {
            SelectState::Idle if !free => {
                trace!(%id, "ignored pick of blocked tile");
                Selection::Idle
            }
            SelectState::Idle => {
                self.state = SelectState::OneSelected(id);
                Selection::OneSelected(id)
            }
            SelectState::OneSelected(first) if first == id => {
                self.state = SelectState::Idle;
                Selection::Idle
            }
            SelectState::OneSelected(first) if !free => {
                trace!(%id, %first, "ignored pick of blocked tile");
                Selection::OneSelected(first)
            }
            SelectState::OneSelected(first) => {
                self.state = SelectState::Idle;
                self.resolve_pair(board, first, id)?
            }
        };

        Ok(outcome)
    }

    fn resolve_pair(&self, board: &mut Board, a: TileId, b: TileId) -> Result<Selection, TileNotFound> {
        if board.tile(a)?.kind() != board.tile(b)?.kind() {
            debug!(%a, %b, "mismatch");
            return Ok(Selection::Mismatched(a, b));
        }

        board.mark_removed(a)?;
        board.mark_removed(b)?;
        debug!(%a, %b, remaining = board.remaining_count(), "matched");
        Ok(Selection::Matched(a, b))
    }
}
