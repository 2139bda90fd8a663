//! A single game session: one board, one match engine, one status.
//!
//! The session is what a driving loop holds on to. It forwards picks to the
//! `MatchEngine`, re-evaluates the board after every successful match, and
//! ignores further picks once the game is over.
//!
//! All mutation goes through `&mut self`. Hosts that share a session across
//! threads must put it behind a single lock; removal and the following free
//! tile recomputation are not atomic as a pair otherwise.
//!
//! ## Example
//!
//! ```
//! use mahjong_solitaire::board::Layout;
//! use mahjong_solitaire::core::TileKind;
//! use mahjong_solitaire::rules::GameStatus;
//! use mahjong_solitaire::session::Session;
//!
//! let mut session = Session::start(Layout::pyramid(8, 3), &TileKind::pairs(7, 1), 7).unwrap();
//!
//! // Follow hints until the game ends.
//! while let Some((a, b)) = session.hint() {
//!     session.select(a).unwrap();
//!     session.select(b).unwrap();
//! }
//!
//! assert!(session.status().is_terminal());
//! if session.status() == GameStatus::Won {
//!     assert_eq!(session.board().remaining_count(), 0);
//! }
//! ```

use tracing::{debug, info, instrument};

use crate::board::{Board, BoardBuilder, Layout};
use crate::core::{Error, GameRng, TileId, TileKind, TileNotFound};
use crate::rules::{Evaluator, GameStatus, MatchEngine, Selection};

/// Owned state for one game.
#[derive(Clone, Debug)]
pub struct Session {
    board: Board,
    engine: MatchEngine,
    status: GameStatus,
    matches_made: u32,
}

impl Session {
    /// Start a session on an already-built board.
    ///
    /// The board is evaluated immediately, so a deal with no free pair
    /// starts out `Lost`.
    pub fn new(board: Board) -> Self {
        let status = Evaluator::check(&board);
        debug!(?status, tiles = board.len(), "session started");
        Self {
            board,
            engine: MatchEngine::new(),
            status,
            matches_made: 0,
        }
    }

    /// Deal `kinds` onto `layout` using a `GameRng` seeded with `seed`.
    #[instrument(skip(layout, kinds))]
    pub fn start(layout: Layout, kinds: &[TileKind], seed: u64) -> Result<Self, Error> {
        let mut rng = GameRng::new(seed).for_context("deal");
        let board = BoardBuilder::new(layout).build(kinds, &mut rng)?;
        Ok(Self::new(board))
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// The tile waiting for a partner, if any.
    #[must_use]
    pub fn selected(&self) -> Option<TileId> {
        self.engine.selected()
    }

    /// Number of successful matches so far.
    #[must_use]
    pub fn matches_made(&self) -> u32 {
        self.matches_made
    }

    /// First pair of free tiles sharing a kind, if any.
    #[must_use]
    pub fn hint(&self) -> Option<(TileId, TileId)> {
        if self.status.is_terminal() {
            return None;
        }
        self.board.available_matches().next()
    }

    /// Pick a tile.
    ///
    /// Once the game is over every pick is ignored and reported as
    /// `Selection::Idle`. Unknown IDs are still an error.
    pub fn select(&mut self, id: TileId) -> Result<Selection, TileNotFound> {
        if self.status.is_terminal() {
            self.board.tile(id)?;
            return Ok(Selection::Idle);
        }

        let outcome = self.engine.select(&mut self.board, id)?;

        if outcome.is_match() {
            self.matches_made += 1;
            self.status = Evaluator::check(&self.board);
            if self.status.is_terminal() {
                info!(status = ?self.status, matches = self.matches_made, "game over");
            }
        }

        Ok(outcome)
    }
}
