//! Win/lose detection.

use crate::board::Board;

/// Where a game stands after the latest removal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    /// Every tile has been removed.
    Won,
    /// Tiles remain but no two free tiles share a kind.
    Lost,
}

impl GameStatus {
    /// Check if the game is over.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// Classifies a board as won, lost or still in progress.
#[derive(Clone, Copy, Debug, Default)]
pub struct Evaluator;

impl Evaluator {
    /// Evaluate `board`.
    ///
    /// `Lost` means "no legal move right now": it is judged on the *free*
    /// tiles only. A board can still hold several pairs of a kind and be
    /// reported lost because none of them are exposed at the same time.
    /// No solvability search is attempted. A freshly dealt board can
    /// therefore be `Lost` before any move is made.
    #[must_use]
    pub fn check(board: &Board) -> GameStatus {
        if board.remaining_tiles().next().is_none() {
            GameStatus::Won
        } else if board.has_available_match() {
            GameStatus::InProgress
        } else {
            GameStatus::Lost
        }
    }
}
