//! Game rules: the two-pick match engine and win/lose evaluation.
//!
//! Both work against a `Board` passed in by the caller. Neither holds
//! global state; `Session` ties them together for a driving loop.

pub mod evaluator;
pub mod matching;

pub use evaluator::{Evaluator, GameStatus};
pub use matching::{MatchEngine, SelectState, Selection};
