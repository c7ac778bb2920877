//! History consistency invariant: the board is exactly the replayed history.

use super::Invariant;
use crate::engine::GameEngine;
use crate::types::{Board, Square};

/// Invariant: replaying the move history onto an empty board reproduces
/// the engine's board, and no position is played twice.
///
/// Marks are never overwritten or removed except by reset, so the board
/// and the history must always agree.
pub struct HistoryConsistent;

impl Invariant<GameEngine> for HistoryConsistent {
    fn holds(engine: &GameEngine) -> bool {
        let mut replayed = Board::new();
        for mov in engine.history() {
            if !replayed.is_empty(mov.position) {
                return false;
            }
            replayed.set(mov.position, Square::Occupied(mov.player));
        }
        replayed == *engine.board()
    }

    fn description() -> &'static str {
        "board matches the replayed move history"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_engine_holds() {
        assert!(HistoryConsistent::holds(&GameEngine::new()));
    }

    #[test]
    fn test_holds_through_moves_and_reset() {
        let mut engine = GameEngine::new();
        for (row, col) in [(1, 1), (0, 0), (2, 0)] {
            engine.place_mark(row, col).unwrap();
            assert!(HistoryConsistent::holds(&engine));
        }
        engine.reset();
        assert!(HistoryConsistent::holds(&engine));
    }
}
