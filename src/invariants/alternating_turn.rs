//! Alternating turn invariant: marks go X, O, X, O, ...

use super::Invariant;
use crate::engine::GameEngine;
use crate::types::Player;

/// Invariant: players alternate strictly, X first.
///
/// While the round is live the engine's current player must also match
/// history parity; once the round is over the current player is frozen
/// and only the history pattern is checked.
pub struct AlternatingTurn;

impl Invariant<GameEngine> for AlternatingTurn {
    fn holds(engine: &GameEngine) -> bool {
        let history = engine.history();

        if let Some(first) = history.first()
            && first.player != Player::X
        {
            return false;
        }

        for window in history.windows(2) {
            if window[0].player == window[1].player {
                return false;
            }
        }

        if engine.is_game_over() {
            return true;
        }

        let expected = if history.len() % 2 == 0 {
            Player::X
        } else {
            Player::O
        };
        engine.current_player() == expected
    }

    fn description() -> &'static str {
        "players alternate turns (X, O, X, O, ...)"
    }
}
