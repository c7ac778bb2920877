//! First-class move records.

use crate::position::Position;
use crate::types::Player;
use serde::{Deserialize, Serialize};

/// One placement: a player putting their mark at a position.
///
/// The engine records every applied move so the session history can be
/// checked against the board (see [`crate::invariants`]) and logged for
/// debugging. History is not an undo facility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// Where the mark was placed.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position.label())
    }
}
