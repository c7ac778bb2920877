//! Game engine: the single owned state of one play session.
//!
//! The engine owns the board, the turn, the game-over flag, and the
//! cumulative scores for both players. Presentation calls in on user
//! taps and renders whatever comes back; gameplay truth never lives in
//! view objects.

use crate::action::Move;
use crate::invariants;
use crate::position::{InvalidPosition, Position};
use crate::rules;
use crate::types::{Board, Outcome, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Cumulative win counts for both players across rounds.
///
/// Scores survive [`GameEngine::reset`] and only ever increase, by
/// exactly one per won round.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    x: u32,
    o: u32,
}

impl Scoreboard {
    /// Returns the given player's win count.
    pub fn get(&self, player: Player) -> u32 {
        match player {
            Player::X => self.x,
            Player::O => self.o,
        }
    }

    /// Credits the player with one won round.
    pub(crate) fn record_win(&mut self, player: Player) {
        match player {
            Player::X => self.x += 1,
            Player::O => self.o += 1,
        }
    }
}

/// Tic-tac-toe game engine.
///
/// One instance is live per session, created at session start and owned
/// for the lifetime of the screen. All operations are synchronous and
/// run on the caller's thread; nothing is persisted. Snapshots go out
/// only: the engine serializes for the host but is never rebuilt from
/// external data, so its invariants cannot be bypassed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameEngine {
    board: Board,
    current_player: Player,
    game_over: bool,
    scores: Scoreboard,
    history: Vec<Move>,
}

impl GameEngine {
    /// Creates a new session: empty board, X to move, scores 0/0.
    #[instrument]
    pub fn new() -> Self {
        info!("starting new game session");
        Self {
            board: Board::new(),
            current_player: Player::X,
            game_over: false,
            scores: Scoreboard::default(),
            history: Vec::new(),
        }
    }

    /// Places the current player's mark at (row, col).
    ///
    /// A tap on an occupied square, or any tap once the round is over,
    /// is a defined no-op: state is unchanged and the current outcome is
    /// returned. A winning move flips the game-over flag and credits the
    /// winner with one point; a draw flips the flag without touching the
    /// scores; otherwise the turn passes to the opponent.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidPosition`] if row or col is outside `0..3`.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn place_mark(&mut self, row: usize, col: usize) -> Result<Outcome, InvalidPosition> {
        let position = Position::from_coords(row, col)?;

        if self.game_over || !self.board.is_empty(position) {
            debug!(%position, "ignoring tap: round over or square occupied");
            return Ok(self.outcome());
        }

        let player = self.current_player;
        self.board.set(position, Square::Occupied(player));
        self.history.push(Move::new(player, position));
        debug!(%position, "mark placed");

        let outcome = self.outcome();
        match outcome {
            Outcome::Win(winner) => {
                self.game_over = true;
                self.scores.record_win(winner);
                info!(%winner, score = self.scores.get(winner), "round won");
            }
            Outcome::Draw => {
                self.game_over = true;
                info!("round drawn");
            }
            Outcome::InProgress => {
                self.current_player = player.opponent();
            }
        }

        invariants::assert_all(self);
        Ok(outcome)
    }

    /// Evaluates the current outcome from cell occupancy alone.
    ///
    /// Winner check first, then draw iff all nine squares are occupied,
    /// else the round is still in progress.
    pub fn outcome(&self) -> Outcome {
        if let Some(winner) = rules::check_winner(&self.board) {
            Outcome::Win(winner)
        } else if rules::is_full(&self.board) {
            Outcome::Draw
        } else {
            Outcome::InProgress
        }
    }

    /// Starts the next round: clears the board and history, X to move,
    /// round live again. Scores are untouched.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!("resetting board for a new round");
        self.board = Board::new();
        self.current_player = Player::X;
        self.game_over = false;
        self.history.clear();
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose turn it is.
    ///
    /// Once the round is over this stays on the player who moved last,
    /// until [`reset`](Self::reset).
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns true once the round has concluded.
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Returns the given player's cumulative score.
    pub fn score(&self, player: Player) -> u32 {
        self.scores.get(player)
    }

    /// Returns both players' scores.
    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scores
    }

    /// Returns the moves applied this round, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}
