//! Noughts - two-player tic-tac-toe game engine.
//!
//! The engine owns all gameplay state for a single-device, two-player
//! session: the 3x3 board, whose turn it is, whether the round has
//! concluded, and cumulative scores across rounds. A presentation layer
//! (GUI, TUI, whatever the host provides) calls [`GameEngine::place_mark`]
//! on user input and renders the returned [`Outcome`] and accessor values.
//!
//! # Example
//!
//! ```
//! use noughts::{GameEngine, Outcome, Player};
//!
//! let mut engine = GameEngine::new();
//! engine.place_mark(0, 0)?; // X
//! engine.place_mark(1, 0)?; // O
//! engine.place_mark(0, 1)?; // X
//! engine.place_mark(1, 1)?; // O
//! let outcome = engine.place_mark(0, 2)?; // X completes the top row
//!
//! assert_eq!(outcome, Outcome::Win(Player::X));
//! assert_eq!(engine.score(Player::X), 1);
//!
//! engine.reset(); // next round, scores kept
//! assert_eq!(engine.current_player(), Player::X);
//! # Ok::<(), noughts::InvalidPosition>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod engine;
mod invariants;
mod position;
mod rules;
mod types;

pub use action::Move;
pub use engine::{GameEngine, Scoreboard};
pub use invariants::{
    AlternatingTurn, EngineInvariants, HistoryConsistent, Invariant, InvariantSet,
    InvariantViolation,
};
pub use position::{InvalidPosition, Position};
pub use rules::{check_winner, is_draw, is_full};
pub use types::{Board, Outcome, Player, Square};
