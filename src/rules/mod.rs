//! Game rules for tic-tac-toe.
//!
//! Pure functions over the board, separated from board storage and from
//! the engine's turn bookkeeping. Outcomes are always recomputed from
//! cell occupancy, never cached.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::check_winner;
