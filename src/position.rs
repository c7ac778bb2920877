//! Board positions and the (row, col) validation boundary.

use crate::types::Board;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A position on the board.
///
/// The nine cells form a finite set, so positions are a fieldless enum
/// rather than a raw `(row, col)` pair: once constructed, a `Position`
/// is always in range and board access needs no bounds checks.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Position {
    /// Row 0, column 0.
    TopLeft,
    /// Row 0, column 1.
    TopCenter,
    /// Row 0, column 2.
    TopRight,
    /// Row 1, column 0.
    MiddleLeft,
    /// Row 1, column 1.
    Center,
    /// Row 1, column 2.
    MiddleRight,
    /// Row 2, column 0.
    BottomLeft,
    /// Row 2, column 1.
    BottomCenter,
    /// Row 2, column 2.
    BottomRight,
}

/// Row or column outside `0..3`.
///
/// This is the engine's only error kind. A tap on the grid can never
/// produce it; it signals a programming error in the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
#[display("position ({row}, {col}) is outside the 3x3 grid")]
pub struct InvalidPosition {
    /// Row index the caller supplied.
    pub row: usize,
    /// Column index the caller supplied.
    pub col: usize,
}

impl std::error::Error for InvalidPosition {}

impl Position {
    /// Creates a position from (row, col) coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidPosition`] if either coordinate is outside `0..3`.
    #[instrument]
    pub fn from_coords(row: usize, col: usize) -> Result<Self, InvalidPosition> {
        match (row, col) {
            (0, 0) => Ok(Position::TopLeft),
            (0, 1) => Ok(Position::TopCenter),
            (0, 2) => Ok(Position::TopRight),
            (1, 0) => Ok(Position::MiddleLeft),
            (1, 1) => Ok(Position::Center),
            (1, 2) => Ok(Position::MiddleRight),
            (2, 0) => Ok(Position::BottomLeft),
            (2, 1) => Ok(Position::BottomCenter),
            (2, 2) => Ok(Position::BottomRight),
            _ => Err(InvalidPosition { row, col }),
        }
    }

    /// Creates a position from a row-major board index.
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Position::TopLeft),
            1 => Some(Position::TopCenter),
            2 => Some(Position::TopRight),
            3 => Some(Position::MiddleLeft),
            4 => Some(Position::Center),
            5 => Some(Position::MiddleRight),
            6 => Some(Position::BottomLeft),
            7 => Some(Position::BottomCenter),
            8 => Some(Position::BottomRight),
            _ => None,
        }
    }

    /// Converts the position to a row-major board index (0-8).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Returns the row (0-2).
    pub fn row(self) -> usize {
        self.index() / 3
    }

    /// Returns the column (0-2).
    pub fn col(self) -> usize {
        self.index() % 3
    }

    /// Display label for this position.
    pub fn label(&self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Filters the nine positions down to the currently empty squares.
    ///
    /// Presentation uses this to decide which cells still accept a tap.
    #[instrument(skip(board))]
    pub fn valid_moves(board: &Board) -> Vec<Position> {
        <Position as strum::IntoEnumIterator>::iter()
            .filter(|pos| board.is_empty(*pos))
            .collect()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
