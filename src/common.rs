//! Common types for tic-tac-toe: marks, cells and engine errors.

use crate::bitboard::BitBoardError;
use core::fmt;

/// Symbol a player puts on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// Mark that moves from history step `step`. X moves on even steps.
    pub const fn for_step(step: usize) -> Self {
        if step % 2 == 0 {
            Mark::X
        } else {
            Mark::O
        }
    }

    pub const fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    pub const fn symbol(self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Content of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    #[default]
    Empty,
    X,
    O,
}

impl Cell {
    pub const fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::X => Some(Mark::X),
            Cell::O => Some(Mark::O),
        }
    }

    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }
}

impl From<Mark> for Cell {
    fn from(mark: Mark) -> Self {
        match mark {
            Mark::X => Cell::X,
            Mark::O => Cell::O,
        }
    }
}

impl From<Option<Mark>> for Cell {
    fn from(mark: Option<Mark>) -> Self {
        mark.map_or(Cell::Empty, Cell::from)
    }
}

/// Why a click on the board had no effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Rejection {
    /// The clicked cell already holds a mark.
    Occupied,
    /// The displayed board already has a winner.
    GameOver,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::Occupied => write!(f, "Cell is already taken"),
            Rejection::GameOver => write!(f, "Game is already won"),
        }
    }
}

/// Errors returned by board and game operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// Cell index outside `0..CELL_COUNT`.
    InvalidIndex(usize),
    /// History step outside `0..len`.
    InvalidStep { step: usize, len: usize },
    /// A move that the rules do not allow on the displayed board.
    Rejected(Rejection),
    /// A recorded history that could not have been produced by play.
    CorruptHistory { step: usize },
}

impl From<BitBoardError> for GameError {
    fn from(err: BitBoardError) -> Self {
        match err {
            BitBoardError::IndexOutOfBounds { index } => GameError::InvalidIndex(index),
        }
    }
}

impl From<Rejection> for GameError {
    fn from(rejection: Rejection) -> Self {
        GameError::Rejected(rejection)
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::InvalidIndex(i) => write!(f, "Cell index {} is out of range", i),
            GameError::InvalidStep { step, len } => {
                write!(f, "Step {} is outside history of length {}", step, len)
            }
            GameError::Rejected(r) => write!(f, "Move rejected: {}", r),
            GameError::CorruptHistory { step } => {
                write!(f, "History is inconsistent at step {}", step)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GameError {}
