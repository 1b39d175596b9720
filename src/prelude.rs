//! Commonly used types and utilities for ease of import.

pub use crate::{
    calculate_winner, BoardSnapshot, Cell, GameEngine, GameError, GameEvent, GameState,
    GameStatus, Mark, MoveOutcome,
};

#[cfg(feature = "std")]
pub use crate::{
    cli::{parse_command, run_session, Command},
    ui::{render_board, render_view},
};
