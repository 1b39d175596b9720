//! Seeded random play used to exercise the engine end to end.

#[cfg(not(feature = "std"))]
use alloc::string::{String, ToString};
#[cfg(feature = "std")]
use std::string::{String, ToString};

use rand::Rng;

use crate::{
    common::Mark,
    config::CELL_COUNT,
    game::{GameEngine, GameEvent, MoveOutcome},
};

/// Parameters of a simulated session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimConfig {
    /// Number of events to generate.
    pub events: usize,
    /// Chance that an event is a history jump rather than a cell click.
    /// Clamped to `0.0..=1.0`; non-finite values disable jumps.
    pub jump_probability: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            events: 64,
            jump_probability: 0.2,
        }
    }
}

/// Summary of a simulated session.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct SimReport {
    pub events: usize,
    pub applied_moves: usize,
    pub ignored_moves: usize,
    pub jumps: usize,
    pub history_len: usize,
    pub step: usize,
    pub winner: Option<Mark>,
    pub status: String,
    pub board: String,
}

/// Feed `config.events` random clicks and jumps into a fresh engine.
///
/// Clicks target any of the nine cells, so taken cells and finished games
/// are exercised as well. Jumps pick a uniformly random recorded step and are
/// only generated once there is more than one snapshot.
pub fn simulate<R: Rng>(rng: &mut R, config: &SimConfig) -> SimReport {
    let mut engine = GameEngine::new();
    let (mut applied_moves, mut ignored_moves, mut jumps) = (0, 0, 0);
    // NaN and infinities would make `random_bool` panic
    let jump_probability = if config.jump_probability.is_finite() {
        config.jump_probability.clamp(0.0, 1.0)
    } else {
        0.0
    };

    for _ in 0..config.events {
        let len = engine.state().history().len();
        let event = if len > 1 && rng.random_bool(jump_probability) {
            GameEvent::HistoryJump(rng.random_range(0..len))
        } else {
            GameEvent::CellClick(rng.random_range(0..CELL_COUNT))
        };
        match event {
            GameEvent::CellClick(cell) => match engine.on_cell_click(cell) {
                Ok(MoveOutcome::Applied { .. }) => applied_moves += 1,
                Ok(MoveOutcome::Ignored(_)) => ignored_moves += 1,
                // cells are always drawn from 0..CELL_COUNT
                Err(e) => log::warn!("unexpected click error: {}", e),
            },
            GameEvent::HistoryJump(step) => match engine.on_history_jump(step) {
                Ok(()) => jumps += 1,
                Err(e) => log::warn!("unexpected jump error: {}", e),
            },
        }
    }

    let state = engine.state();
    SimReport {
        events: config.events,
        applied_moves,
        ignored_moves,
        jumps,
        history_len: state.history().len(),
        step: state.step_number(),
        winner: state.winner(),
        status: state.status_line(),
        board: state.current().to_string(),
    }
}
