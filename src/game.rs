//! Game history, time travel and the controller that UI layers drive.
//!
//! [`GameState`] is an immutable value: every transition returns a new state
//! and leaves the old one (and every snapshot it holds) valid. The player to
//! move is never stored; it follows from the parity of the current step.

#[cfg(not(feature = "std"))]
use alloc::{format, string::String, vec::Vec};
#[cfg(feature = "std")]
use std::{format, string::String, vec::Vec};

use crate::{
    board::{calculate_winner, BoardSnapshot},
    common::{GameError, Mark, Rejection},
    config::{CELL_COUNT, GAME_START_LABEL},
};

/// Input events coming from a presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A click on the cell at the given index.
    CellClick(usize),
    /// A click on an entry of the move list.
    HistoryJump(usize),
}

/// Current status of the displayed board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    InProgress { next: Mark },
    Won(Mark),
    Drawn,
}

/// One entry of the move list.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveEntry {
    pub step: usize,
    pub label: String,
}

/// Everything a presentation layer needs to draw the game.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameView {
    pub board: BoardSnapshot,
    pub step: usize,
    pub status: String,
    pub moves: Vec<MoveEntry>,
}

/// Plain serializable form of a game. Turned back into a [`GameState`]
/// only through [`GameState::from_record`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameRecord {
    pub history: Vec<BoardSnapshot>,
    pub step: usize,
}

/// Board history plus the step currently displayed.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "std",
    serde(into = "GameRecord", try_from = "GameRecord")
)]
pub struct GameState {
    history: Vec<BoardSnapshot>,
    step: usize,
}

impl GameState {
    /// A fresh game: one empty snapshot, step 0, X to move.
    pub fn new() -> Self {
        let mut history = Vec::with_capacity(CELL_COUNT + 1);
        history.push(BoardSnapshot::new());
        Self { history, step: 0 }
    }

    /// Every snapshot recorded so far, including any after the current step.
    pub fn history(&self) -> &[BoardSnapshot] {
        &self.history
    }

    pub fn step_number(&self) -> usize {
        self.step
    }

    /// The snapshot at the current step.
    pub fn current(&self) -> &BoardSnapshot {
        // step < history.len() is upheld by every constructor and transition
        &self.history[self.step]
    }

    /// Whether the current step is the newest recorded snapshot.
    pub fn is_at_latest(&self) -> bool {
        self.step + 1 == self.history.len()
    }

    pub fn next_player(&self) -> Mark {
        Mark::for_step(self.step)
    }

    pub fn winner(&self) -> Option<Mark> {
        calculate_winner(self.current())
    }

    pub fn status(&self) -> GameStatus {
        let current = self.current();
        match calculate_winner(current) {
            Some(mark) => GameStatus::Won(mark),
            None if current.is_full() => GameStatus::Drawn,
            None => GameStatus::InProgress {
                next: self.next_player(),
            },
        }
    }

    /// Place the next player's mark at `cell`, reporting why if the move is
    /// not allowed on the displayed board.
    ///
    /// Snapshots after the current step are discarded before the new one is
    /// appended.
    pub fn try_move(&self, cell: usize) -> Result<Self, GameError> {
        if cell >= CELL_COUNT {
            return Err(GameError::InvalidIndex(cell));
        }
        let current = self.current();
        if calculate_winner(current).is_some() {
            return Err(Rejection::GameOver.into());
        }
        let next = current.with_mark(cell, self.next_player())?;

        let mut history = Vec::with_capacity(self.step + 2);
        history.extend_from_slice(&self.history[..=self.step]);
        history.push(next);
        Ok(Self {
            history,
            step: self.step + 1,
        })
    }

    /// Like [`try_move`](Self::try_move), but clicks on a taken cell or on a
    /// won board return the state unchanged instead of an error.
    pub fn apply_move(&self, cell: usize) -> Result<Self, GameError> {
        match self.try_move(cell) {
            Err(GameError::Rejected(reason)) => {
                log::trace!("ignoring click on cell {}: {}", cell, reason);
                Ok(self.clone())
            }
            other => other,
        }
    }

    /// Display the snapshot at `step`. History is left untouched until the
    /// next move.
    pub fn jump_to(&self, step: usize) -> Result<Self, GameError> {
        if step >= self.history.len() {
            return Err(GameError::InvalidStep {
                step,
                len: self.history.len(),
            });
        }
        Ok(Self {
            history: self.history.clone(),
            step,
        })
    }

    /// Apply a presentation event.
    pub fn apply(&self, event: GameEvent) -> Result<Self, GameError> {
        match event {
            GameEvent::CellClick(cell) => self.apply_move(cell),
            GameEvent::HistoryJump(step) => self.jump_to(step),
        }
    }

    /// Move list entries, one per recorded snapshot.
    pub fn move_list(&self) -> Vec<MoveEntry> {
        (0..self.history.len())
            .map(|step| MoveEntry {
                step,
                label: move_label(step),
            })
            .collect()
    }

    /// `Winner: X`, `Next player: O` or `Draw`.
    pub fn status_line(&self) -> String {
        match self.status() {
            GameStatus::Won(mark) => format!("Winner: {}", mark),
            GameStatus::Drawn => String::from("Draw"),
            GameStatus::InProgress { next } => format!("Next player: {}", next),
        }
    }

    pub fn view(&self) -> GameView {
        GameView {
            board: *self.current(),
            step: self.step,
            status: self.status_line(),
            moves: self.move_list(),
        }
    }

    /// Rebuild a state from a record, checking that the history could have
    /// been produced by play from an empty board.
    pub fn from_record(record: GameRecord) -> Result<Self, GameError> {
        let GameRecord { history, step } = record;
        let first = history
            .first()
            .ok_or(GameError::CorruptHistory { step: 0 })?;
        if !first.is_empty() || !first.is_well_formed() {
            return Err(GameError::CorruptHistory { step: 0 });
        }
        for (i, pair) in history.windows(2).enumerate() {
            let (prev, next) = (pair[0], pair[1]);
            if !is_single_move(&prev, &next, Mark::for_step(i)) {
                return Err(GameError::CorruptHistory { step: i + 1 });
            }
        }
        if step >= history.len() {
            return Err(GameError::InvalidStep {
                step,
                len: history.len(),
            });
        }
        Ok(Self { history, step })
    }

    pub fn to_record(&self) -> GameRecord {
        GameRecord {
            history: self.history.clone(),
            step: self.step,
        }
    }
}

/// `next` is `prev` plus exactly one `mark`, and `prev` was still open.
fn is_single_move(prev: &BoardSnapshot, next: &BoardSnapshot, mark: Mark) -> bool {
    if !next.is_well_formed() || calculate_winner(prev).is_some() {
        return false;
    }
    let opponent = mark.opponent();
    let added = next.marks(mark).count_ones() == prev.marks(mark).count_ones() + 1;
    next.marks(mark).contains(prev.marks(mark))
        && added
        && next.marks(opponent) == prev.marks(opponent)
}

fn move_label(step: usize) -> String {
    if step == 0 {
        String::from(GAME_START_LABEL)
    } else {
        format!("Go to move #{}", step)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl From<GameState> for GameRecord {
    fn from(state: GameState) -> Self {
        GameRecord {
            history: state.history,
            step: state.step,
        }
    }
}

impl TryFrom<GameRecord> for GameState {
    type Error = GameError;

    fn try_from(record: GameRecord) -> Result<Self, Self::Error> {
        GameState::from_record(record)
    }
}

/// What a cell click did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// `mark` was placed at `cell`; the game advanced to `step`.
    Applied { mark: Mark, cell: usize, step: usize },
    /// The click had no effect.
    Ignored(Rejection),
}

/// Mutable holder of the game for UI callers.
pub struct GameEngine {
    state: GameState,
}

impl GameEngine {
    /// Create a new engine at the start of a fresh game.
    pub fn new() -> Self {
        Self {
            state: GameState::new(),
        }
    }

    /// Resume from an existing state.
    pub fn from_state(state: GameState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn into_state(self) -> GameState {
        self.state
    }

    /// Handle a click on cell `cell`.
    pub fn on_cell_click(&mut self, cell: usize) -> Result<MoveOutcome, GameError> {
        let mark = self.state.next_player();
        match self.state.try_move(cell) {
            Ok(next) => {
                self.state = next;
                log::debug!(
                    "{} plays cell {} (step {})",
                    mark,
                    cell,
                    self.state.step_number()
                );
                Ok(MoveOutcome::Applied {
                    mark,
                    cell,
                    step: self.state.step_number(),
                })
            }
            Err(GameError::Rejected(reason)) => {
                log::debug!("click on cell {} ignored: {}", cell, reason);
                Ok(MoveOutcome::Ignored(reason))
            }
            Err(e) => Err(e),
        }
    }

    /// Handle a click on move list entry `step`.
    pub fn on_history_jump(&mut self, step: usize) -> Result<(), GameError> {
        self.state = self.state.jump_to(step)?;
        log::debug!(
            "jumped to step {} of {}",
            step,
            self.state.history().len() - 1
        );
        Ok(())
    }

    /// Dispatch an event. Returns `true` if the displayed state changed.
    pub fn handle(&mut self, event: GameEvent) -> Result<bool, GameError> {
        match event {
            GameEvent::CellClick(cell) => Ok(matches!(
                self.on_cell_click(cell)?,
                MoveOutcome::Applied { .. }
            )),
            GameEvent::HistoryJump(step) => {
                let before = self.state.step_number();
                self.on_history_jump(step)?;
                Ok(before != step)
            }
        }
    }

    /// Start over with an empty board and no history.
    pub fn reset(&mut self) {
        log::debug!("game reset");
        self.state = GameState::new();
    }

    pub fn view(&self) -> GameView {
        self.state.view()
    }

    pub fn status(&self) -> GameStatus {
        self.state.status()
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}
