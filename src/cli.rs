#![cfg(feature = "std")]

//! Line-oriented terminal front end driving a [`GameEngine`].

use std::io::{BufRead, Write};

use crate::{
    game::{GameEngine, GameEvent, MoveOutcome},
    ui,
};

/// A parsed line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Place(usize),
    Jump(usize),
    Show,
    Reset,
    Help,
    Quit,
}

impl Command {
    /// The engine event behind this command, if it has one.
    pub fn event(self) -> Option<GameEvent> {
        match self {
            Command::Place(cell) => Some(GameEvent::CellClick(cell)),
            Command::Jump(step) => Some(GameEvent::HistoryJump(step)),
            _ => None,
        }
    }
}

/// Parse one line of input. Accepts `4`, `jump 2`, `j 2`, `j2`, `show`,
/// `reset`, `help`/`?` and `quit`/`q`. Returns `None` for anything else.
pub fn parse_command(input: &str) -> Option<Command> {
    let line = input.trim().to_ascii_lowercase();
    let mut parts = line.split_whitespace();
    let head = parts.next()?;
    let arg = parts.next();
    if parts.next().is_some() {
        return None;
    }
    match (head, arg) {
        ("jump" | "j", Some(n)) => n.parse().ok().map(Command::Jump),
        ("show" | "s", None) => Some(Command::Show),
        ("reset", None) => Some(Command::Reset),
        ("help" | "h" | "?", None) => Some(Command::Help),
        ("quit" | "q" | "exit", None) => Some(Command::Quit),
        (word, None) => {
            if let Some(n) = word.strip_prefix('j') {
                n.parse().ok().map(Command::Jump)
            } else {
                word.parse().ok().map(Command::Place)
            }
        }
        _ => None,
    }
}

/// Run an interactive session until `quit` or end of input.
pub fn run_session<R: BufRead, W: Write>(
    engine: &mut GameEngine,
    input: R,
    mut output: W,
) -> anyhow::Result<()> {
    write!(output, "{}", ui::render_view(&engine.view()))?;
    writeln!(output, "Type a cell number (0-8), or `help`.")?;
    prompt(&mut output)?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            prompt(&mut output)?;
            continue;
        }
        let Some(command) = parse_command(&line) else {
            writeln!(output, "Unrecognized command: {}", line.trim())?;
            prompt(&mut output)?;
            continue;
        };
        match command {
            Command::Quit => break,
            Command::Help => write!(output, "{}", ui::help_text())?,
            Command::Show => write!(output, "{}", ui::render_view(&engine.view()))?,
            Command::Reset => {
                engine.reset();
                write!(output, "{}", ui::render_view(&engine.view()))?;
            }
            Command::Place(cell) => match engine.on_cell_click(cell) {
                Ok(MoveOutcome::Applied { .. }) => {
                    write!(output, "{}", ui::render_view(&engine.view()))?
                }
                Ok(MoveOutcome::Ignored(reason)) => writeln!(output, "{}.", reason)?,
                Err(e) => writeln!(output, "Error: {}", e)?,
            },
            Command::Jump(step) => match engine.on_history_jump(step) {
                Ok(()) => write!(output, "{}", ui::render_view(&engine.view()))?,
                Err(e) => writeln!(output, "Error: {}", e)?,
            },
        }
        prompt(&mut output)?;
    }
    output.flush()?;
    Ok(())
}

fn prompt<W: Write>(output: &mut W) -> std::io::Result<()> {
    write!(output, "> ")?;
    output.flush()
}

/// Apply a scripted list of place/jump commands to `engine`.
///
/// Ignored moves are skipped like in the interactive session; anything that
/// is not a place or jump command, or an out-of-range index, is an error.
pub fn replay<S: AsRef<str>>(engine: &mut GameEngine, script: &[S]) -> anyhow::Result<()> {
    for raw in script {
        let raw = raw.as_ref();
        let event = parse_command(raw)
            .and_then(Command::event)
            .ok_or_else(|| anyhow::anyhow!("not a move or jump: {:?}", raw))?;
        engine
            .handle(event)
            .map_err(|e| anyhow::anyhow!("{:?}: {}", raw, e))?;
    }
    Ok(())
}
