#![cfg(feature = "std")]

//! Text rendering of the game read model.

use std::fmt::Write;
use std::string::String;

use crate::{
    board::BoardSnapshot,
    config::BOARD_SIZE,
    game::GameView,
};

/// Draw the board as a 3×3 grid. Empty cells show their index so players
/// know what to type.
pub fn render_board(board: &BoardSnapshot) -> String {
    let cells = board.cells();
    let mut out = String::new();
    for r in 0..BOARD_SIZE {
        if r > 0 {
            out.push_str("---+---+---\n");
        }
        let row: Vec<String> = (0..BOARD_SIZE)
            .map(|c| {
                let index = r * BOARD_SIZE + c;
                match cells[index].mark() {
                    Some(mark) => format!(" {} ", mark),
                    None => format!(" {} ", index),
                }
            })
            .collect();
        out.push_str(&row.join("|"));
        out.push('\n');
    }
    out
}

/// Board, status line and the move list with the displayed step marked.
pub fn render_view(view: &GameView) -> String {
    let mut out = render_board(&view.board);
    let _ = writeln!(out, "\n{}\n", view.status);
    for entry in &view.moves {
        let marker = if entry.step == view.step { '>' } else { ' ' };
        let _ = writeln!(out, "{} {:2}. {}", marker, entry.step, entry.label);
    }
    out
}

/// Short command reference shown by `help`.
pub fn help_text() -> &'static str {
    "Commands:\n  \
     0-8        place the next mark on that cell\n  \
     jump <n>   show the board after move n (alias: j <n>)\n  \
     show       redraw the board\n  \
     reset      start a new game\n  \
     help       show this message\n  \
     quit       leave the game\n"
}
