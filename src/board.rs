//! Immutable board snapshots and win detection.

use crate::bitboard::BitBoard;
use crate::common::{Cell, GameError, Mark, Rejection};
use crate::config::{BOARD_SIZE, CELL_COUNT, WINNING_LINES};
use core::fmt;

type BB = BitBoard<u16, BOARD_SIZE>;

/// One board state in the game history.
///
/// Stored as one bitboard per mark. The two never share a cell, so a
/// snapshot is always a well-formed assignment of `Cell`s to the nine
/// positions. Snapshots are plain `Copy` values: placing a mark produces a
/// new snapshot and leaves the old one untouched.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct BoardSnapshot {
    x: BB,
    o: BB,
}

impl BoardSnapshot {
    /// The empty starting board.
    pub fn new() -> Self {
        Self {
            x: BB::new(),
            o: BB::new(),
        }
    }

    /// Build a snapshot from nine row-major cells.
    pub fn from_cells(cells: [Cell; CELL_COUNT]) -> Self {
        let held_by = |target: Cell| {
            mask_of(
                cells
                    .iter()
                    .enumerate()
                    .filter(move |&(_, &cell)| cell == target)
                    .map(|(index, _)| index),
            )
        };
        Self {
            x: held_by(Cell::X),
            o: held_by(Cell::O),
        }
    }

    /// Content of the cell at `index`.
    pub fn cell(&self, index: usize) -> Result<Cell, GameError> {
        if self.x.get(index)? {
            Ok(Cell::X)
        } else if self.o.get(index)? {
            Ok(Cell::O)
        } else {
            Ok(Cell::Empty)
        }
    }

    /// All nine cells, row-major.
    pub fn cells(&self) -> [Cell; CELL_COUNT] {
        let mut cells = [Cell::Empty; CELL_COUNT];
        for index in self.x.iter_set_bits() {
            cells[index] = Cell::X;
        }
        for index in self.o.iter_set_bits() {
            cells[index] = Cell::O;
        }
        cells
    }

    /// Cells held by `mark`.
    pub fn marks(&self, mark: Mark) -> BB {
        match mark {
            Mark::X => self.x,
            Mark::O => self.o,
        }
    }

    /// Cells held by either mark.
    pub fn occupied(&self) -> BB {
        self.x | self.o
    }

    /// Number of marks on the board.
    pub fn mark_count(&self) -> usize {
        self.occupied().count_ones()
    }

    pub fn is_empty(&self) -> bool {
        self.occupied().is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.occupied().is_full()
    }

    /// Indices of the empty cells in ascending order.
    pub fn empty_cells(&self) -> impl Iterator<Item = usize> {
        (!self.occupied()).iter_set_bits()
    }

    /// A copy of this board with `mark` placed at `index`.
    ///
    /// Fails with `Rejected(Occupied)` if the cell already holds a mark.
    pub fn with_mark(&self, index: usize, mark: Mark) -> Result<Self, GameError> {
        if !self.cell(index)?.is_empty() {
            return Err(Rejection::Occupied.into());
        }
        let mut next = *self;
        match mark {
            Mark::X => next.x = self.x.with(index)?,
            Mark::O => next.o = self.o.with(index)?,
        }
        Ok(next)
    }

    /// Mark and indices of the first complete winning triple, if any.
    pub fn winning_line(&self) -> Option<(Mark, [usize; BOARD_SIZE])> {
        for line in WINNING_LINES.iter() {
            let mask = mask_of(line.iter().copied());
            if self.x.contains(mask) {
                return Some((Mark::X, *line));
            }
            if self.o.contains(mask) {
                return Some((Mark::O, *line));
            }
        }
        None
    }

    /// True when no cell is claimed by both marks and no bits lie outside
    /// the board. Always holds for snapshots built through this API.
    pub fn is_well_formed(&self) -> bool {
        (self.x & self.o).is_empty()
            && BB::from_raw(self.x.into_raw()) == self.x
            && BB::from_raw(self.o.into_raw()) == self.o
    }
}

/// Bitboard with the given cells set. Indices past the board are dropped.
fn mask_of<I: IntoIterator<Item = usize>>(indices: I) -> BB {
    let bits = indices.into_iter().fold(0u16, |bits, index| {
        let bit = u32::try_from(index)
            .ok()
            .and_then(|shift| 1u16.checked_shl(shift))
            .unwrap_or(0);
        bits | bit
    });
    BB::from_raw(bits)
}

/// Winner of `board`: the mark on the first complete triple, checked rows,
/// then columns, then diagonals. `None` covers both ongoing and drawn boards.
pub fn calculate_winner(board: &BoardSnapshot) -> Option<Mark> {
    board.winning_line().map(|(mark, _)| mark)
}

impl fmt::Debug for BoardSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BoardSnapshot({})", self)
    }
}

/// Compact row-major form, e.g. `XO..X...O`.
impl fmt::Display for BoardSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in self.cells() {
            let ch = match cell.mark() {
                Some(mark) => mark.symbol(),
                None => '.',
            };
            write!(f, "{}", ch)?;
        }
        Ok(())
    }
}

impl From<[Cell; CELL_COUNT]> for BoardSnapshot {
    fn from(cells: [Cell; CELL_COUNT]) -> Self {
        Self::from_cells(cells)
    }
}
