/// Side length of the square board.
pub const BOARD_SIZE: usize = 3;

/// Number of cells on the board, addressed row-major as `0..CELL_COUNT`.
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// The eight winning triples in the order they are checked: rows top to
/// bottom, columns left to right, then the main and anti diagonals.
pub const WINNING_LINES: [[usize; BOARD_SIZE]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Label of the first entry of the move list.
pub const GAME_START_LABEL: &str = "Go to game start";
