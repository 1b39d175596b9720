use tictactoe::{calculate_winner, BoardSnapshot, Cell, GameError, Mark, Rejection, WINNING_LINES};

fn board_from(s: &str) -> BoardSnapshot {
    let mut cells = [Cell::Empty; 9];
    for (i, ch) in s.chars().enumerate() {
        cells[i] = match ch {
            'X' => Cell::X,
            'O' => Cell::O,
            _ => Cell::Empty,
        };
    }
    BoardSnapshot::from_cells(cells)
}

#[test]
fn test_empty_board_has_no_winner() {
    assert_eq!(calculate_winner(&BoardSnapshot::new()), None);
}

#[test]
fn test_every_line_wins_for_either_mark() {
    for mark in [Mark::X, Mark::O] {
        for line in WINNING_LINES {
            let mut cells = [Cell::Empty; 9];
            for i in line {
                cells[i] = Cell::from(mark);
            }
            let board = BoardSnapshot::from_cells(cells);
            assert_eq!(calculate_winner(&board), Some(mark), "line {:?}", line);
            assert_eq!(board.winning_line(), Some((mark, line)));
        }
    }
}

#[test]
fn test_line_wins_among_mixed_cells() {
    // X on the anti diagonal, O scattered elsewhere
    let board = board_from("OOXOXOX..");
    assert_eq!(calculate_winner(&board), Some(Mark::X));
    assert_eq!(board.winning_line(), Some((Mark::X, [2, 4, 6])));
}

#[test]
fn test_lines_are_checked_in_order() {
    // Row 0 and column 0 are both complete; the row is found first.
    let board = board_from("XXXX..X..");
    assert_eq!(board.winning_line(), Some((Mark::X, [0, 1, 2])));
}

#[test]
fn test_draw_has_no_winner() {
    let board = board_from("XOXXOOOXX");
    assert!(board.is_full());
    assert_eq!(calculate_winner(&board), None);
}

#[test]
fn test_calculate_winner_is_idempotent() {
    let board = board_from("XO.XO.X..");
    let first = calculate_winner(&board);
    let second = calculate_winner(&board);
    assert_eq!(first, Some(Mark::X));
    assert_eq!(first, second);
    assert_eq!(board, board_from("XO.XO.X.."));
}

#[test]
fn test_with_mark_copies() {
    let board = board_from("X........");
    let next = board.with_mark(4, Mark::O).unwrap();
    assert_eq!(board.cell(4).unwrap(), Cell::Empty);
    assert_eq!(next.cell(4).unwrap(), Cell::O);
    assert_eq!(next.cell(0).unwrap(), Cell::X);
    assert_eq!(next.mark_count(), 2);
}

#[test]
fn test_with_mark_rejects_taken_and_out_of_range() {
    let board = board_from("X........");
    assert_eq!(
        board.with_mark(0, Mark::O).unwrap_err(),
        GameError::Rejected(Rejection::Occupied)
    );
    assert_eq!(
        board.with_mark(9, Mark::O).unwrap_err(),
        GameError::InvalidIndex(9)
    );
    assert_eq!(board.cell(12).unwrap_err(), GameError::InvalidIndex(12));
}

#[test]
fn test_from_cells_matches_cells() {
    let cells = [
        Cell::X,
        Cell::Empty,
        Cell::O,
        Cell::Empty,
        Cell::X,
        Cell::Empty,
        Cell::O,
        Cell::Empty,
        Cell::X,
    ];
    let board = BoardSnapshot::from(cells);
    assert_eq!(board.cells(), cells);
    assert!(board.is_well_formed());
    assert_eq!(BoardSnapshot::from_cells([Cell::Empty; 9]), BoardSnapshot::new());
    assert_eq!(BoardSnapshot::from_cells([Cell::O; 9]).marks(Mark::O).count_ones(), 9);
}

#[test]
fn test_cells_and_display() {
    let board = board_from("XO..X...O");
    assert_eq!(board.to_string(), "XO..X...O");
    assert_eq!(board.cells()[1], Cell::O);
    assert_eq!(board.empty_cells().collect::<Vec<_>>(), vec![2, 3, 5, 6, 7]);
    assert_eq!(board.marks(Mark::X).count_ones(), 2);
}
