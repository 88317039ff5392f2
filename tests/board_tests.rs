//! Board and placement rules

use blockfall::core::{base_shape, is_valid_placement, Board, BoardSize, Shape};
use blockfall::types::{PieceColor, PieceKind};

fn board() -> Board {
    Board::new(BoardSize::default())
}

/// Distinct color per row so order after clearing can be checked.
fn row_color(row: i16) -> PieceColor {
    match row % 3 {
        0 => PieceColor::Blue,
        1 => PieceColor::Green,
        _ => PieceColor::Orange,
    }
}

#[test]
fn test_board_creation() {
    let board = board();
    assert_eq!(board.rows(), 20);
    assert_eq!(board.cols(), 10);
    assert_eq!(board.cells().len(), 200);
    assert_eq!(board.filled_count(), 0);
    assert!(board.iter_rows().all(|row| row.iter().all(|c| c.is_none())));
}

#[test]
fn test_board_from_display_geometry() {
    let size = BoardSize::from_display(200, 400, 20).unwrap();
    let board = Board::new(size);
    assert_eq!((board.rows(), board.cols()), (20, 10));
}

#[test]
fn test_set_and_get() {
    let mut board = board();
    assert!(board.set(3, 7, Some(PieceColor::Green)));
    assert_eq!(board.get(3, 7), Some(Some(PieceColor::Green)));
    assert!(board.is_occupied(3, 7));
    assert!(!board.set(10, 0, Some(PieceColor::Green)));
    assert!(!board.set(0, -1, Some(PieceColor::Green)));
    assert_eq!(board.get(0, 20), None);
}

#[test]
fn test_no_full_rows_leaves_board_unchanged() {
    let mut board = board();
    for row in 10..20 {
        board.fill_row_except(row, row_color(row), &[row % 10]);
    }
    let before = board.clone();

    assert_eq!(board.clear_full_lines(), 0);
    assert_eq!(board, before);
}

#[test]
fn test_clear_rows_5_and_7() {
    let mut board = board();
    // Every row from 3 down gets one hole except the two full ones.
    for row in 3..20 {
        if row == 5 || row == 7 {
            board.fill_row_except(row, PieceColor::Red, &[]);
        } else {
            board.fill_row_except(row, row_color(row), &[row % 10]);
        }
    }
    let before = board.clone();

    assert_eq!(board.clear_full_lines(), 2);

    // Two top rows are empty.
    assert!(board.row(0).unwrap().iter().all(|c| c.is_none()));
    assert!(board.row(1).unwrap().iter().all(|c| c.is_none()));

    // Rows below 7 did not move.
    for row in 8..20 {
        assert_eq!(board.row(row), before.row(row), "row {row}");
    }
    // Row 6 sat between the cleared rows and drops by one.
    assert_eq!(board.row(7), before.row(6));
    // Rows above 5 drop by two.
    for row in 0..5 {
        assert_eq!(board.row(row + 2), before.row(row), "row {row}");
    }
    assert!(!board.iter_rows().any(|row| row.iter().all(|c| c.is_some())));
}

#[test]
fn test_clear_all_rows() {
    let mut board = Board::new(BoardSize { rows: 3, cols: 2 });
    for row in 0..3 {
        board.fill_row_except(row, PieceColor::Cyan, &[]);
    }
    assert_eq!(board.clear_full_lines(), 3);
    assert_eq!(board.filled_count(), 0);
}

#[test]
fn test_validator_bounds() {
    let board = board();
    let t = base_shape(PieceKind::T);

    assert!(is_valid_placement(&board, 0, 0, &t));
    assert!(is_valid_placement(&board, 7, 18, &t));
    // Left wall: column -1 holds the T's left arm.
    assert!(!is_valid_placement(&board, -1, 0, &t));
    // Right wall.
    assert!(!is_valid_placement(&board, 8, 0, &t));
    // Floor: second shape row would be row 20.
    assert!(!is_valid_placement(&board, 0, 19, &t));
    // Above the top is fine as long as columns are in range.
    assert!(is_valid_placement(&board, 0, -1, &t));
    assert!(is_valid_placement(&board, 0, -5, &t));
}

#[test]
fn test_validator_occupancy() {
    let mut board = board();
    board.set(1, 10, Some(PieceColor::Blue));
    let t = base_shape(PieceKind::T);

    // T's stem (1, 0) lands on the filled cell.
    assert!(!is_valid_placement(&board, 0, 10, &t));
    // Arms (0..3, 1) land on row 10.
    assert!(!is_valid_placement(&board, 0, 9, &t));
    assert!(is_valid_placement(&board, 0, 11, &t));
    assert!(is_valid_placement(&board, 2, 9, &t));
}

#[test]
fn test_validator_matches_cellwise_definition() {
    let mut board = Board::new(BoardSize { rows: 6, cols: 5 });
    board.set(2, 3, Some(PieceColor::Red));
    board.set(0, 5, Some(PieceColor::Red));

    for kind in PieceKind::ALL {
        let mut shape: Shape = base_shape(kind);
        for _ in 0..4 {
            for col in -4..8 {
                for row in -4..9 {
                    let expected = shape.cells().iter().all(|&(r, c)| {
                        let bc = col + c as i16;
                        let br = row + r as i16;
                        (0..5).contains(&bc) && br < 6 && !(br >= 0 && board.is_occupied(bc, br))
                    });
                    assert_eq!(
                        is_valid_placement(&board, col, row, &shape),
                        expected,
                        "{kind:?} at ({col}, {row})"
                    );
                }
            }
            shape = shape.rotate_clockwise();
        }
    }
}
