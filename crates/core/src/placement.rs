//! Placement validation
//!
//! The single collision rule used by every move, rotation, drop and spawn.

use crate::board::Board;
use crate::piece::Piece;
use crate::shape::Shape;

/// Whether `shape` fits with its top-left corner at (col, row).
///
/// A cell fails when it is left of column 0, right of the last column, at
/// or below the floor, or on an occupied cell. Cells above the top (row < 0)
/// only need to be within the column range.
pub fn is_valid_placement(board: &Board, col: i16, row: i16, shape: &Shape) -> bool {
    shape.cells().iter().all(|&(r, c)| {
        let board_col = col + c as i16;
        let board_row = row + r as i16;
        board.is_inside_bounds(board_col, board_row)
            && !(board_row >= 0 && board.is_occupied(board_col, board_row))
    })
}

/// [`is_valid_placement`] for a piece at its own origin.
pub fn piece_fits(board: &Board, piece: &Piece) -> bool {
    is_valid_placement(board, piece.col, piece.row, &piece.shape)
}

/// Lowest row the piece can reach by falling straight down from where it is.
pub fn drop_row(board: &Board, piece: &Piece) -> i16 {
    let mut row = piece.row;
    while is_valid_placement(board, piece.col, row + 1, &piece.shape) {
        row += 1;
    }
    row
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::base_shape;
    use crate::config::BoardSize;
    use crate::types::{PieceColor, PieceKind};

    #[test]
    fn test_empty_board_accepts_spawn() {
        let board = Board::default();
        for kind in PieceKind::ALL {
            assert!(piece_fits(&board, &Piece::spawn(kind, board.cols())));
        }
    }

    #[test]
    fn test_walls_and_floor() {
        let board = Board::default();
        let o = base_shape(PieceKind::O);
        assert!(is_valid_placement(&board, 0, 0, &o));
        assert!(is_valid_placement(&board, 8, 18, &o));
        assert!(!is_valid_placement(&board, -1, 0, &o));
        assert!(!is_valid_placement(&board, 9, 0, &o));
        assert!(!is_valid_placement(&board, 0, 19, &o));
    }

    #[test]
    fn test_empty_matrix_cells_may_hang_outside() {
        let board = Board::default();
        // I bar sits on matrix row 1, so the origin may go one row above the top.
        let i = base_shape(PieceKind::I);
        assert!(is_valid_placement(&board, 0, -1, &i));
        assert!(is_valid_placement(&board, 6, 18, &i));
        assert!(!is_valid_placement(&board, 7, 18, &i));
        assert!(!is_valid_placement(&board, 0, 19, &i));
    }

    #[test]
    fn test_rows_above_top_ignore_occupancy() {
        let mut board = Board::new(BoardSize { rows: 4, cols: 4 });
        board.set(1, 0, Some(PieceColor::Red));
        let o = base_shape(PieceKind::O);
        assert!(is_valid_placement(&board, 1, -2, &o));
        assert!(!is_valid_placement(&board, 1, -1, &o));
    }

    #[test]
    fn test_drop_row_lands_on_stack() {
        let mut board = Board::default();
        board.fill_row_except(19, PieceColor::Blue, &[]);
        let piece = Piece::spawn(PieceKind::O, board.cols());
        assert_eq!(drop_row(&board, &piece), 17);
    }
}
