//! Board module - manages the game grid
//!
//! The board is a ROWS x COLS grid where each cell is empty or holds the color
//! of a locked piece. Uses a flat row-major vector sized once at creation; the
//! dimensions never change for the lifetime of a game.
//! Coordinates: (col, row) with col growing left to right and row growing top
//! to bottom. Rows above the board (row < 0) are legal for falling pieces but
//! are never stored.

use crate::config::BoardSize;
use crate::piece::Piece;
use crate::types::{Cell, PieceColor};

/// The game board using flat vector storage
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    rows: u8,
    cols: u8,
    /// Row-major cells (row * cols + col)
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board
    pub fn new(size: BoardSize) -> Self {
        Self {
            rows: size.rows,
            cols: size.cols,
            cells: vec![None; size.cell_count()],
        }
    }

    #[inline(always)]
    fn index(&self, col: i16, row: i16) -> Option<usize> {
        if col < 0 || col >= self.cols as i16 || row < 0 || row >= self.rows as i16 {
            return None;
        }
        Some(row as usize * self.cols as usize + col as usize)
    }

    pub fn rows(&self) -> u8 {
        self.rows
    }

    pub fn cols(&self) -> u8 {
        self.cols
    }

    pub fn size(&self) -> BoardSize {
        BoardSize {
            rows: self.rows,
            cols: self.cols,
        }
    }

    /// Horizontal bounds and floor check. Rows above the top are inside.
    pub fn is_inside_bounds(&self, col: i16, row: i16) -> bool {
        col >= 0 && col < self.cols as i16 && row < self.rows as i16
    }

    /// Whether (col, row) holds a locked cell. Anything off the grid,
    /// including rows above the top, reads as unoccupied.
    pub fn is_occupied(&self, col: i16, row: i16) -> bool {
        matches!(self.get(col, row), Some(Some(_)))
    }

    /// Get cell at (col, row), `None` if off the grid
    pub fn get(&self, col: i16, row: i16) -> Option<Cell> {
        self.index(col, row).map(|idx| self.cells[idx])
    }

    /// Set cell at (col, row). Returns false if off the grid
    pub fn set(&mut self, col: i16, row: i16, cell: Cell) -> bool {
        match self.index(col, row) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Write the piece's color into every occupied cell at row >= 0.
    ///
    /// Cells above the board are dropped. The caller has already validated
    /// the placement, so on-board cells are known to be free.
    pub fn lock(&mut self, piece: &Piece) {
        self.lock_cells(piece.cells(), piece.color);
    }

    /// Lock arbitrary absolute cells with one color (same rules as [`Board::lock`]).
    pub fn lock_cells(&mut self, cells: impl IntoIterator<Item = (i16, i16)>, color: PieceColor) {
        for (col, row) in cells {
            if row >= 0 {
                self.set(col, row, Some(color));
            }
        }
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, row: usize) -> bool {
        self.row(row)
            .is_some_and(|cells| cells.iter().all(|cell| cell.is_some()))
    }

    /// Cells of one row, `None` past the floor
    pub fn row(&self, row: usize) -> Option<&[Cell]> {
        if row >= self.rows as usize {
            return None;
        }
        let width = self.cols as usize;
        let start = row * width;
        Some(&self.cells[start..start + width])
    }

    /// Iterate rows top to bottom
    pub fn iter_rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks_exact(self.cols as usize)
    }

    /// Remove every full row and return how many were removed.
    ///
    /// Remaining rows keep their relative order and settle at the bottom;
    /// the freed rows at the top are empty. Two-pointer pass, no allocation.
    pub fn clear_full_lines(&mut self) -> usize {
        let width = self.cols as usize;
        let mut cleared = 0;
        let mut write_row = self.rows as usize;

        // Scan from bottom to top
        for read_row in (0..self.rows as usize).rev() {
            if self.is_row_full(read_row) {
                cleared += 1;
                continue;
            }
            write_row -= 1;
            if write_row != read_row {
                let src = read_row * width;
                self.cells.copy_within(src..src + width, write_row * width);
            }
        }

        for cell in &mut self.cells[..write_row * width] {
            *cell = None;
        }

        cleared
    }

    /// Flat row-major view of the cells
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Empty every cell
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// Number of occupied cells
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Fill a whole row with one color, leaving the given columns empty.
    pub fn fill_row_except(&mut self, row: i16, color: PieceColor, gaps: &[i16]) {
        for col in 0..self.cols as i16 {
            let cell = if gaps.contains(&col) { None } else { Some(color) };
            self.set(col, row, cell);
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(BoardSize::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PieceKind;

    fn small() -> Board {
        Board::new(BoardSize { rows: 4, cols: 3 })
    }

    #[test]
    fn test_board_index_calculation() {
        let board = Board::default();
        assert_eq!(board.index(0, 0), Some(0));
        assert_eq!(board.index(9, 0), Some(9));
        assert_eq!(board.index(0, 1), Some(10));
        assert_eq!(board.index(9, 19), Some(199));
        assert_eq!(board.index(-1, 0), None);
        assert_eq!(board.index(10, 0), None);
        assert_eq!(board.index(0, 20), None);
        assert_eq!(board.index(0, -1), None);
    }

    #[test]
    fn test_bounds_allow_rows_above_top() {
        let board = Board::default();
        assert!(board.is_inside_bounds(0, -3));
        assert!(board.is_inside_bounds(9, 19));
        assert!(!board.is_inside_bounds(-1, 0));
        assert!(!board.is_inside_bounds(10, 0));
        assert!(!board.is_inside_bounds(0, 20));
    }

    #[test]
    fn test_occupied_off_grid_is_false() {
        let mut board = small();
        board.fill_row_except(0, PieceColor::Red, &[]);
        assert!(board.is_occupied(1, 0));
        assert!(!board.is_occupied(1, -1));
        assert!(!board.is_occupied(-1, 0));
        assert!(!board.is_occupied(3, 0));
    }

    #[test]
    fn test_lock_drops_cells_above_top() {
        let mut board = Board::default();
        let mut piece = Piece::spawn(PieceKind::O, board.cols());
        piece.row = -1;
        board.lock(&piece);

        // Top half of the O sits above the board and is discarded.
        assert_eq!(board.filled_count(), 2);
        assert_eq!(board.get(4, 0), Some(Some(PieceColor::Yellow)));
        assert_eq!(board.get(5, 0), Some(Some(PieceColor::Yellow)));
    }

    #[test]
    fn test_clear_full_lines_keeps_order() {
        let mut board = small();
        board.set(0, 0, Some(PieceColor::Blue));
        board.fill_row_except(1, PieceColor::Red, &[]);
        board.set(2, 2, Some(PieceColor::Green));
        board.fill_row_except(3, PieceColor::Red, &[]);

        assert_eq!(board.clear_full_lines(), 2);
        assert!(board.row(0).unwrap().iter().all(|c| c.is_none()));
        assert!(board.row(1).unwrap().iter().all(|c| c.is_none()));
        assert_eq!(board.get(0, 2), Some(Some(PieceColor::Blue)));
        assert_eq!(board.get(2, 3), Some(Some(PieceColor::Green)));
        assert_eq!(board.filled_count(), 2);
    }

    #[test]
    fn test_iter_rows_shape() {
        let board = small();
        let rows: Vec<_> = board.iter_rows().collect();
        assert_eq!(rows.len(), 4);
        assert!(rows.iter().all(|r| r.len() == 3));
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut board = small();
        board.fill_row_except(2, PieceColor::Cyan, &[1]);
        assert_eq!(board.filled_count(), 2);
        board.clear();
        assert_eq!(board.filled_count(), 0);
    }
}
