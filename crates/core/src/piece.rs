//! Piece module - the falling piece instance
//!
//! A piece is a shape placed on the board by its top-left origin. Moving
//! and rotating produce new values; validation is the caller's job
//! (see [`crate::placement`]).

use crate::catalog::shape_for;
use crate::shape::Shape;
use crate::types::{PieceColor, PieceKind};

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub shape: Shape,
    pub color: PieceColor,
    /// Board column of the shape's left edge
    pub col: i16,
    /// Board row of the shape's top edge; may be negative while entering
    pub row: i16,
}

impl Piece {
    /// Create a piece in its base orientation at the spawn position for a
    /// board `cols` wide: centered by matrix width, top row 0.
    pub fn spawn(kind: PieceKind, cols: u8) -> Self {
        let (shape, color) = shape_for(kind);
        Self {
            kind,
            shape,
            color,
            col: spawn_col(cols, &shape),
            row: 0,
        }
    }

    /// Copy translated by (dcol, drow)
    pub fn shifted(&self, dcol: i16, drow: i16) -> Self {
        Self {
            col: self.col + dcol,
            row: self.row + drow,
            ..*self
        }
    }

    /// Copy rotated clockwise around the same origin
    pub fn rotated(&self) -> Self {
        Self {
            shape: self.shape.rotate_clockwise(),
            ..*self
        }
    }

    /// Copy with the origin moved to `row`
    pub fn at_row(&self, row: i16) -> Self {
        Self { row, ..*self }
    }

    /// Absolute (col, row) of every occupied cell
    pub fn cells(&self) -> impl Iterator<Item = (i16, i16)> + '_ {
        self.shape
            .cells()
            .into_iter()
            .map(move |(r, c)| (self.col + c as i16, self.row + r as i16))
    }
}

/// Spawn column: `cols / 2 - width / 2` (integer halves)
pub fn spawn_col(cols: u8, shape: &Shape) -> i16 {
    cols as i16 / 2 - shape.width() as i16 / 2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_positions_on_default_board() {
        assert_eq!(Piece::spawn(PieceKind::I, 10).col, 3);
        assert_eq!(Piece::spawn(PieceKind::O, 10).col, 4);
        assert_eq!(Piece::spawn(PieceKind::T, 10).col, 4);
        assert!(PieceKind::ALL.iter().all(|&k| Piece::spawn(k, 10).row == 0));
    }

    #[test]
    fn test_spawn_on_odd_width() {
        // 7 / 2 - 3 / 2 = 3 - 1
        assert_eq!(Piece::spawn(PieceKind::S, 7).col, 2);
    }

    #[test]
    fn test_cells_are_absolute() {
        let piece = Piece::spawn(PieceKind::O, 10).shifted(-4, 18);
        let cells: Vec<_> = piece.cells().collect();
        assert_eq!(cells, vec![(0, 18), (1, 18), (0, 19), (1, 19)]);
    }

    #[test]
    fn test_rotated_keeps_origin() {
        let piece = Piece::spawn(PieceKind::T, 10);
        let rotated = piece.rotated();
        assert_eq!((rotated.col, rotated.row), (piece.col, piece.row));
        assert_ne!(rotated.shape, piece.shape);
        assert_eq!(rotated.color, PieceColor::Purple);
    }
}
