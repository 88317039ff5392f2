//! Piece catalog - base orientations and colors of the seven kinds
//!
//! Shapes are stored in their spawn orientation only; every other
//! orientation is produced by [`Shape::rotate_clockwise`] at play time.

use crate::shape::Shape;
use crate::types::{PieceColor, PieceKind};

/// I piece: 4x4, bar on the second row
const I_SHAPE: Shape = Shape::from_matrix([
    [0, 0, 0, 0],
    [1, 1, 1, 1],
    [0, 0, 0, 0],
    [0, 0, 0, 0],
]);

const J_SHAPE: Shape = Shape::from_matrix([
    [1, 0, 0],
    [1, 1, 1],
    [0, 0, 0],
]);

const L_SHAPE: Shape = Shape::from_matrix([
    [0, 0, 1],
    [1, 1, 1],
    [0, 0, 0],
]);

/// O piece: the only 2x2 shape
const O_SHAPE: Shape = Shape::from_matrix([
    [1, 1],
    [1, 1],
]);

const S_SHAPE: Shape = Shape::from_matrix([
    [0, 1, 1],
    [1, 1, 0],
    [0, 0, 0],
]);

const T_SHAPE: Shape = Shape::from_matrix([
    [0, 1, 0],
    [1, 1, 1],
    [0, 0, 0],
]);

const Z_SHAPE: Shape = Shape::from_matrix([
    [1, 1, 0],
    [0, 1, 1],
    [0, 0, 0],
]);

/// Base shape and color for a piece kind.
pub fn shape_for(kind: PieceKind) -> (Shape, PieceColor) {
    (base_shape(kind), kind.color())
}

/// Spawn orientation of a piece kind.
pub fn base_shape(kind: PieceKind) -> Shape {
    match kind {
        PieceKind::I => I_SHAPE,
        PieceKind::J => J_SHAPE,
        PieceKind::L => L_SHAPE,
        PieceKind::O => O_SHAPE,
        PieceKind::S => S_SHAPE,
        PieceKind::T => T_SHAPE,
        PieceKind::Z => Z_SHAPE,
    }
}
