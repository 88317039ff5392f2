//! Shape module - square occupancy matrices and clockwise rotation
//!
//! A shape is an N x N boolean matrix (N = 2, 3 or 4) in the piece's local
//! frame, stored as a 16-bit mask so it stays `Copy` and allocation-free.
//! Rotation states are not precomputed: [`Shape::rotate_clockwise`] derives
//! them on demand from the current matrix.

use arrayvec::ArrayVec;
use serde::{Serialize, Serializer};
use thiserror::Error;

use crate::types::MAX_SHAPE_SIZE;

/// Offset of an occupied cell inside a shape: `(row, col)`
pub type CellOffset = (u8, u8);

/// Occupied offsets of a shape; at most 16 for a 4x4 matrix
pub type ShapeCells = ArrayVec<CellOffset, { MAX_SHAPE_SIZE * MAX_SHAPE_SIZE }>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShapeError {
    #[error("shape must not be empty")]
    Empty,
    #[error("shape is not square: row {row} has {len} cells, expected {size}")]
    NotSquare { row: usize, len: usize, size: usize },
    #[error("shape size {0} exceeds the 4x4 maximum")]
    TooLarge(usize),
}

/// Square boolean matrix, row-major, bit `r * 4 + c` set when (r, c) is occupied.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    size: u8,
    bits: u16,
}

impl Shape {
    /// Build from a const square matrix (non-zero entries are occupied).
    ///
    /// Squareness is enforced by the type; an unsupported size is a caller bug.
    ///
    /// # Panics
    ///
    /// Panics if `N` is 0 or larger than [`MAX_SHAPE_SIZE`].
    pub const fn from_matrix<const N: usize>(matrix: [[u8; N]; N]) -> Self {
        assert!(N > 0 && N <= MAX_SHAPE_SIZE, "unsupported shape size");
        let mut bits = 0u16;
        let mut r = 0;
        while r < N {
            let mut c = 0;
            while c < N {
                if matrix[r][c] != 0 {
                    bits |= 1u16 << (r * MAX_SHAPE_SIZE + c);
                }
                c += 1;
            }
            r += 1;
        }
        Self {
            size: N as u8,
            bits,
        }
    }

    /// Build from dynamic rows, rejecting anything that is not square.
    pub fn from_rows<R: AsRef<[bool]>>(rows: &[R]) -> Result<Self, ShapeError> {
        let size = rows.len();
        if size == 0 {
            return Err(ShapeError::Empty);
        }
        if size > MAX_SHAPE_SIZE {
            return Err(ShapeError::TooLarge(size));
        }

        let mut bits = 0u16;
        for (r, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != size {
                return Err(ShapeError::NotSquare {
                    row: r,
                    len: row.len(),
                    size,
                });
            }
            for (c, &filled) in row.iter().enumerate() {
                if filled {
                    bits |= Self::bit(r, c);
                }
            }
        }

        Ok(Self {
            size: size as u8,
            bits,
        })
    }

    #[inline(always)]
    fn bit(row: usize, col: usize) -> u16 {
        1 << (row * MAX_SHAPE_SIZE + col)
    }

    /// Side length N of the matrix.
    pub fn size(&self) -> usize {
        self.size as usize
    }

    /// Width used for spawn centering (the full matrix width, empty columns included).
    pub fn width(&self) -> usize {
        self.size as usize
    }

    /// Whether (row, col) is occupied. Out-of-matrix positions are empty.
    pub fn get(&self, row: usize, col: usize) -> bool {
        row < self.size() && col < self.size() && self.bits & Self::bit(row, col) != 0
    }

    /// Number of occupied cells.
    pub fn filled_count(&self) -> u32 {
        self.bits.count_ones()
    }

    /// Occupied `(row, col)` offsets in row-major order.
    pub fn cells(&self) -> ShapeCells {
        let mut cells = ShapeCells::new();
        for r in 0..self.size() {
            for c in 0..self.size() {
                if self.get(r, c) {
                    cells.push((r as u8, c as u8));
                }
            }
        }
        cells
    }

    /// Rotate 90° clockwise: `new[i][j] = old[N-1-j][i]`.
    ///
    /// Only the matrix changes; callers keep the origin and must re-validate.
    pub fn rotate_clockwise(&self) -> Self {
        let n = self.size();
        let mut bits = 0u16;
        for i in 0..n {
            for j in 0..n {
                if self.get(n - 1 - j, i) {
                    bits |= Self::bit(i, j);
                }
            }
        }
        Self {
            size: self.size,
            bits,
        }
    }

    /// Rows as boolean vectors (for display and serialization).
    pub fn to_rows(&self) -> Vec<Vec<bool>> {
        (0..self.size())
            .map(|r| (0..self.size()).map(|c| self.get(r, c)).collect())
            .collect()
    }
}

impl std::fmt::Debug for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut list = f.debug_list();
        for r in 0..self.size() {
            let row: String = (0..self.size())
                .map(|c| if self.get(r, c) { '#' } else { '.' })
                .collect();
            list.entry(&row);
        }
        list.finish()
    }
}

impl Serialize for Shape {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_rows().serialize(serializer)
    }
}
