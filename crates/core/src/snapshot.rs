use serde::Serialize;

use crate::piece::Piece;
use crate::shape::Shape;
use crate::types::{Cell, PieceColor, PieceKind, Phase};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub shape: Shape,
    pub color: PieceColor,
    pub col: i16,
    pub row: i16,
}

impl From<Piece> for ActiveSnapshot {
    fn from(value: Piece) -> Self {
        Self {
            kind: value.kind,
            shape: value.shape,
            color: value.color,
            col: value.col,
            row: value.row,
        }
    }
}

impl ActiveSnapshot {
    /// Absolute (col, row) of the occupied cells at `row`
    pub fn cells_at(&self, row: i16) -> impl Iterator<Item = (i16, i16)> + '_ {
        self.shape
            .cells()
            .into_iter()
            .map(move |(r, c)| (self.col + c as i16, row + r as i16))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct NextSnapshot {
    pub kind: PieceKind,
    pub shape: Shape,
    pub color: PieceColor,
}

/// Read-only view of a game for renderers.
///
/// Reusable: [`crate::GameState::snapshot_into`] overwrites every field and
/// keeps the grid allocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSnapshot {
    pub rows: u8,
    pub cols: u8,
    /// Row-major, `rows * cols` cells
    pub grid: Vec<Cell>,
    pub active: Option<ActiveSnapshot>,
    /// Row the active piece would land on
    pub ghost_row: Option<i16>,
    pub next: Option<NextSnapshot>,
    pub score: u32,
    pub lines: u32,
    pub phase: Phase,
    pub game_over: bool,
    pub drop_interval_ms: u32,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.rows = 0;
        self.cols = 0;
        self.grid.clear();
        self.active = None;
        self.ghost_row = None;
        self.next = None;
        self.score = 0;
        self.lines = 0;
        self.phase = Phase::Idle;
        self.game_over = false;
        self.drop_interval_ms = 0;
    }

    /// Locked cell at (col, row); `None` when empty or off the grid
    pub fn cell(&self, col: usize, row: usize) -> Cell {
        if col >= self.cols as usize || row >= self.rows as usize {
            return None;
        }
        self.grid[row * self.cols as usize + col]
    }

    pub fn playable(&self) -> bool {
        self.phase == Phase::Running
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            rows: 0,
            cols: 0,
            grid: Vec::new(),
            active: None,
            ghost_row: None,
            next: None,
            score: 0,
            lines: 0,
            phase: Phase::Idle,
            game_over: false,
            drop_interval_ms: 0,
        }
    }
}
