//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are plain data with no game logic, so they can be shared by the
//! rules engine, the drivers and any renderer.
//!
//! # Board Dimensions
//!
//! The default playfield is derived from a 200x400 px display with 20 px
//! blocks:
//!
//! - **Columns**: 10 (indexed 0-9, left to right)
//! - **Rows**: 20 (indexed 0-19, top to bottom)
//!
//! # Timing and Scoring
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_DROP_MS` | 500 | Period of the automatic drop timer |
//! | `LINE_CLEAR_POINTS` | 100 | Points per cleared line |
//! | `HARD_DROP_POINTS_PER_ROW` | 1 | Bonus per row descended by a hard drop |
//! | `SPEED_UP_STEP_MS` | 20 | Interval reduction per cleared line (speed-up hook) |
//! | `SPEED_UP_FLOOR_MS` | 50 | Fastest interval the speed-up hook reaches |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{Command, PieceColor, PieceKind, DEFAULT_COLS, DEFAULT_ROWS};
//!
//! let kind = PieceKind::from_str("t").unwrap();
//! assert_eq!(kind, PieceKind::T);
//! assert_eq!(PieceColor::Purple.as_str(), "purple");
//!
//! assert_eq!(Command::from_str("hardDrop"), Some(Command::HardDrop));
//! assert_eq!((DEFAULT_ROWS, DEFAULT_COLS), (20, 10));
//! ```

use serde::Serialize;

/// Default board height in cells (20 rows)
pub const DEFAULT_ROWS: u8 = 20;

/// Default board width in cells (10 columns)
pub const DEFAULT_COLS: u8 = 10;

/// Display block size the default board is derived from (pixels)
pub const DEFAULT_BLOCK_PX: u16 = 20;

/// Default automatic drop period (500ms)
pub const DEFAULT_DROP_MS: u32 = 500;

/// Points awarded per cleared line
pub const LINE_CLEAR_POINTS: u32 = 100;

/// Points awarded per row a hard drop descends
pub const HARD_DROP_POINTS_PER_ROW: u32 = 1;

/// Drop interval reduction per cleared line when the speed-up hook is enabled
pub const SPEED_UP_STEP_MS: u32 = 20;

/// Lower bound for the drop interval when the speed-up hook is enabled
pub const SPEED_UP_FLOOR_MS: u32 = 50;

/// Largest supported shape matrix (4x4, the I piece)
pub const MAX_SHAPE_SIZE: usize = 4;


/// The seven piece kinds
///
/// Each kind has a fixed base shape and color (see `blockfall_core::catalog`):
/// - **I**: Cyan, 4x4 with a horizontal bar on the second row
/// - **J**: Blue
/// - **L**: Orange
/// - **O**: Yellow, 2x2 square
/// - **S**: Green
/// - **T**: Purple
/// - **Z**: Red
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl PieceKind {
    /// All kinds, in catalog order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            "o" => Some(PieceKind::O),
            "s" => Some(PieceKind::S),
            "t" => Some(PieceKind::T),
            "z" => Some(PieceKind::Z),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::J => "j",
            PieceKind::L => "l",
            PieceKind::O => "o",
            PieceKind::S => "s",
            PieceKind::T => "t",
            PieceKind::Z => "z",
        }
    }

    /// The color every cell of this kind is drawn and locked with.
    pub fn color(&self) -> PieceColor {
        match self {
            PieceKind::I => PieceColor::Cyan,
            PieceKind::J => PieceColor::Blue,
            PieceKind::L => PieceColor::Orange,
            PieceKind::O => PieceColor::Yellow,
            PieceKind::S => PieceColor::Green,
            PieceKind::T => PieceColor::Purple,
            PieceKind::Z => PieceColor::Red,
        }
    }
}

/// Color identifier stored in occupied board cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceColor {
    Cyan,
    Blue,
    Orange,
    Yellow,
    Green,
    Purple,
    Red,
}

impl PieceColor {
    /// Stable non-zero numeric id (0 is reserved for empty cells in compact grids).
    pub fn id(&self) -> u8 {
        match self {
            PieceColor::Cyan => 1,
            PieceColor::Blue => 2,
            PieceColor::Orange => 3,
            PieceColor::Yellow => 4,
            PieceColor::Green => 5,
            PieceColor::Purple => 6,
            PieceColor::Red => 7,
        }
    }

    /// Inverse of [`PieceColor::id`].
    pub fn from_id(id: u8) -> Option<Self> {
        match id {
            1 => Some(PieceColor::Cyan),
            2 => Some(PieceColor::Blue),
            3 => Some(PieceColor::Orange),
            4 => Some(PieceColor::Yellow),
            5 => Some(PieceColor::Green),
            6 => Some(PieceColor::Purple),
            7 => Some(PieceColor::Red),
            _ => None,
        }
    }

    /// CSS-style color name
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceColor::Cyan => "cyan",
            PieceColor::Blue => "blue",
            PieceColor::Orange => "orange",
            PieceColor::Yellow => "yellow",
            PieceColor::Green => "green",
            PieceColor::Purple => "purple",
            PieceColor::Red => "red",
        }
    }
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(PieceColor)`: Cell filled by a locked piece of that color
pub type Cell = Option<PieceColor>;

/// Discrete commands consumed by the game engine
///
/// Player commands come from the input layer, `Tick` from the drop timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Command {
    /// Move piece one column left
    MoveLeft,
    /// Move piece one column right
    MoveRight,
    /// Move piece one row down, locking it if it cannot move
    SoftDrop,
    /// Rotate the piece 90° clockwise in place
    RotateClockwise,
    /// Drop the piece as far as it goes and lock it
    HardDrop,
    /// Automatic one-row step from the drop timer
    Tick,
    /// Start a new game (also restarts after game over)
    Start,
}

impl Command {
    /// Parse a command name (case-insensitive, a few aliases accepted)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::Command;
    ///
    /// assert_eq!(Command::from_str("moveLeft"), Some(Command::MoveLeft));
    /// assert_eq!(Command::from_str("rotateClockwise"), Some(Command::RotateClockwise));
    /// assert_eq!(Command::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "moveleft" | "left" => Some(Command::MoveLeft),
            "moveright" | "right" => Some(Command::MoveRight),
            "softdrop" | "down" => Some(Command::SoftDrop),
            "rotateclockwise" | "rotatecw" | "rotate" => Some(Command::RotateClockwise),
            "harddrop" | "drop" => Some(Command::HardDrop),
            "tick" => Some(Command::Tick),
            "start" | "restart" => Some(Command::Start),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::MoveLeft => "moveLeft",
            Command::MoveRight => "moveRight",
            Command::SoftDrop => "softDrop",
            Command::RotateClockwise => "rotateClockwise",
            Command::HardDrop => "hardDrop",
            Command::Tick => "tick",
            Command::Start => "start",
        }
    }
}

/// Lifecycle phase of a game instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Phase {
    /// Created, not started yet
    #[default]
    Idle,
    Running,
    /// A spawned piece was blocked; only `Start` does anything now
    GameOver,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Idle => "idle",
            Phase::Running => "running",
            Phase::GameOver => "gameOver",
        }
    }
}

/// Event emitted after a piece locks.
///
/// Engine-internal bookkeeping that drivers can forward to observers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LockEvent {
    pub kind: PieceKind,
    pub lines_cleared: u32,
    /// `lines_cleared * LINE_CLEAR_POINTS`
    pub line_points: u32,
    /// Hard drop bonus (0 for soft drop and tick locks)
    pub drop_bonus: u32,
    /// The spawn that followed this lock was blocked.
    pub game_over: bool,
}

impl LockEvent {
    pub fn total_points(&self) -> u32 {
        self.line_points + self.drop_bonus
    }
}
