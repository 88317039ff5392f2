//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains all the game rules and state management. It has no
//! dependencies on rendering, input or timers, making it:
//!
//! - **Deterministic**: Same seed (or piece sequence) produces identical games
//! - **Testable**: Every rule is reachable through plain function calls
//! - **Portable**: Drive it from a terminal, a test, or a headless pipe
//!
//! # Module Structure
//!
//! - [`shape`]: square occupancy matrices with on-demand clockwise rotation
//! - [`catalog`]: base shapes and colors of the seven piece kinds
//! - [`piece`]: the falling piece instance (shape + origin)
//! - [`board`]: ROWS x COLS grid with locking and line clearing
//! - [`placement`]: the collision rule shared by every move
//! - [`rng`]: piece sources (uniform PCG draws, fixed sequences)
//! - [`scoring`]: flat line points, hard drop bonus, optional speed-up
//! - [`config`]: board geometry, timing and seed
//! - [`game_state`]: Idle / Running / GameOver lifecycle and command handling
//! - [`snapshot`]: read-only view for renderers
//!
//! # Game Rules
//!
//! - **Uniform pieces**: every kind is drawn independently with equal odds
//! - **Plain rotation**: clockwise about the matrix, no wall kicks
//! - **Immediate lock**: a piece locks as soon as a downward step fails
//! - **Flat scoring**: 100 points per line, 1 point per hard-dropped row
//! - **Ghost Piece**: the snapshot carries the landing row of the active piece
//!
//! # Example
//!
//! ```
//! use blockfall_core::{GameConfig, GameState, SequencePieces};
//! use blockfall_types::{Command, PieceKind};
//!
//! let mut game = GameState::with_source(GameConfig::default(), SequencePieces::repeat(PieceKind::O));
//! game.apply(Command::Start);
//!
//! game.apply(Command::MoveRight);
//! game.apply(Command::RotateClockwise);
//! game.apply(Command::HardDrop);
//!
//! // Hard drop awards one point per row descended
//! assert_eq!(game.score(), 18);
//! ```
//!
//! # Timing
//!
//! The state never looks at a clock. A driver sends [`types::Command::Tick`]
//! every [`GameState::drop_interval_ms`] milliseconds while the game is
//! running and stops as soon as it reports game over.

pub mod board;
pub mod catalog;
pub mod config;
pub mod game_state;
pub mod piece;
pub mod placement;
pub mod rng;
pub mod scoring;
pub mod shape;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use catalog::{base_shape, shape_for};
pub use config::{BoardSize, ConfigError, GameConfig, SpeedUp};
pub use game_state::GameState;
pub use piece::Piece;
pub use placement::is_valid_placement;
pub use rng::{PieceSource, RandomPieces, SequencePieces};
pub use scoring::{hard_drop_points, line_clear_points, next_drop_interval};
pub use shape::{Shape, ShapeError};
pub use snapshot::{ActiveSnapshot, GameSnapshot, NextSnapshot};
