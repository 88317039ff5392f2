//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal gameplay. It avoids
//! widget toolkits and instead renders snapshots into a plain framebuffer
//! that is diffed and flushed to the terminal.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Draw any board size the game was configured with
//! - Allow precise control over aspect ratio (e.g. 2 chars wide per cell)

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_engine as engine;
pub use blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalFrontend, TerminalRenderer};
