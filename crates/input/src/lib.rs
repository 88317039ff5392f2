//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::Command`]s. It is
//! independent of any UI framework; timing lives in the driver, so held
//! keys simply rely on the terminal's own auto-repeat.

pub mod map;

pub use blockfall_types as types;

pub use map::{handle_key_event, is_actionable, should_quit};
