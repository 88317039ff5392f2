//! Runtime layer: drives a [`GameState`](blockfall_core::GameState) in real time.
//!
//! - [`timer`]: one cancellable periodic drop timer
//! - [`driver`]: a single task that serializes timer ticks and player
//!   commands, adjusts the timer on start, game over and speed changes, and
//!   renders after every change
//! - [`renderer`]: the [`Renderer`] seam plus a JSON-lines implementation
//!
//! ```no_run
//! use blockfall_core::{GameConfig, GameState};
//! use blockfall_engine::{Driver, JsonLinesRenderer};
//! use blockfall_types::Command;
//!
//! # async fn demo() -> std::io::Result<()> {
//! let game = GameState::new(GameConfig::default());
//! let mut driver = Driver::new(game, JsonLinesRenderer::new(std::io::stdout()));
//! let (tx, rx) = tokio::sync::mpsc::channel(32);
//! tx.send(Command::Start).await.ok();
//! drop(tx);
//! driver.run(rx).await
//! # }
//! ```

pub mod driver;
pub mod renderer;
pub mod timer;

pub use blockfall_core as core;

pub use driver::Driver;
pub use renderer::{JsonLinesRenderer, Renderer};
pub use timer::DropTimer;
