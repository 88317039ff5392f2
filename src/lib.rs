//! blockfall (workspace facade crate).
//!
//! Re-exports the workspace crates under short names so binaries, tests and
//! benches can use `blockfall::{core,engine,input,term,types}` while the
//! implementation lives in dedicated crates under `crates/`.

pub use blockfall_core as core;
pub use blockfall_engine as engine;
pub use blockfall_input as input;
pub use blockfall_term as term;
pub use blockfall_types as types;
