//! Command line options layered over the environment configuration.

use std::path::PathBuf;

use clap::Parser;

use blockfall::core::{ConfigError, GameConfig, SpeedUp};

/// Environment variable naming the log file (same as `--log-file`).
pub const ENV_LOG_FILE: &str = "BLOCKFALL_LOG";

/// Falling-block puzzle in the terminal.
#[derive(Debug, Parser)]
#[command(
    name = "blockfall",
    version,
    about = "Falling-block puzzle in the terminal. Fill rows to clear them; the game ends when a new piece cannot enter.",
    long_about = "Falling-block puzzle in the terminal.\n\n\
        Pieces fall one row per drop interval. Complete rows vanish for 100 points each; \
        a hard drop adds one point per row fallen.\n\n\
        CONTROLS:\n  Left/Right, h/l, a/d  Move      Up, k, w   Rotate clockwise\n  \
        Down, j, s            Soft drop Space      Hard drop\n  \
        Enter / r             Start or restart     q / Esc    Quit\n\n\
        Every option can also come from the environment: BLOCKFALL_ROWS, BLOCKFALL_COLS, \
        BLOCKFALL_DROP_MS, BLOCKFALL_SEED, BLOCKFALL_SPEED_UP, BLOCKFALL_LOG. Flags win."
)]
pub struct Cli {
    /// Board height in cells.
    #[arg(long, value_name = "ROWS")]
    pub rows: Option<u8>,

    /// Board width in cells.
    #[arg(long, value_name = "COLS")]
    pub cols: Option<u8>,

    /// Automatic drop interval in milliseconds.
    #[arg(long, value_name = "MS")]
    pub drop_ms: Option<u32>,

    /// Seed for the piece sequence (random when unset).
    #[arg(long, value_name = "N")]
    pub seed: Option<u64>,

    /// Each cleared line shortens the drop interval by 20 ms, down to 50 ms.
    #[arg(long)]
    pub speed_up: bool,

    /// Read commands from stdin (one per line) and write JSON snapshots to stdout.
    #[arg(long)]
    pub headless: bool,

    /// Headless only: no automatic drops, send `tick` lines instead.
    #[arg(long, requires = "headless")]
    pub manual_ticks: bool,

    /// Append logs to this file (terminal mode logs nowhere otherwise).
    #[arg(long, value_name = "FILE")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Environment configuration with the flags applied on top.
    pub fn game_config(&self) -> Result<GameConfig, ConfigError> {
        let mut config = GameConfig::from_env()?;
        self.apply_to(&mut config);
        config.validate()?;
        Ok(config)
    }

    pub fn apply_to(&self, config: &mut GameConfig) {
        if let Some(rows) = self.rows {
            config.size.rows = rows;
        }
        if let Some(cols) = self.cols {
            config.size.cols = cols;
        }
        if let Some(ms) = self.drop_ms {
            config.drop_interval_ms = ms;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if self.speed_up {
            config.speed_up = Some(SpeedUp::default());
        }
    }

    /// `--log-file`, else `BLOCKFALL_LOG`.
    pub fn log_path(&self) -> Option<PathBuf> {
        self.log_file
            .clone()
            .or_else(|| std::env::var_os(ENV_LOG_FILE).map(PathBuf::from))
    }
}
