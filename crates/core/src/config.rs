//! Game configuration
//!
//! Board geometry, drop timing, the optional speed-up hook and the piece
//! seed. Values can come from code, from environment variables
//! ([`GameConfig::from_env`]) or from the command line (the binary layers
//! clap flags over the environment).

use std::env;

use thiserror::Error;

use crate::types::{
    DEFAULT_BLOCK_PX, DEFAULT_COLS, DEFAULT_DROP_MS, DEFAULT_ROWS, SPEED_UP_FLOOR_MS,
    SPEED_UP_STEP_MS,
};

pub const ENV_ROWS: &str = "BLOCKFALL_ROWS";
pub const ENV_COLS: &str = "BLOCKFALL_COLS";
pub const ENV_DROP_MS: &str = "BLOCKFALL_DROP_MS";
pub const ENV_SEED: &str = "BLOCKFALL_SEED";
pub const ENV_SPEED_UP: &str = "BLOCKFALL_SPEED_UP";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("board must have at least one row and one column (got {rows}x{cols})")]
    EmptyBoard { rows: u16, cols: u16 },
    #[error("board dimension {0} exceeds the 255 cell limit")]
    BoardTooLarge(u16),
    #[error("display {width}x{height}px is not a whole number of {block}px blocks")]
    UnevenDisplay { width: u16, height: u16, block: u16 },
    #[error("drop interval must be positive")]
    ZeroDropInterval,
    #[error("speed-up floor ({floor_ms}ms) must be positive")]
    ZeroSpeedUpFloor { floor_ms: u32 },
    #[error("invalid value {value:?} for {var}")]
    InvalidEnv { var: &'static str, value: String },
}

/// Fixed board geometry (ROWS x COLS).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoardSize {
    pub rows: u8,
    pub cols: u8,
}

impl BoardSize {
    pub fn new(rows: u8, cols: u8) -> Result<Self, ConfigError> {
        if rows == 0 || cols == 0 {
            return Err(ConfigError::EmptyBoard {
                rows: rows as u16,
                cols: cols as u16,
            });
        }
        Ok(Self { rows, cols })
    }

    /// Derive the grid from display dimensions and block size.
    ///
    /// ```
    /// use blockfall_core::config::BoardSize;
    ///
    /// let size = BoardSize::from_display(200, 400, 20).unwrap();
    /// assert_eq!((size.rows, size.cols), (20, 10));
    /// ```
    pub fn from_display(width_px: u16, height_px: u16, block_px: u16) -> Result<Self, ConfigError> {
        if block_px == 0 || width_px % block_px != 0 || height_px % block_px != 0 {
            return Err(ConfigError::UnevenDisplay {
                width: width_px,
                height: height_px,
                block: block_px,
            });
        }
        let narrow = |v: u16| u8::try_from(v).map_err(|_| ConfigError::BoardTooLarge(v));
        Self::new(narrow(height_px / block_px)?, narrow(width_px / block_px)?)
    }

    pub fn cell_count(&self) -> usize {
        self.rows as usize * self.cols as usize
    }
}

impl Default for BoardSize {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
        }
    }
}

/// Optional speed-up hook: each cleared line shortens the drop interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpeedUp {
    /// Reduction per cleared line
    pub step_ms: u32,
    /// Interval never goes below this
    pub floor_ms: u32,
}

impl Default for SpeedUp {
    fn default() -> Self {
        Self {
            step_ms: SPEED_UP_STEP_MS,
            floor_ms: SPEED_UP_FLOOR_MS,
        }
    }
}

/// Everything needed to create a game instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub size: BoardSize,
    /// Initial (and, without speed-up, permanent) drop period
    pub drop_interval_ms: u32,
    pub speed_up: Option<SpeedUp>,
    /// Piece seed; `None` draws one from OS entropy
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: BoardSize::default(),
            drop_interval_ms: DEFAULT_DROP_MS,
            speed_up: None,
            seed: None,
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        BoardSize::new(self.size.rows, self.size.cols)?;
        if self.drop_interval_ms == 0 {
            return Err(ConfigError::ZeroDropInterval);
        }
        if let Some(speed_up) = self.speed_up {
            if speed_up.floor_ms == 0 {
                return Err(ConfigError::ZeroSpeedUpFloor {
                    floor_ms: speed_up.floor_ms,
                });
            }
        }
        Ok(())
    }

    /// Create from environment variables, falling back to defaults for unset ones.
    ///
    /// - `BLOCKFALL_ROWS` / `BLOCKFALL_COLS`: board size
    /// - `BLOCKFALL_DROP_MS`: drop interval
    /// - `BLOCKFALL_SEED`: piece seed
    /// - `BLOCKFALL_SPEED_UP`: "1"/"true" enables the speed-up hook
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    /// Same as [`GameConfig::from_env`] with an injectable lookup (testable without
    /// touching the process environment).
    pub fn from_lookup(lookup: impl Fn(&'static str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(rows) = parse_var(&lookup, ENV_ROWS)? {
            config.size.rows = rows;
        }
        if let Some(cols) = parse_var(&lookup, ENV_COLS)? {
            config.size.cols = cols;
        }
        if let Some(ms) = parse_var(&lookup, ENV_DROP_MS)? {
            config.drop_interval_ms = ms;
        }
        config.seed = parse_var(&lookup, ENV_SEED)?;

        if let Some(raw) = lookup(ENV_SPEED_UP) {
            config.speed_up = match raw.trim().to_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => Some(SpeedUp::default()),
                "0" | "false" | "no" | "off" | "" => None,
                _ => {
                    return Err(ConfigError::InvalidEnv {
                        var: ENV_SPEED_UP,
                        value: raw,
                    })
                }
            };
        }

        config.validate()?;
        Ok(config)
    }
}

fn parse_var<T: std::str::FromStr>(
    lookup: &impl Fn(&'static str) -> Option<String>,
    var: &'static str,
) -> Result<Option<T>, ConfigError> {
    let Some(raw) = lookup(var) else {
        return Ok(None);
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse()
        .map(Some)
        .map_err(|_| ConfigError::InvalidEnv { var, value: raw })
}

/// Default board geometry expressed as the display it is derived from.
pub fn default_display_px() -> (u16, u16) {
    (
        DEFAULT_COLS as u16 * DEFAULT_BLOCK_PX,
        DEFAULT_ROWS as u16 * DEFAULT_BLOCK_PX,
    )
}
