//! blockfall runner (default binary).
//!
//! Terminal mode draws with crossterm through the framebuffer renderer and
//! reads keys on a dedicated thread. Headless mode reads commands from stdin
//! and writes one JSON snapshot per change to stdout. Both feed the same
//! async driver, which owns the drop timer.

mod cli;

use std::fs::OpenOptions;
use std::io;
use std::sync::Mutex;
use std::thread;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use crossterm::event::{self, Event};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use blockfall::core::{GameConfig, GameState};
use blockfall::engine::{Driver, JsonLinesRenderer};
use blockfall::input::{handle_key_event, is_actionable, should_quit};
use blockfall::term::{GameView, TerminalFrontend};
use blockfall::types::Command;

use cli::Cli;

/// Pending commands between input and driver.
const COMMAND_QUEUE: usize = 64;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.game_config().context("invalid configuration")?;
    init_logging(&cli)?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to create tokio runtime")?;

    info!(
        rows = config.size.rows,
        cols = config.size.cols,
        drop_ms = config.drop_interval_ms,
        speed_up = config.speed_up.is_some(),
        headless = cli.headless,
        "blockfall starting"
    );

    if cli.headless {
        runtime.block_on(run_headless(config, cli.manual_ticks))
    } else {
        run_terminal(&runtime, config)
    }
}

/// Logs go to `--log-file`/`BLOCKFALL_LOG` when given. Otherwise headless mode
/// logs to stderr and terminal mode does not log, since the screen is in use.
fn init_logging(cli: &Cli) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    if let Some(path) = cli.log_path() {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .with_context(|| format!("cannot open log file {}", path.display()))?;
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .init();
    } else if cli.headless {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .init();
    }
    Ok(())
}

fn run_terminal(runtime: &tokio::runtime::Runtime, config: GameConfig) -> Result<()> {
    let mut frontend = TerminalFrontend::new(GameView::default());
    frontend.terminal().enter()?;

    let result = runtime.block_on(play(config, &mut frontend));

    // Always try to restore terminal state.
    let _ = frontend.terminal().exit();
    result
}

async fn play(config: GameConfig, frontend: &mut TerminalFrontend) -> Result<()> {
    let (tx, rx) = mpsc::channel(COMMAND_QUEUE);
    let input = thread::Builder::new()
        .name("input".into())
        .spawn(move || read_keys(tx))
        .context("failed to spawn input thread")?;

    let mut driver = Driver::new(GameState::new(config), frontend);
    driver.run(rx).await?;

    // The channel only closes once the input thread has returned.
    input
        .join()
        .map_err(|_| anyhow!("input thread panicked"))?
}

/// Blocking key loop. Returning drops the sender, which stops the driver.
fn read_keys(tx: mpsc::Sender<Command>) -> Result<()> {
    loop {
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if !is_actionable(&key) {
            continue;
        }
        if should_quit(key) {
            info!("quit requested");
            return Ok(());
        }
        if let Some(command) = handle_key_event(key) {
            if tx.blocking_send(command).is_err() {
                return Ok(());
            }
        }
    }
}

async fn run_headless(config: GameConfig, manual_ticks: bool) -> Result<()> {
    let (tx, rx) = mpsc::channel(COMMAND_QUEUE);
    let reader = tokio::spawn(read_commands(tx));

    let mut driver = Driver::new(GameState::new(config), JsonLinesRenderer::new(io::stdout().lock()));
    if manual_ticks {
        driver = driver.manual_ticks();
    }
    driver.run(rx).await.context("failed to write snapshot")?;

    reader.await.context("stdin reader failed")?
}

/// One command name per line; blank lines and `#` comments are skipped.
async fn read_commands(tx: mpsc::Sender<Command>) -> Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        match Command::from_str(line) {
            Some(command) => {
                if tx.send(command).await.is_err() {
                    break;
                }
            }
            None => warn!(line, "unknown command"),
        }
    }
    Ok(())
}
