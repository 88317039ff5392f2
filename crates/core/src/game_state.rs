//! Game state module - manages the complete game state
//!
//! This module ties together all core components: board, pieces, piece
//! source and scoring. It owns the Idle / Running / GameOver lifecycle and
//! applies one [`Command`] at a time to completion.
//!
//! Timing is not handled here. A driver decides when to send
//! [`Command::Tick`]; the state only exposes the drop interval it wants.

use tracing::debug;

use crate::catalog::shape_for;
use crate::config::{ConfigError, GameConfig};
use crate::piece::Piece;
use crate::placement::{drop_row, piece_fits};
use crate::rng::{PieceSource, RandomPieces};
use crate::scoring::{hard_drop_points, line_clear_points, next_drop_interval};
use crate::snapshot::{ActiveSnapshot, GameSnapshot, NextSnapshot};
use crate::types::{Command, LockEvent, Phase, PieceKind};
use crate::Board;

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState<S = RandomPieces> {
    config: GameConfig,
    board: Board,
    active: Option<Piece>,
    /// Pending kind shown as the next piece
    next: Option<PieceKind>,
    source: S,
    score: u32,
    lines: u32,
    phase: Phase,
    drop_interval_ms: u32,
    /// Last lock event (consumed by observers).
    last_event: Option<LockEvent>,
}

impl GameState<RandomPieces> {
    /// Create an idle game drawing pieces from a PCG seeded by `config.seed`
    /// (OS entropy when unset).
    pub fn new(config: GameConfig) -> Self {
        let source = RandomPieces::new(config.seed);
        Self::with_source(config, source)
    }

    /// Like [`GameState::new`], rejecting an invalid configuration.
    pub fn try_new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config))
    }
}

impl<S: PieceSource> GameState<S> {
    /// Create an idle game with an explicit piece source
    pub fn with_source(config: GameConfig, source: S) -> Self {
        Self {
            board: Board::new(config.size),
            active: None,
            next: None,
            source,
            score: 0,
            lines: 0,
            phase: Phase::Idle,
            drop_interval_ms: config.drop_interval_ms,
            last_event: None,
            config,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    /// Period the driver should use for automatic drops
    pub fn drop_interval_ms(&self) -> u32 {
        self.drop_interval_ms
    }

    pub fn active(&self) -> Option<Piece> {
        self.active
    }

    pub fn next_kind(&self) -> Option<PieceKind> {
        self.next
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Direct board access for setting up positions.
    ///
    /// Callers must not fill cells under the active piece.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Take the last lock event (if any).
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    /// Row the active piece would land on if dropped straight down
    pub fn ghost_row(&self) -> Option<i16> {
        self.active.map(|piece| drop_row(&self.board, &piece))
    }

    /// Start (or restart) a game.
    ///
    /// Acts only while Idle or after game over; returns false while running.
    pub fn start(&mut self) -> bool {
        if self.phase == Phase::Running {
            return false;
        }

        self.board = Board::new(self.config.size);
        self.active = None;
        self.score = 0;
        self.lines = 0;
        self.drop_interval_ms = self.config.drop_interval_ms;
        self.last_event = None;
        self.next = Some(self.source.next_kind());
        self.phase = Phase::Running;
        debug!(
            rows = self.board.rows(),
            cols = self.board.cols(),
            interval_ms = self.drop_interval_ms,
            "game started"
        );

        self.spawn_piece();
        true
    }

    /// Apply one command. Returns whether any state changed.
    ///
    /// # Panics
    ///
    /// Panics on any command other than [`Command::Start`] before the first
    /// start; drivers must not forward input to an idle game.
    pub fn apply(&mut self, command: Command) -> bool {
        match self.phase {
            Phase::Idle => match command {
                Command::Start => self.start(),
                other => panic!("{} applied before the game was started", other.as_str()),
            },
            Phase::GameOver => match command {
                Command::Start => self.start(),
                _ => false,
            },
            Phase::Running => match command {
                Command::MoveLeft => self.try_shift(-1),
                Command::MoveRight => self.try_shift(1),
                Command::SoftDrop | Command::Tick => self.step_down(),
                Command::RotateClockwise => self.try_rotate(),
                Command::HardDrop => self.hard_drop(),
                Command::Start => false,
            },
        }
    }

    /// Automatic drop step (same as [`Command::Tick`])
    pub fn tick(&mut self) -> bool {
        self.apply(Command::Tick)
    }

    /// Spawn the pending kind and draw a new pending kind.
    ///
    /// A blocked spawn ends the game and leaves no active piece.
    fn spawn_piece(&mut self) -> bool {
        let kind = match self.next.take() {
            Some(kind) => kind,
            None => self.source.next_kind(),
        };
        self.next = Some(self.source.next_kind());

        let piece = Piece::spawn(kind, self.board.cols());
        if !piece_fits(&self.board, &piece) {
            self.active = None;
            self.phase = Phase::GameOver;
            debug!(kind = kind.as_str(), score = self.score, "spawn blocked, game over");
            return false;
        }

        self.active = Some(piece);
        true
    }

    fn try_shift(&mut self, dcol: i16) -> bool {
        let Some(active) = self.active else {
            return false;
        };
        let moved = active.shifted(dcol, 0);
        if piece_fits(&self.board, &moved) {
            self.active = Some(moved);
            return true;
        }
        false
    }

    fn try_rotate(&mut self) -> bool {
        let Some(active) = self.active else {
            return false;
        };
        let rotated = active.rotated();
        if piece_fits(&self.board, &rotated) {
            self.active = Some(rotated);
            return true;
        }
        false
    }

    /// One row down, locking when blocked. Always changes state.
    fn step_down(&mut self) -> bool {
        let Some(active) = self.active else {
            return false;
        };
        let moved = active.shifted(0, 1);
        if piece_fits(&self.board, &moved) {
            self.active = Some(moved);
        } else {
            self.lock_piece(0);
        }
        true
    }

    fn hard_drop(&mut self) -> bool {
        let Some(active) = self.active else {
            return false;
        };
        let landing = drop_row(&self.board, &active);
        let distance = (landing - active.row) as u32;
        self.active = Some(active.at_row(landing));
        self.lock_piece(hard_drop_points(distance));
        true
    }

    /// Merge the active piece, clear lines, score, then spawn the next one.
    fn lock_piece(&mut self, drop_bonus: u32) {
        let Some(piece) = self.active.take() else {
            return;
        };

        self.board.lock(&piece);
        let cleared = self.board.clear_full_lines();
        let line_points = line_clear_points(cleared);

        self.score = self.score.saturating_add(line_points).saturating_add(drop_bonus);
        self.lines = self.lines.saturating_add(cleared as u32);

        let interval = next_drop_interval(self.drop_interval_ms, cleared, self.config.speed_up);
        if interval != self.drop_interval_ms {
            debug!(from = self.drop_interval_ms, to = interval, "drop interval changed");
            self.drop_interval_ms = interval;
        }

        debug!(
            kind = piece.kind.as_str(),
            col = piece.col,
            row = piece.row,
            lines = cleared,
            score = self.score,
            "piece locked"
        );

        let spawned = self.spawn_piece();
        self.last_event = Some(LockEvent {
            kind: piece.kind,
            lines_cleared: cleared as u32,
            line_points,
            drop_bonus,
            game_over: !spawned,
        });
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.rows = self.board.rows();
        out.cols = self.board.cols();
        out.grid.clear();
        out.grid.extend_from_slice(self.board.cells());

        out.active = self.active.map(ActiveSnapshot::from);
        out.ghost_row = self.ghost_row();
        out.next = self.next.map(|kind| {
            let (shape, color) = shape_for(kind);
            NextSnapshot { kind, shape, color }
        });
        out.score = self.score;
        out.lines = self.lines;
        out.phase = self.phase;
        out.game_over = self.phase == Phase::GameOver;
        out.drop_interval_ms = self.drop_interval_ms;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}
