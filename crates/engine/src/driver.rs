//! Async driver: serializes timer ticks and player commands onto one game.

use std::time::Duration;

use tokio::sync::mpsc;
use tracing::{debug, info};

use blockfall_core::{GameSnapshot, GameState, PieceSource, RandomPieces};
use blockfall_types::{Command, LockEvent, Phase};

use crate::renderer::Renderer;
use crate::timer::DropTimer;

/// Owns a game, its drop timer and a renderer.
///
/// Every command is applied, the timer adjusted and the frame rendered
/// before the next event is looked at.
pub struct Driver<R, S = RandomPieces> {
    game: GameState<S>,
    renderer: R,
    timer: DropTimer,
    /// Arm the drop timer while running. Off means ticks only arrive as commands.
    auto_drop: bool,
    snapshot: GameSnapshot,
    /// Most recent lock, taken from the game after each command.
    last_lock: Option<LockEvent>,
}

impl<R: Renderer, S: PieceSource> Driver<R, S> {
    pub fn new(game: GameState<S>, renderer: R) -> Self {
        Self {
            game,
            renderer,
            timer: DropTimer::new(),
            auto_drop: true,
            snapshot: GameSnapshot::default(),
            last_lock: None,
        }
    }

    /// Disable the drop timer; `Tick` must then be sent explicitly.
    pub fn manual_ticks(mut self) -> Self {
        self.auto_drop = false;
        self
    }

    pub fn game(&self) -> &GameState<S> {
        &self.game
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn timer(&self) -> &DropTimer {
        &self.timer
    }

    pub fn last_lock(&self) -> Option<LockEvent> {
        self.last_lock
    }

    pub fn into_parts(self) -> (GameState<S>, R) {
        (self.game, self.renderer)
    }

    /// Draw the current state.
    pub fn render(&mut self) -> Result<(), R::Error> {
        self.game.snapshot_into(&mut self.snapshot);
        self.renderer.render(&self.snapshot)
    }

    /// Apply one command, keep the timer in step with the game, and render
    /// if anything changed. Returns whether the state changed.
    ///
    /// Input that arrives before the first start is dropped here instead of
    /// reaching the game.
    pub fn handle(&mut self, command: Command) -> Result<bool, R::Error> {
        if self.game.phase() == Phase::Idle && command != Command::Start {
            debug!(command = command.as_str(), "ignored before start");
            return Ok(false);
        }

        let interval_before = self.game.drop_interval_ms();
        let changed = self.game.apply(command);
        if !changed {
            return Ok(false);
        }

        if let Some(event) = self.game.take_last_event() {
            debug!(
                kind = event.kind.as_str(),
                lines = event.lines_cleared,
                points = event.total_points(),
                game_over = event.game_over,
                "piece locked"
            );
            self.last_lock = Some(event);
        }
        self.sync_timer(command, interval_before);
        self.render()?;
        Ok(true)
    }

    fn sync_timer(&mut self, command: Command, interval_before: u32) {
        match self.game.phase() {
            Phase::GameOver => {
                if self.timer.is_armed() {
                    self.timer.cancel();
                }
                info!(
                    score = self.game.score(),
                    lines = self.game.lines(),
                    "game over, drop timer stopped"
                );
            }
            Phase::Running if self.auto_drop => {
                let interval = self.game.drop_interval_ms();
                if command == Command::Start {
                    info!(interval_ms = interval, "game started");
                    self.timer.restart(Duration::from_millis(interval as u64));
                } else if interval != interval_before {
                    info!(from = interval_before, to = interval, "drop timer rescheduled");
                    self.timer.restart(Duration::from_millis(interval as u64));
                }
            }
            Phase::Running if command == Command::Start => {
                info!("game started");
            }
            _ => {}
        }
    }

    /// Process commands and timer ticks until the command channel closes.
    ///
    /// Renders once up front so the idle screen is visible before any input.
    pub async fn run(&mut self, mut commands: mpsc::Receiver<Command>) -> Result<(), R::Error> {
        self.render()?;

        loop {
            tokio::select! {
                biased;

                command = commands.recv() => match command {
                    Some(command) => {
                        self.handle(command)?;
                    }
                    None => break,
                },
                _ = self.timer.wait() => {
                    self.handle(Command::Tick)?;
                }
            }
        }

        self.timer.cancel();
        info!(score = self.game.score(), "command channel closed, driver stopped");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blockfall_core::{BoardSize, GameConfig, SequencePieces, SpeedUp};
    use blockfall_types::PieceKind;

    fn driver(config: GameConfig) -> Driver<Vec<GameSnapshot>, SequencePieces> {
        let game = GameState::with_source(config, SequencePieces::repeat(PieceKind::O));
        Driver::new(game, Vec::new())
    }

    /// Two rows: the first O locks on its first tick and the next one is blocked.
    fn doomed() -> GameConfig {
        GameConfig {
            size: BoardSize { rows: 2, cols: 4 },
            ..GameConfig::default()
        }
    }

    #[tokio::test]
    async fn input_before_start_is_dropped() {
        let mut driver = driver(GameConfig::default());
        assert!(!driver.handle(Command::MoveLeft).unwrap());
        assert!(!driver.handle(Command::Tick).unwrap());
        assert!(driver.renderer().is_empty());
        assert!(!driver.timer().is_armed());
    }

    #[tokio::test]
    async fn start_arms_timer_with_configured_period() {
        let mut driver = driver(GameConfig::default());
        assert!(driver.handle(Command::Start).unwrap());
        assert_eq!(driver.timer().period(), Some(Duration::from_millis(500)));
        assert_eq!(driver.renderer().len(), 1);

        // A second Start while running neither renders nor re-arms.
        assert!(!driver.handle(Command::Start).unwrap());
        assert_eq!(driver.renderer().len(), 1);
    }

    #[tokio::test]
    async fn game_over_disarms_timer() {
        let mut driver = driver(doomed());
        driver.handle(Command::Start).unwrap();
        assert!(driver.handle(Command::SoftDrop).unwrap());
        assert!(driver.game().is_game_over());
        assert!(!driver.timer().is_armed());
        assert!(driver.renderer().last().unwrap().game_over);
    }

    #[tokio::test]
    async fn lock_events_are_taken_from_the_game() {
        let mut driver = driver(GameConfig::default());
        driver.handle(Command::Start).unwrap();
        driver.handle(Command::MoveLeft).unwrap();
        assert_eq!(driver.last_lock(), None);

        assert!(driver.handle(Command::HardDrop).unwrap());
        let event = driver.last_lock().unwrap();
        assert_eq!(event.kind, PieceKind::O);
        assert_eq!(event.drop_bonus, 18);
        assert!(!event.game_over);
        assert_eq!(driver.game().clone().take_last_event(), None);
    }

    #[tokio::test]
    async fn manual_ticks_never_arm() {
        let game = GameState::with_source(GameConfig::default(), SequencePieces::repeat(PieceKind::T));
        let mut driver = Driver::new(game, Vec::new()).manual_ticks();
        driver.handle(Command::Start).unwrap();
        assert!(!driver.timer().is_armed());
        assert!(driver.handle(Command::Tick).unwrap());
        assert_eq!(driver.game().active().unwrap().row, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn run_ticks_on_period_until_channel_closes() {
        let mut driver = driver(GameConfig::default());
        let (tx, rx) = mpsc::channel(8);

        let script = async move {
            tx.send(Command::Start).await.unwrap();
            tokio::time::sleep(Duration::from_millis(1250)).await;
        };
        let (result, ()) = tokio::join!(driver.run(rx), script);
        result.unwrap();

        // idle frame, start, ticks at 500 and 1000
        assert_eq!(driver.renderer().len(), 4);
        assert_eq!(driver.game().active().unwrap().row, 2);
        assert!(!driver.timer().is_armed());
    }

    #[tokio::test(start_paused = true)]
    async fn no_ticks_after_game_over_until_restart() {
        let mut driver = driver(doomed());
        let (tx, rx) = mpsc::channel(8);

        let script = async move {
            tx.send(Command::Start).await.unwrap();
            // Tick at 500 locks the first O and the respawn is blocked.
            tokio::time::sleep(Duration::from_millis(5000)).await;
        };
        let (result, ()) = tokio::join!(driver.run(rx), script);
        result.unwrap();

        let frames = driver.renderer();
        assert_eq!(frames.len(), 3);
        assert!(frames[2].game_over);
        assert_eq!(driver.game().phase(), Phase::GameOver);
    }

    #[tokio::test(start_paused = true)]
    async fn restart_schedules_a_fresh_timer() {
        let mut driver = driver(doomed());
        let (tx, rx) = mpsc::channel(8);

        let script = async move {
            tx.send(Command::Start).await.unwrap();
            tokio::time::sleep(Duration::from_millis(700)).await;
            tx.send(Command::Start).await.unwrap();
            // First tick of the new game is due at 1200, not 1000.
            tokio::time::sleep(Duration::from_millis(450)).await;
        };
        let (result, ()) = tokio::join!(driver.run(rx), script);
        result.unwrap();

        // idle, start, game over at 500, restart at 700
        assert_eq!(driver.renderer().len(), 4);
        assert!(driver.game().is_running());
    }

    #[tokio::test(start_paused = true)]
    async fn speed_up_reschedules_timer() {
        // Two columns: every O fills two rows and clears them.
        let config = GameConfig {
            size: BoardSize { rows: 4, cols: 2 },
            speed_up: Some(SpeedUp::default()),
            ..GameConfig::default()
        };
        let mut driver = driver(config);
        let (tx, rx) = mpsc::channel(8);

        let script = async move {
            tx.send(Command::Start).await.unwrap();
            // Ticks at 500, 1000, 1500 (lock, 2 lines, interval 460), then 1960.
            tokio::time::sleep(Duration::from_millis(1970)).await;
        };
        let (result, ()) = tokio::join!(driver.run(rx), script);
        result.unwrap();

        assert_eq!(driver.game().lines(), 2);
        assert_eq!(driver.game().drop_interval_ms(), 460);
        assert_eq!(driver.renderer().len(), 6);
        assert_eq!(driver.game().active().unwrap().row, 1);
    }
}
