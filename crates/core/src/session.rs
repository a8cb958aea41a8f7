//! Session module - the control loop as an explicit state machine
//!
//! A session owns the engine, the gravity timer and the [`LoopState`]. The
//! terminal driver polls one input per iteration and hands it to
//! [`Session::step`] together with the current monotonic time; everything
//! that decides what happens next lives here and is testable without a
//! terminal.
//!
//! | From     | Event        | To       |
//! |----------|--------------|----------|
//! | Running  | pause toggle | Paused   |
//! | Paused   | pause toggle | Running  |
//! | Running  | spawn blocked| GameOver |
//! | Running  | quit         | Exited   |
//! | Paused   | quit         | Exited   |
//! | GameOver | acknowledge  | Exited   |

use std::time::{Duration, Instant};

use tracing::{debug, info, trace};

use crate::game_state::GameState;
use crate::gravity::GravityTimer;
use crate::rng::{RandomSource, ShapeSource};
use crate::snapshot::GameSnapshot;
use crate::types::GameAction;

/// Where the loop is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoopState {
    Running,
    Paused,
    GameOver,
    Exited,
}

/// Events that move the loop between states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopEvent {
    TogglePause,
    Quit,
    SpawnBlocked,
    /// Any key pressed on the game-over screen.
    Acknowledge,
}

impl LoopState {
    /// Transition table. Pairs not listed keep the current state.
    pub fn on(self, event: LoopEvent) -> LoopState {
        use LoopEvent::*;
        use LoopState::*;

        match (self, event) {
            (Running, TogglePause) => Paused,
            (Paused, TogglePause) => Running,
            (Running, SpawnBlocked) => GameOver,
            (Running | Paused, Quit) => Exited,
            (GameOver, Acknowledge) => Exited,
            (state, _) => state,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LoopState::Running => "running",
            LoopState::Paused => "paused",
            LoopState::GameOver => "game_over",
            LoopState::Exited => "exited",
        }
    }
}

/// One game session: engine + gravity + loop state.
#[derive(Debug, Clone)]
pub struct Session<S = RandomSource> {
    game: GameState<S>,
    gravity: GravityTimer,
    state: LoopState,
}

impl<S: ShapeSource> Session<S> {
    pub fn new(game: GameState<S>, delay: Duration, now: Instant) -> Self {
        let state = if game.is_over() {
            LoopState::GameOver
        } else {
            LoopState::Running
        };
        info!(delay_ms = delay.as_millis() as u64, "session started");
        Self {
            game,
            gravity: GravityTimer::new(delay, now),
            state,
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn game(&self) -> &GameState<S> {
        &self.game
    }

    pub fn delay(&self) -> Duration {
        self.gravity.delay()
    }

    /// Run one loop iteration: apply at most one action, then gravity.
    pub fn step(&mut self, action: Option<GameAction>, now: Instant) -> LoopState {
        if let Some(action) = action {
            self.apply(action);
        }

        if self.state == LoopState::Running && self.gravity.poll(now) {
            let step = self.game.gravity_step();
            trace!(?step, "gravity tick");
            self.check_game_over();
        }

        self.state
    }

    fn apply(&mut self, action: GameAction) {
        match self.state {
            LoopState::Exited => return,
            LoopState::GameOver => {
                self.transition(LoopEvent::Acknowledge);
                return;
            }
            LoopState::Running | LoopState::Paused => {}
        }

        match action {
            GameAction::Quit => self.transition(LoopEvent::Quit),
            GameAction::Pause => self.transition(LoopEvent::TogglePause),
            GameAction::SpeedUp => {
                self.gravity.speed_up();
                debug!(delay_ms = self.gravity.delay().as_millis() as u64, "speed up");
            }
            GameAction::SlowDown => {
                self.gravity.slow_down();
                debug!(delay_ms = self.gravity.delay().as_millis() as u64, "slow down");
            }
            _ if self.state == LoopState::Running => {
                self.game.apply_action(action);
                self.check_game_over();
            }
            // Piece actions while paused.
            _ => {}
        }
    }

    fn check_game_over(&mut self) {
        if self.game.is_over() {
            self.transition(LoopEvent::SpawnBlocked);
        }
    }

    fn transition(&mut self, event: LoopEvent) {
        let next = self.state.on(event);
        if next != self.state {
            info!(
                from = self.state.as_str(),
                to = next.as_str(),
                score = self.game.score(),
                lines = self.game.lines(),
                "loop state changed"
            );
            self.state = next;
        }
    }

    /// Everything the view needs, including the loop-owned fields.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.game.snapshot_into(out);
        out.paused = self.state == LoopState::Paused;
        out.delay_ms = self.gravity.delay().as_millis() as u64;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}
