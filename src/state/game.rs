//! Bridge game state machine.
//!
//! # State Diagram
//!
//! ```text
//! ┌─────────────┐  start   ┌──────────┐  move (miss)   ┌──────────┐
//! │ NotStarted  │─────────▶│ Running  │───────────────▶│ Stopped  │
//! └─────────────┘          └────┬─────┘                └────┬─────┘
//!                               │   ▲         retry         │
//!                               │   └───────────────────────┤
//!            move (last stone)  │                           │ quit
//!            or quit            ▼                           │
//!                          ┌──────────┐                     │
//!                          │ Finished │◀────────────────────┘
//!                          └──────────┘
//! ```
//!
//! A move that completes the bridge quits on its own: subscribers of the
//! quit channel hear about it, the move channel does not.

use crate::error::GameError;

use super::events::{MoveEvents, QuitEvents};
use super::lane::{validate_length, Lane};
use super::model::{GameMapStatus, GameResult, GameStatus};

/// A single play session over one bridge.
#[derive(Debug)]
pub struct BridgeGame {
    move_events: MoveEvents,
    quit_events: QuitEvents,

    /// Safe lanes, fixed by the first start
    bridge: Vec<Lane>,

    /// Lanes chosen during the current attempt
    path: Vec<Lane>,

    status: GameStatus,

    /// Starts plus retries
    attempts: u32,
}

impl BridgeGame {
    /// Create a game wired to its notification channels.
    pub fn new(move_events: MoveEvents, quit_events: QuitEvents) -> Self {
        Self {
            move_events,
            quit_events,
            bridge: Vec::new(),
            path: Vec::new(),
            status: GameStatus::NotStarted,
            attempts: 0,
        }
    }

    /// Current status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Start the first attempt on `bridge`. Allowed once per game.
    pub fn start(&mut self, bridge: Vec<Lane>) -> Result<(), GameError> {
        if self.status != GameStatus::NotStarted {
            return Err(self.illegal("start", "game can only be started once"));
        }
        validate_length(bridge.len())?;

        self.bridge = bridge;
        self.path.clear();
        self.status = GameStatus::Running;
        self.attempts += 1;

        tracing::info!(length = self.bridge.len(), "game started");
        Ok(())
    }

    /// Step into `lane` at the next position.
    ///
    /// A miss stops the attempt. Completing the bridge quits the game.
    pub fn move_to(&mut self, lane: Lane) -> Result<(), GameError> {
        if !self.running() {
            return Err(self.illegal("move", "game is not running"));
        }

        self.path.push(lane);
        let position = self.path.len() - 1;
        let correct = self.bridge[position] == lane;
        tracing::debug!(position, lane = %lane, correct, "move");

        if self.is_crossed() {
            return self.quit();
        }

        self.move_events.notify(&self.snapshot());
        if !correct {
            self.status = GameStatus::Stopped;
            tracing::debug!(attempts = self.attempts, "attempt stopped");
        }
        Ok(())
    }

    /// Check if the current path crosses the whole bridge.
    pub fn succeeded(&self) -> Result<bool, GameError> {
        if self.status == GameStatus::NotStarted {
            return Err(self.illegal("check success", "game has not started"));
        }
        Ok(self.is_crossed())
    }

    /// Check if the game accepts moves.
    pub fn running(&self) -> bool {
        self.status.is_active()
    }

    /// Check if the current attempt ended on a miss.
    pub fn failed(&self) -> bool {
        self.status == GameStatus::Stopped
    }

    /// End the game and publish the result.
    ///
    /// Each call notifies the quit channel again; call it once per game.
    pub fn quit(&mut self) -> Result<(), GameError> {
        let succeeded = self.succeeded()?;
        let result = GameResult::new(succeeded, self.attempts);

        self.quit_events.notify(&self.snapshot(), &result);
        self.status = GameStatus::Finished;

        tracing::info!(succeeded, attempts = self.attempts, "game finished");
        Ok(())
    }

    /// Begin a new attempt on the same bridge after a miss.
    pub fn retry(&mut self) -> Result<(), GameError> {
        if self.status != GameStatus::Stopped {
            return Err(self.illegal("retry", "only a stopped game can be retried"));
        }

        self.path.clear();
        self.status = GameStatus::Running;
        self.attempts += 1;

        tracing::info!(attempts = self.attempts, "retrying");
        Ok(())
    }

    fn is_crossed(&self) -> bool {
        self.path == self.bridge
    }

    fn snapshot(&self) -> GameMapStatus {
        GameMapStatus::new(self.bridge.clone(), self.path.clone())
    }

    fn illegal(&self, action: &'static str, reason: &'static str) -> GameError {
        GameError::IllegalState {
            action,
            status: self.status,
            reason,
        }
    }
}
