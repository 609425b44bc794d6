//! Value types shared between the game and its subscribers.

use std::fmt;

use serde::Serialize;

use super::lane::{lanes_to_string, Lane};

/// Game state machine states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    /// Created, no bridge yet
    #[default]
    NotStarted,
    /// Accepting moves
    Running,
    /// Last move missed the safe stone
    Stopped,
    /// Game over, no further moves or retries
    Finished,
}

impl GameStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotStarted => "not_started",
            Self::Running => "running",
            Self::Stopped => "stopped",
            Self::Finished => "finished",
        }
    }

    /// Check if the game accepts moves.
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Running)
    }

    /// Check if the game is over for good.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Finished)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of one step on the user's path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepResult {
    /// Lane the player stepped into
    pub lane: Lane,
    /// Whether that lane held the safe stone
    pub correct: bool,
}

/// Snapshot of the bridge and the user's path at notification time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameMapStatus {
    pub bridge: Vec<Lane>,
    pub path: Vec<Lane>,
}

impl GameMapStatus {
    pub fn new(bridge: Vec<Lane>, path: Vec<Lane>) -> Self {
        Self { bridge, path }
    }

    /// Per-position results for every step taken so far.
    pub fn step_results(&self) -> Vec<StepResult> {
        self.path
            .iter()
            .zip(&self.bridge)
            .map(|(&lane, &safe)| StepResult {
                lane,
                correct: lane == safe,
            })
            .collect()
    }

    /// Check if the path crosses the whole bridge without a miss.
    pub fn is_complete(&self) -> bool {
        self.path == self.bridge
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "bridge": lanes_to_string(&self.bridge),
            "path": lanes_to_string(&self.path),
            "crossed": self.step_results().iter().filter(|s| s.correct).count(),
            "length": self.bridge.len()
        })
    }
}

/// Final result, produced once per quit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GameResult {
    pub succeeded: bool,
    /// Number of attempts, counting the first start
    pub attempts: u32,
}

impl GameResult {
    pub fn new(succeeded: bool, attempts: u32) -> Self {
        Self {
            succeeded,
            attempts,
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "succeeded": self.succeeded,
            "attempts": self.attempts
        })
    }
}
