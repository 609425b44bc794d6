//! Core game state.
//!
//! This module provides the game types and the state machine:
//!
//! - `lane` - Lane markers and bridge length rules
//! - `model` - Status enum and the snapshots handed to subscribers
//! - `events` - Move and quit notification channels
//! - `game` - The [`BridgeGame`] state machine
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                         BridgeGame                           │
//! │                                                              │
//! │   bridge: [U, D, U, ...]      path: [U, D]     attempts: 2   │
//! │                                                              │
//! │   move_to ──▶ MoveEvents ──▶ subscriber, subscriber, ...     │
//! │   quit    ──▶ QuitEvents ──▶ subscriber, subscriber, ...     │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust
//! use bridge_crossing::state::{parse_bridge, BridgeGame, Lane, MoveEvents, QuitEvents};
//!
//! let mut game = BridgeGame::new(MoveEvents::new(), QuitEvents::new());
//! game.start(parse_bridge("UDU")?)?;
//!
//! game.move_to(Lane::Down)?;
//! assert!(game.failed());
//!
//! game.retry()?;
//! assert!(game.running());
//! # Ok::<(), bridge_crossing::state::GameError>(())
//! ```

pub mod events;
pub mod game;
pub mod lane;
pub mod model;

// Re-export commonly used types
pub use crate::error::GameError;
pub use events::{MoveEvents, MoveListener, QuitEvents, QuitListener};
pub use game::BridgeGame;
pub use lane::{
    lanes_to_string, parse_bridge, validate_length, Lane, MAX_BRIDGE_LENGTH, MIN_BRIDGE_LENGTH,
};
pub use model::{GameMapStatus, GameResult, GameStatus, StepResult};
