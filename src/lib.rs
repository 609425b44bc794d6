//! Bridge Crossing Library
//!
//! This crate provides the game logic and console front end for the bridge
//! crossing game: a player crosses a bridge of stepping stones by guessing,
//! one stone at a time, whether the safe stone is in the up or the down lane.
//!
//! # Overview
//!
//! - **Game State Machine** - [`BridgeGame`] tracks the bridge, the player's
//!   path and the attempt counter, and validates every transition.
//!
//! - **Event Channels** - Move and quit notifications are delivered
//!   synchronously to subscribers registered when the game is built.
//!
//! - **Bridge Maker** - Builds a bridge from any source of 0/1 values.
//!
//! - **Views** - Console input prompts plus text and JSON renderers that
//!   subscribe to the event channels.
//!
//! # Design Principles
//!
//! 1. **State machines validate transitions** - Out-of-order calls are
//!    rejected with [`GameError`] instead of being ignored.
//!
//! 2. **Wrong moves are not errors** - A mismatching guess is an ordinary
//!    transition from running to stopped.
//!
//! 3. **No I/O in the core** - The `state` module never touches a terminal.
//!
//! # Example
//!
//! ```rust
//! use bridge_crossing::state::{
//!     BridgeGame, GameMapStatus, GameResult, Lane, MoveEvents, QuitEvents,
//! };
//!
//! let mut quit_events = QuitEvents::new();
//! quit_events.subscribe(|_: &GameMapStatus, result: &GameResult| {
//!     assert!(result.succeeded);
//! });
//!
//! let mut game = BridgeGame::new(MoveEvents::new(), quit_events);
//! game.start(vec![Lane::Up, Lane::Down, Lane::Up]).unwrap();
//!
//! game.move_to(Lane::Up).unwrap();
//! game.move_to(Lane::Down).unwrap();
//! game.move_to(Lane::Up).unwrap();
//!
//! assert!(game.succeeded().unwrap());
//! assert!(!game.running());
//! ```

pub mod app;
pub mod config;
pub mod error;
pub mod maker;
pub mod state;
pub mod view;

// Re-export everything from state module at crate root
pub use state::*;

pub use app::play;
pub use config::{AppConfig, OutputFormat};
pub use error::{ConfigError, InputError, PlayError};
pub use maker::{BridgeMaker, NumberGenerator, RandomNumberGenerator};
