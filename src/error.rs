use std::path::PathBuf;

use crate::state::GameStatus;

/// Errors raised by the game core.
///
/// Every variant is a contract violation by the caller. A wrong guess is not
/// an error; it just stops the current attempt.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("bridge length must be between 3 and 20, got {0}")]
    InvalidLength(usize),

    #[error("invalid lane marker {0:?}, expected \"U\" or \"D\"")]
    InvalidLane(String),

    #[error("invalid lane number {0}, expected 0 or 1")]
    InvalidLaneNumber(u8),

    #[error("cannot {action} while {status}: {reason}")]
    IllegalState {
        action: &'static str,
        status: GameStatus,
        reason: &'static str,
    },
}

impl GameError {
    /// Bad input handed to the core (bridge length or markers).
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidLength(_) | Self::InvalidLane(_) | Self::InvalidLaneNumber(_)
        )
    }

    /// An operation called in a status that does not allow it.
    pub fn is_illegal_state(&self) -> bool {
        matches!(self, Self::IllegalState { .. })
    }
}

/// Errors that can occur while reading player input.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("bridge length must be a number between 3 and 20")]
    InvalidSize(String),

    #[error("move must be U (up) or D (down)")]
    InvalidMove(String),

    #[error("answer must be Y (retry) or N (quit)")]
    InvalidRetry(String),

    #[error("input closed before the game ended")]
    Closed,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl InputError {
    /// Whether the player can simply be asked again.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::InvalidSize(_) | Self::InvalidMove(_) | Self::InvalidRetry(_)
        )
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

/// Errors that end a play session early.
#[derive(Debug, thiserror::Error)]
pub enum PlayError {
    #[error("game error: {0}")]
    Game(#[from] GameError),

    #[error("input error: {0}")]
    Input(#[from] InputError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_game_error_display() {
        assert_eq!(
            GameError::InvalidLength(21).to_string(),
            "bridge length must be between 3 and 20, got 21"
        );
        let err = GameError::IllegalState {
            action: "retry",
            status: GameStatus::Running,
            reason: "only a stopped game can be retried",
        };
        assert_eq!(
            err.to_string(),
            "cannot retry while running: only a stopped game can be retried"
        );
    }

    #[test]
    fn test_game_error_taxonomy() {
        assert!(GameError::InvalidLength(2).is_validation());
        assert!(GameError::InvalidLane("X".into()).is_validation());
        assert!(!GameError::InvalidLength(2).is_illegal_state());

        let err = GameError::IllegalState {
            action: "move",
            status: GameStatus::Finished,
            reason: "game is not running",
        };
        assert!(err.is_illegal_state());
        assert!(!err.is_validation());
    }

    #[test]
    fn test_input_error_recoverable() {
        assert!(InputError::InvalidMove("X".into()).is_recoverable());
        assert!(!InputError::Closed.is_recoverable());
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("log_level must not be empty".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: log_level must not be empty"
        );
    }
}
