use std::path::PathBuf;

use crate::game::Player;

/// Why the board refused a move. Rule violations, not faults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveRejected {
    #[error("column {column} is outside the board (width {width})")]
    OutOfRange { column: i64, width: usize },

    #[error("column {column} is full")]
    ColumnFull { column: usize },
}

/// Raised by the win detector when asked about a cell the player does not
/// occupy. Indicates an engine bug.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum WinError {
    #[error("cell ({row}, {col}) is not occupied by {player}")]
    InvalidPosition { row: usize, col: usize, player: Player },
}

/// Errors returned by `GameSession::step`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum StepError {
    #[error("the game is over; reset before playing again")]
    GameOver,

    #[error("win detection failed: {0}")]
    InvalidPosition(#[from] WinError),
}

/// Errors raised by the multi-agent environment wrapper.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EnvError {
    #[error("alternating game expects exactly one action per step, got {count}")]
    MalformedAction { count: usize },

    #[error(transparent)]
    Step(#[from] StepError),
}

/// Errors that can occur during batched simulation.
#[derive(Debug, thiserror::Error)]
pub enum SimulationError {
    #[error("invalid game configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("game step failed: {0}")]
    Step(#[from] StepError),

    #[error("simulation worker panicked")]
    WorkerPanicked,
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_rejected_display() {
        let err = MoveRejected::OutOfRange {
            column: -1,
            width: 7,
        };
        assert_eq!(err.to_string(), "column -1 is outside the board (width 7)");
        assert_eq!(
            MoveRejected::ColumnFull { column: 3 }.to_string(),
            "column 3 is full"
        );
    }

    #[test]
    fn test_step_error_from_win_error() {
        let err: StepError = WinError::InvalidPosition {
            row: 5,
            col: 0,
            player: Player::Two,
        }
        .into();
        assert_eq!(
            err.to_string(),
            "win detection failed: cell (5, 0) is not occupied by player 2"
        );
    }

    #[test]
    fn test_env_error_display() {
        let err = EnvError::MalformedAction { count: 2 };
        assert_eq!(
            err.to_string(),
            "alternating game expects exactly one action per step, got 2"
        );
        let err = EnvError::from(StepError::GameOver);
        assert_eq!(err.to_string(), "the game is over; reset before playing again");
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("game.connect must be >= 2".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: game.connect must be >= 2"
        );
    }
}
