use serde::{Deserialize, Serialize};

use super::player::Player;
use crate::error::ConfigError;

/// What happens when the player to move makes an illegal move on a board that
/// still has room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IllegalMovePolicy {
    /// The game ends with `IllegalMove(player)`.
    #[default]
    Terminate,
    /// The game goes on and the same player is still to move.
    Penalize,
}

/// What `step` does once the game has ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameOverPolicy {
    /// Return an `AlreadyOver` outcome and leave the session untouched.
    #[default]
    Sentinel,
    /// Return `StepError::GameOver`.
    Error,
}

/// Board shape, run length and rule policies for one session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub height: usize,
    pub width: usize,
    pub connect: usize,
    pub first_player: Player,
    pub on_illegal_move: IllegalMovePolicy,
    pub after_game_over: GameOverPolicy,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            height: 6,
            width: 7,
            connect: 4,
            first_player: Player::One,
            on_illegal_move: IllegalMovePolicy::default(),
            after_game_over: GameOverPolicy::default(),
        }
    }
}

impl GameConfig {
    /// Standard board shape with default policies.
    pub fn new(height: usize, width: usize, connect: usize) -> Self {
        GameConfig {
            height,
            width,
            connect,
            ..Default::default()
        }
    }

    pub fn with_illegal_move_policy(mut self, policy: IllegalMovePolicy) -> Self {
        self.on_illegal_move = policy;
        self
    }

    pub fn with_game_over_policy(mut self, policy: GameOverPolicy) -> Self {
        self.after_game_over = policy;
        self
    }

    pub fn with_first_player(mut self, player: Player) -> Self {
        self.first_player = player;
        self
    }

    /// Validate the board shape and run length.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.height == 0 {
            return Err(ConfigError::Validation("game.height must be > 0".into()));
        }
        if self.width == 0 {
            return Err(ConfigError::Validation("game.width must be > 0".into()));
        }
        if self.connect < 2 {
            return Err(ConfigError::Validation("game.connect must be >= 2".into()));
        }
        if self.connect > self.height.max(self.width) {
            return Err(ConfigError::Validation(
                "game.connect must be <= max(game.height, game.width)".into(),
            ));
        }
        Ok(())
    }
}
