//! Multi-agent environment layer over the game core: action validation,
//! observation encoding, reward shaping and text rendering.

pub mod observation;
pub mod render;
pub mod reward;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::config::AppConfig;
use crate::error::{ConfigError, EnvError};
use crate::game::{GameConfig, GameSession, Outcome, Player, StepEvent};
pub use observation::{Observation, ObservationData, ObservationEncoding};
pub use render::{BoardDisplay, RenderStyle};
pub use reward::RewardScheme;

/// Environment presentation options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvConfig {
    pub observation: ObservationEncoding,
    pub render_style: RenderStyle,
    /// Log every step at debug level.
    pub verbose: bool,
    /// Log the final board on reset.
    pub visualization: bool,
}

/// Everything one `ConnectEnv::step` hands back.
#[derive(Debug, Clone)]
pub struct EnvStep {
    /// Observation for whoever acts next. Empty once the game was already over.
    pub observations: BTreeMap<Player, Observation>,
    pub rewards: BTreeMap<Player, f32>,
    pub done: bool,
    pub outcome: Outcome,
}

impl EnvStep {
    pub fn info(&self) -> String {
        self.outcome.diagnostic()
    }
}

/// Alternating two-player environment: one action per step.
#[derive(Debug, Clone)]
pub struct ConnectEnv {
    session: GameSession,
    rewards: RewardScheme,
    config: EnvConfig,
}

impl ConnectEnv {
    pub fn new(game: GameConfig, rewards: RewardScheme, config: EnvConfig) -> Result<Self, ConfigError> {
        Ok(ConnectEnv {
            session: GameSession::new(game)?,
            rewards,
            config,
        })
    }

    pub fn from_app_config(app: &AppConfig) -> Result<Self, ConfigError> {
        Self::new(app.game, app.rewards, app.env)
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn config(&self) -> &EnvConfig {
        &self.config
    }

    /// Encode the current board
    pub fn observation(&self) -> Observation {
        observation::encode(self.session.board(), self.config.observation)
    }

    /// Render the current board as text
    pub fn render(&self) -> String {
        render::render(self.session.board(), self.config.render_style)
    }

    /// Restart the game and return the initial observation for both players.
    pub fn reset(&mut self) -> BTreeMap<Player, Observation> {
        if self.config.visualization {
            log::info!("board before reset:\n{}", self.render());
        }
        self.session.reset();
        let obs = self.observation();
        Player::BOTH.into_iter().map(|p| (p, obs.clone())).collect()
    }

    /// Apply exactly one `(player, column)` action.
    pub fn step(&mut self, actions: &BTreeMap<Player, i64>) -> Result<EnvStep, EnvError> {
        let mut iter = actions.iter();
        let (Some((&player, &column)), None) = (iter.next(), iter.next()) else {
            return Err(EnvError::MalformedAction {
                count: actions.len(),
            });
        };
        self.step_one(player, column)
    }

    /// Apply a single action without packaging it in a map first.
    pub fn step_one(&mut self, player: Player, column: i64) -> Result<EnvStep, EnvError> {
        let outcome = self.session.step(player, column)?;
        let rewards = self.rewards.rewards(&outcome);

        let mut observations = BTreeMap::new();
        if outcome.event != StepEvent::AlreadyOver {
            let observer = if outcome.terminated() {
                player.other()
            } else {
                self.session.current_player()
            };
            observations.insert(observer, self.observation());
        }

        if self.config.verbose {
            log::debug!(
                "step {} action: ({}, {}), rewards: {:?} # {}",
                outcome.step,
                player.number(),
                column,
                rewards,
                outcome.diagnostic()
            );
        }

        Ok(EnvStep {
            observations,
            rewards,
            done: outcome.terminated(),
            outcome,
        })
    }
}
