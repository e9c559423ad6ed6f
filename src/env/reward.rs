use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::game::{Outcome, Player, StepEvent};

/// Numeric rewards attached to step outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RewardScheme {
    pub win: f32,
    pub loss: f32,
    pub draw: f32,
    pub play: f32,
    pub wrong_turn: f32,
    pub illegal_move: f32,
    pub game_over: f32,
}

impl Default for RewardScheme {
    fn default() -> Self {
        RewardScheme {
            win: 100.0,
            loss: -100.0,
            draw: 0.0,
            play: -1.0,
            wrong_turn: -10.0,
            illegal_move: -100.0,
            game_over: 0.0,
        }
    }
}

impl RewardScheme {
    /// Per-player rewards for one step. A win also charges the opponent a
    /// loss and a draw rewards both players; everything else only concerns
    /// the player who stepped.
    pub fn rewards(&self, outcome: &Outcome) -> BTreeMap<Player, f32> {
        let player = outcome.player;
        match outcome.event {
            StepEvent::Won { .. } => BTreeMap::from([(player, self.win), (player.other(), self.loss)]),
            StepEvent::Drawn { .. } => BTreeMap::from([(player, self.draw), (player.other(), self.draw)]),
            StepEvent::Placed { .. } => BTreeMap::from([(player, self.play)]),
            StepEvent::Rejected { .. } => BTreeMap::from([(player, self.illegal_move)]),
            StepEvent::WrongTurn { .. } => BTreeMap::from([(player, self.wrong_turn)]),
            StepEvent::AlreadyOver => BTreeMap::from([(player, self.game_over)]),
        }
    }

    pub(crate) fn values(&self) -> [(&'static str, f32); 7] {
        [
            ("win", self.win),
            ("loss", self.loss),
            ("draw", self.draw),
            ("play", self.play),
            ("wrong_turn", self.wrong_turn),
            ("illegal_move", self.illegal_move),
            ("game_over", self.game_over),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{GameConfig, GameSession};

    fn play(columns: &[i64]) -> Outcome {
        let mut session = GameSession::new(GameConfig::default()).unwrap();
        let mut last = None;
        for &col in columns {
            let player = session.current_player();
            last = Some(session.step(player, col).unwrap());
        }
        last.unwrap()
    }

    #[test]
    fn test_win_rewards_both_players() {
        let rewards = RewardScheme::default().rewards(&play(&[0, 1, 0, 1, 0, 1, 0]));
        assert_eq!(rewards[&Player::One], 100.0);
        assert_eq!(rewards[&Player::Two], -100.0);
    }

    #[test]
    fn test_play_rewards_mover_only() {
        let rewards = RewardScheme::default().rewards(&play(&[3]));
        assert_eq!(rewards.len(), 1);
        assert_eq!(rewards[&Player::One], -1.0);
    }

    #[test]
    fn test_illegal_and_wrong_turn() {
        let scheme = RewardScheme::default();
        let rewards = scheme.rewards(&play(&[9]));
        assert_eq!(rewards[&Player::One], -100.0);

        let mut session = GameSession::new(GameConfig::default()).unwrap();
        let outcome = session.step(Player::Two, 0).unwrap();
        assert_eq!(scheme.rewards(&outcome), BTreeMap::from([(Player::Two, -10.0)]));
    }

    #[test]
    fn test_custom_scheme() {
        let scheme = RewardScheme {
            win: 1.0,
            loss: -1.0,
            play: 0.0,
            ..Default::default()
        };
        let rewards = scheme.rewards(&play(&[0, 1, 0, 1, 0, 1, 0]));
        assert_eq!(rewards[&Player::One], 1.0);
        assert_eq!(rewards[&Player::Two], -1.0);
    }
}
