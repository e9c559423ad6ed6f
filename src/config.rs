use std::path::Path;

use crate::env::{EnvConfig, RewardScheme};
use crate::error::ConfigError;
use crate::game::GameConfig;
use crate::simulation::SimulationConfig;

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub game: GameConfig,
    pub rewards: RewardScheme,
    pub env: EnvConfig,
    pub simulation: SimulationConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            log::warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.game.validate()?;

        for (name, value) in self.rewards.values() {
            if !value.is_finite() {
                return Err(ConfigError::Validation(format!(
                    "rewards.{name} must be finite"
                )));
            }
        }

        self.simulation.validate()
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::ObservationEncoding;
    use crate::game::{GameOverPolicy, IllegalMovePolicy, Player};
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        config.validate().expect("default config should be valid");
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let toml_str = r#"
[game]
connect = 3
on_illegal_move = "penalize"
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.game.connect, 3);
        assert_eq!(config.game.on_illegal_move, IllegalMovePolicy::Penalize);
        // Other fields should be defaults
        assert_eq!(config.game.height, 6);
        assert_eq!(config.game.after_game_over, GameOverPolicy::Sentinel);
        assert!((config.rewards.win - 100.0).abs() < 1e-6);
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_player_and_encoding_parse() {
        let toml_str = r#"
[game]
first_player = 2

[env]
observation = "signed_plane"
verbose = true
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.game.first_player, Player::Two);
        assert_eq!(config.env.observation, ObservationEncoding::SignedPlane);
        assert!(config.env.verbose);
    }

    #[test]
    fn test_invalid_player_rejected() {
        let toml_str = "[game]\nfirst_player = 3\n";
        assert!(toml::from_str::<AppConfig>(toml_str).is_err());
    }

    #[test]
    fn test_validation_rejects_long_connect() {
        let mut config = AppConfig::default();
        config.game.connect = 8;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_non_finite_reward() {
        let mut config = AppConfig::default();
        config.rewards.draw = f32::NAN;
        let err = config.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "config validation error: rewards.draw must be finite"
        );
    }

    #[test]
    fn test_validation_rejects_zero_games() {
        let mut config = AppConfig::default();
        config.simulation.num_games = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_zero_threads() {
        let mut config = AppConfig::default();
        config.simulation.num_threads = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = AppConfig::load_or_default(Path::new("nonexistent_config.toml")).unwrap();
        assert_eq!(config.game.width, 7);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test_config.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            r#"
[game]
height = 5
width = 5
connect = 3
"#
        )
        .unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!((config.game.height, config.game.width), (5, 5));
        // Others are defaults
        assert_eq!(config.simulation.num_games, 1000);
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[game]\nconnect = 1\n").unwrap();
        assert!(matches!(
            AppConfig::load(&path),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_default_toml_roundtrips() {
        let toml_str = AppConfig::default_toml();
        let config: AppConfig = toml::from_str(&toml_str).unwrap();
        config.validate().expect("roundtripped config should be valid");
        assert_eq!(config, AppConfig::default());
    }
}
