use std::path::Path;

use log::warn;

use crate::core::WORD_LENGTH;
use crate::error::ConfigError;

/// Game rules and effect timings, loadable from TOML.
///
/// ```toml
/// max_attempts = 6
/// reveal_interval_ms = 500
/// settle_margin_ms = 100
/// notification_ttl_ms = 2500
/// shake_ms = 400
/// ```
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Guesses allowed before the game is lost.
    pub max_attempts: usize,
    /// Time for one tile of a submitted row to reveal.
    pub reveal_interval_ms: u64,
    /// Extra wait after the last tile before the outcome is applied.
    pub settle_margin_ms: u64,
    /// Lifetime of a notification.
    pub notification_ttl_ms: u64,
    /// How long the input row shakes after a rejected guess.
    pub shake_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            max_attempts: 6,
            reveal_interval_ms: 500,
            settle_margin_ms: 100,
            notification_ttl_ms: 2500,
            shake_ms: 400,
        }
    }
}

impl GameConfig {
    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file can't be read, isn't valid TOML, or fails
    /// validation.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: GameConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but can't be loaded.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` naming the first bad field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_attempts == 0 {
            return Err(ConfigError::Validation("max_attempts must be > 0".into()));
        }
        if self.reveal_interval_ms == 0 {
            return Err(ConfigError::Validation(
                "reveal_interval_ms must be > 0".into(),
            ));
        }
        if self.notification_ttl_ms == 0 {
            return Err(ConfigError::Validation(
                "notification_ttl_ms must be > 0".into(),
            ));
        }
        Ok(())
    }

    /// Time for a whole row to reveal, one tile after another.
    #[must_use]
    pub fn reveal_duration_ms(&self) -> u64 {
        WORD_LENGTH as u64 * self.reveal_interval_ms
    }

    /// Delay between accepting a guess and applying a win or loss.
    #[must_use]
    pub fn finalize_delay_ms(&self) -> u64 {
        self.reveal_duration_ms() + self.settle_margin_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.max_attempts, 6);
    }

    #[test]
    fn test_default_delays() {
        let config = GameConfig::default();
        assert_eq!(config.reveal_duration_ms(), 2000);
        assert_eq!(config.finalize_delay_ms(), 2100);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: GameConfig = toml::from_str("max_attempts = 8").unwrap();
        assert_eq!(config.max_attempts, 8);
        assert_eq!(config.reveal_interval_ms, 500);
        assert_eq!(config.shake_ms, 400);
    }

    #[test]
    fn test_validation_rejects_zero_attempts() {
        let config = GameConfig {
            max_attempts: 0,
            ..GameConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_validation_rejects_zero_reveal_interval() {
        let config = GameConfig {
            reveal_interval_ms: 0,
            ..GameConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config =
            GameConfig::load_or_default(Path::new("/nonexistent/four-config.toml")).unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_load_rejects_bad_toml() {
        let path = std::env::temp_dir().join(format!("four-config-{}.toml", std::process::id()));
        std::fs::write(&path, "max_attempts = \"six\"").unwrap();
        let result = GameConfig::load(&path);
        std::fs::remove_file(&path).unwrap();
        assert!(matches!(result, Err(ConfigError::TomlParse(_))));
    }
}
