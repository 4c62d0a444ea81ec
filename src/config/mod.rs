//! # Configuration Management Module
//!
//! Optional TOML configuration for the game binary. Every field has a
//! default, and a missing file simply means "use the defaults", so the game
//! runs with no configuration at all.
//!
//! ## Configuration Structure
//!
//! - [`GameConfig`] - quiver size, fixed seed, hint text
//! - [`LoggingConfig`] - log level and optional log file
//!
//! ## Configuration File Format
//!
//! ```toml
//! [game]
//! arrows = 5
//! show_hints = true
//! # seed = 1234
//!
//! [logging]
//! level = "warn"
//! # file = "wumpus.log"
//! ```
//!
//! ## Precedence
//!
//! CLI flags > config file > defaults

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;

use crate::game::engine::DEFAULT_ARROWS;

/// Largest quiver accepted from configuration or the command line.
pub const MAX_ARROWS: u32 = 99;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub game: GameConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Arrows at the start of every game.
    #[serde(default = "default_arrows")]
    pub arrows: u32,
    /// Fixed RNG seed for reproducible games. Unset means a fresh seed per run.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Append "(Wumpus nearby)" style explanations to warnings.
    #[serde(default = "default_show_hints")]
    pub show_hints: bool,
}

fn default_arrows() -> u32 {
    DEFAULT_ARROWS
}

fn default_show_hints() -> bool {
    true
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            arrows: DEFAULT_ARROWS,
            seed: None,
            show_hints: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file; when unset, logs go to stderr.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            level: default_log_level(),
            file: None,
        }
    }
}

impl LoggingConfig {
    /// Parsed level; unknown strings fall back to `warn`.
    pub fn level_filter(&self) -> log::LevelFilter {
        self.level
            .parse::<log::LevelFilter>()
            .unwrap_or(log::LevelFilter::Warn)
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| anyhow!("Failed to read config file {}: {}", path, e))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| anyhow!("Failed to parse config file {}: {}", path, e))?;

        config.validate()?;
        Ok(config)
    }

    /// Like [`Config::load`], but a missing file yields the defaults.
    pub fn load_or_default(path: &str) -> Result<Self> {
        match fs::metadata(path) {
            Ok(_) => Config::load(path),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Config::default()),
            Err(e) => Err(anyhow!("Failed to read config file {}: {}", path, e)),
        }
    }

    /// Create a default configuration file
    pub fn create_default(path: &str) -> Result<()> {
        let config = Config::default();
        let content = toml::to_string_pretty(&config)
            .map_err(|e| anyhow!("Failed to serialize default config: {}", e))?;

        fs::write(path, content)
            .map_err(|e| anyhow!("Failed to write config file {}: {}", path, e))?;

        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        validate_arrows(self.game.arrows)
    }
}

/// Quiver size must be between 1 and [`MAX_ARROWS`].
pub fn validate_arrows(arrows: u32) -> Result<()> {
    if arrows == 0 || arrows > MAX_ARROWS {
        return Err(anyhow!(
            "arrows must be between 1 and {} (got {})",
            MAX_ARROWS,
            arrows
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = Config::default();
        assert_eq!(config.game.arrows, 5);
        assert_eq!(config.game.seed, None);
        assert!(config.game.show_hints);
        assert_eq!(config.logging.level, "warn");
        assert!(config.logging.file.is_none());
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: Config = toml::from_str("[game]\nseed = 42\n").unwrap();
        assert_eq!(config.game.seed, Some(42));
        assert_eq!(config.game.arrows, 5);
        assert_eq!(config.logging.level, "warn");

        let empty: Config = toml::from_str("").unwrap();
        assert_eq!(empty.game.arrows, 5);
    }

    #[test]
    fn test_toml_round_trip() {
        let mut config = Config::default();
        config.game.arrows = 9;
        config.game.show_hints = false;
        config.logging.file = Some("game.log".into());
        let text = toml::to_string_pretty(&config).unwrap();
        let back: Config = toml::from_str(&text).unwrap();
        assert_eq!(back.game.arrows, 9);
        assert!(!back.game.show_hints);
        assert_eq!(back.logging.file.as_deref(), Some("game.log"));
    }

    #[test]
    fn test_game_config_serde_json() {
        let cfg = GameConfig {
            arrows: 3,
            seed: Some(7),
            show_hints: true,
        };
        let serialized = serde_json::to_string(&cfg).unwrap();
        assert!(serialized.contains("\"arrows\":3"));
        assert!(serialized.contains("\"seed\":7"));
    }

    #[test]
    fn test_validate_arrows() {
        assert!(validate_arrows(1).is_ok());
        assert!(validate_arrows(MAX_ARROWS).is_ok());
        assert!(validate_arrows(0).is_err());
        assert!(validate_arrows(MAX_ARROWS + 1).is_err());
    }

    #[test]
    fn test_level_filter_fallback() {
        let mut logging = LoggingConfig::default();
        assert_eq!(logging.level_filter(), log::LevelFilter::Warn);
        logging.level = "debug".into();
        assert_eq!(logging.level_filter(), log::LevelFilter::Debug);
        logging.level = "chatty".into();
        assert_eq!(logging.level_filter(), log::LevelFilter::Warn);
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.toml");
        let config = Config::load_or_default(path.to_str().unwrap()).unwrap();
        assert_eq!(config.game.arrows, 5);
    }

    #[test]
    fn test_create_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let path = path.to_str().unwrap();
        Config::create_default(path).unwrap();
        let config = Config::load(path).unwrap();
        assert_eq!(config.game.arrows, 5);
    }

    #[test]
    fn test_load_rejects_bad_arrows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[game]\narrows = 0\n").unwrap();
        assert!(Config::load(path.to_str().unwrap()).is_err());
    }
}
