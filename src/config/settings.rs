//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all application settings.
//! Every section is optional; an empty file yields the built-in defaults.
//!
//! # Example
//!
//! ```no_run
//! use hoopedge::config::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("hoopedge.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use std::path::Path;

use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::debug;

use super::logging::LoggingConfig;
use super::strategy::{NormalizerConfig, StrategyConfig};
use crate::domain::strategy::{RuleBook, StrategyRuleEngine};
use crate::domain::{GameMatcher, MatchPolicy, TeamNameNormalizer};
use crate::error::{ConfigError, Result};

/// Default configuration file name, looked up in the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "hoopedge.toml";

/// Odds feed settings.
#[derive(Debug, Clone, Deserialize)]
pub struct OddsConfig {
    /// Sport key on the odds feed.
    #[serde(default = "default_sport")]
    pub sport: String,

    /// Bookmakers to keep, in report column order.
    #[serde(default = "default_bookmakers")]
    pub bookmakers: Vec<String>,
}

fn default_sport() -> String {
    "basketball_ncaab".into()
}

fn default_bookmakers() -> Vec<String> {
    vec!["fanduel".into(), "betmgm".into(), "draftkings".into()]
}

impl Default for OddsConfig {
    fn default() -> Self {
        Self {
            sport: default_sport(),
            bookmakers: default_bookmakers(),
        }
    }
}

/// Game matching settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MatchingConfig {
    #[serde(default)]
    pub policy: MatchPolicy,
}

/// Main application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Odds feed sport and bookmaker set.
    #[serde(default)]
    pub odds: OddsConfig,

    /// How predictions are paired with odds.
    #[serde(default)]
    pub matching: MatchingConfig,

    /// Team name normalization tables.
    #[serde(default)]
    pub normalizer: NormalizerConfig,

    /// Monthly strategy rules.
    #[serde(default)]
    pub strategy: StrategyConfig,
}

impl Config {
    /// Parse configuration from TOML content.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML content is malformed or validation fails.
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, the TOML content is
    /// malformed, or validation fails.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Load from `path` if given, else from [`DEFAULT_CONFIG_PATH`] if it
    /// exists, else fall back to defaults.
    pub fn discover(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => Self::load(DEFAULT_CONFIG_PATH),
            None => {
                debug!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Validate configuration values.
    fn validate(&self) -> Result<()> {
        if self.odds.sport.trim().is_empty() {
            return Err(ConfigError::MissingField { field: "sport" }.into());
        }
        if self.odds.bookmakers.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "bookmakers",
                reason: "at least one bookmaker is required".to_string(),
            }
            .into());
        }
        if self.odds.bookmakers.iter().any(|b| b.trim().is_empty()) {
            return Err(ConfigError::InvalidValue {
                field: "bookmakers",
                reason: "bookmaker keys cannot be empty".to_string(),
            }
            .into());
        }

        for rule in self.strategy.rules() {
            if rule.name.trim().is_empty() {
                return Err(ConfigError::MissingField { field: "name" }.into());
            }
            if rule.min_edge < Decimal::ZERO {
                return Err(ConfigError::InvalidValue {
                    field: "min_edge",
                    reason: format!("rule '{}' must have min_edge >= 0", rule.name),
                }
                .into());
            }
        }

        self.strategy
            .rule_book()
            .map_err(|e| ConfigError::InvalidValue {
                field: "periods",
                reason: e.to_string(),
            })?;
        self.normalizer
            .normalizer()
            .map_err(|e| ConfigError::InvalidValue {
                field: "normalizer",
                reason: e.to_string(),
            })?;

        Ok(())
    }

    /// Initialize logging based on configuration.
    pub fn init_logging(&self) {
        self.logging.init();
    }

    /// The configured rule book.
    pub fn rule_book(&self) -> Result<RuleBook> {
        Ok(self.strategy.rule_book()?)
    }

    /// The configured team name normalizer.
    pub fn team_normalizer(&self) -> Result<TeamNameNormalizer> {
        Ok(self.normalizer.normalizer()?)
    }

    /// A matcher using the configured normalizer and policy.
    pub fn game_matcher(&self) -> Result<GameMatcher> {
        Ok(GameMatcher::new(self.team_normalizer()?, self.matching.policy))
    }

    /// A rule engine over the configured rule book.
    pub fn rule_engine(&self) -> Result<StrategyRuleEngine> {
        Ok(StrategyRuleEngine::new(self.rule_book()?))
    }
}
