//! Configuration loaded from TOML.

pub mod logging;
pub mod settings;
pub mod strategy;

pub use logging::LoggingConfig;
pub use settings::{Config, MatchingConfig, OddsConfig, DEFAULT_CONFIG_PATH};
pub use strategy::{NormalizerConfig, PeriodConfig, StrategyConfig};
