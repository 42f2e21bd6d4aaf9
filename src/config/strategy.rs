//! Rule book and name normalization configuration.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::domain::strategy::{RuleBook, StrategyRule};
use crate::domain::{DomainError, TeamNameNormalizer, DEFAULT_ALIASES, DEFAULT_SUFFIX_RULES};

/// Rules for one calendar month.
#[derive(Debug, Clone, Deserialize)]
pub struct PeriodConfig {
    pub month: u32,
    #[serde(default)]
    pub rules: Vec<StrategyRule>,
}

/// Strategy rule configuration.
///
/// When `periods` is omitted the built-in playbook is used. An explicit
/// list, even an empty one, replaces it entirely.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StrategyConfig {
    #[serde(default)]
    pub periods: Option<Vec<PeriodConfig>>,
}

impl StrategyConfig {
    /// Build the rule book this configuration describes.
    pub fn rule_book(&self) -> Result<RuleBook, DomainError> {
        match &self.periods {
            None => Ok(RuleBook::default_playbook()),
            Some(periods) => RuleBook::try_new(
                periods
                    .iter()
                    .map(|period| (period.month, period.rules.clone())),
            ),
        }
    }

    /// Every configured rule, for validation.
    pub(crate) fn rules(&self) -> impl Iterator<Item = &StrategyRule> {
        self.periods
            .iter()
            .flatten()
            .flat_map(|period| period.rules.iter())
    }
}

/// Team name normalization tables.
///
/// Entries extend the built-in tables unless `replace_defaults` is set.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NormalizerConfig {
    #[serde(default)]
    pub replace_defaults: bool,

    /// Last-word rewrites, e.g. `"St." = "State"`.
    #[serde(default)]
    pub suffix_rules: BTreeMap<String, String>,

    /// Whole-name aliases, e.g. `"Miami (FL)" = "Miami FL"`.
    #[serde(default)]
    pub aliases: BTreeMap<String, String>,
}

impl NormalizerConfig {
    /// Build the normalizer this configuration describes.
    ///
    /// A configured entry overrides a built-in one with the same key.
    pub fn normalizer(&self) -> Result<TeamNameNormalizer, DomainError> {
        let suffix_rules = merge(DEFAULT_SUFFIX_RULES, &self.suffix_rules, self.replace_defaults);
        let aliases = merge(DEFAULT_ALIASES, &self.aliases, self.replace_defaults);
        TeamNameNormalizer::try_new(suffix_rules, aliases)
    }
}

fn merge(
    defaults: &[(&str, &str)],
    configured: &BTreeMap<String, String>,
    replace_defaults: bool,
) -> Vec<(String, String)> {
    let mut entries: Vec<(String, String)> = if replace_defaults {
        Vec::new()
    } else {
        defaults
            .iter()
            .filter(|(from, _)| !configured.contains_key(*from))
            .map(|(from, to)| ((*from).to_string(), (*to).to_string()))
            .collect()
    };
    entries.extend(configured.iter().map(|(k, v)| (k.clone(), v.clone())));
    entries
}
