//! Calendar-driven strategy rules.
//!
//! A [`RuleBook`] holds an ordered list of [`StrategyRule`]s per calendar
//! month. Months without an entry have no rules, so nothing is recommended
//! then. The [`StrategyRuleEngine`] checks a matched game's edge against the
//! rules for a month and emits one [`Recommendation`] per matching rule.
//!
//! # Example
//!
//! ```
//! use hoopedge::domain::strategy::{RuleBook, StrategyRuleEngine};
//!
//! let engine = StrategyRuleEngine::new(RuleBook::default_playbook());
//! assert!(engine.rule_book().rules_for(1).is_empty());
//! assert_eq!(engine.rule_book().rules_for(11).len(), 2);
//! ```

mod engine;
mod recommendation;

pub use engine::StrategyRuleEngine;
pub use recommendation::{bet_text, Recommendation};

use std::collections::BTreeMap;
use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::conference::ConferenceTier;
use super::edge::{Direction, EdgeResult};
use super::error::DomainError;
use super::spread::Spread;

/// Which conference tier a rule applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConferenceScope {
    #[serde(rename = "ALL", alias = "All", alias = "all")]
    All,
    Major,
    #[serde(rename = "Mid-Major")]
    MidMajor,
    Minor,
}

impl ConferenceScope {
    /// `All` admits every tier, including `Unknown`. A specific scope only
    /// admits its own tier.
    pub fn admits(self, tier: ConferenceTier) -> bool {
        match self {
            Self::All => true,
            Self::Major => tier == ConferenceTier::Major,
            Self::MidMajor => tier == ConferenceTier::MidMajor,
            Self::Minor => tier == ConferenceTier::Minor,
        }
    }
}

impl fmt::Display for ConferenceScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "ALL"),
            Self::Major => write!(f, "Major"),
            Self::MidMajor => write!(f, "Mid-Major"),
            Self::Minor => write!(f, "Minor"),
        }
    }
}

/// Edge direction a rule requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RequiredDirection {
    #[serde(alias = "underdog")]
    Underdog,
    #[serde(alias = "favorite")]
    Favorite,
    #[serde(alias = "both")]
    Both,
}

impl RequiredDirection {
    pub fn admits(self, direction: Direction) -> bool {
        match self {
            Self::Both => true,
            Self::Underdog => direction == Direction::Underdog,
            Self::Favorite => direction == Direction::Favorite,
        }
    }
}

impl fmt::Display for RequiredDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Underdog => write!(f, "UNDERDOG"),
            Self::Favorite => write!(f, "FAVORITE"),
            Self::Both => write!(f, "BOTH"),
        }
    }
}

/// Which team's tier gates a rule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GateOn {
    #[default]
    Home,
    Away,
    /// Either team's tier may satisfy the scope.
    Either,
}

impl fmt::Display for GateOn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Home => write!(f, "home"),
            Self::Away => write!(f, "away"),
            Self::Either => write!(f, "either"),
        }
    }
}

/// A filter deciding whether a game's edge is worth a bet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategyRule {
    pub name: String,
    pub conference: ConferenceScope,
    /// Minimum absolute edge in points.
    pub min_edge: Spread,
    pub direction: RequiredDirection,
    #[serde(default)]
    pub gate_on: GateOn,
    #[serde(default)]
    pub description: String,
}

impl StrategyRule {
    pub fn new(
        name: impl Into<String>,
        conference: ConferenceScope,
        min_edge: Spread,
        direction: RequiredDirection,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            conference,
            min_edge,
            direction,
            gate_on: GateOn::Home,
            description: description.into(),
        }
    }

    #[must_use]
    pub fn with_gate(mut self, gate_on: GateOn) -> Self {
        self.gate_on = gate_on;
        self
    }

    /// True when the edge clears the threshold, the direction fits and the
    /// gated team's tier is in scope.
    pub fn matches(&self, edge: &EdgeResult, home: ConferenceTier, away: ConferenceTier) -> bool {
        if edge.magnitude < self.min_edge {
            return false;
        }
        if !self.direction.admits(edge.direction) {
            return false;
        }
        match self.gate_on {
            GateOn::Home => self.conference.admits(home),
            GateOn::Away => self.conference.admits(away),
            GateOn::Either => self.conference.admits(home) || self.conference.admits(away),
        }
    }
}

/// Strategy rules grouped by calendar month (1-12).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RuleBook {
    periods: BTreeMap<u32, Vec<StrategyRule>>,
}

impl RuleBook {
    /// A rule book with no rules in any month.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a rule book from `(month, rules)` periods.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidMonth`] for a month outside 1-12 and
    /// [`DomainError::DuplicateMonth`] if a month is listed twice.
    pub fn try_new(
        periods: impl IntoIterator<Item = (u32, Vec<StrategyRule>)>,
    ) -> Result<Self, DomainError> {
        let mut map = BTreeMap::new();
        for (month, rules) in periods {
            if !(1..=12).contains(&month) {
                return Err(DomainError::InvalidMonth { month });
            }
            if map.insert(month, rules).is_some() {
                return Err(DomainError::DuplicateMonth { month });
            }
        }
        Ok(Self { periods: map })
    }

    /// Rules for a month, in evaluation order. Empty when none are defined.
    pub fn rules_for(&self, month: u32) -> &[StrategyRule] {
        self.periods.get(&month).map_or(&[], Vec::as_slice)
    }

    /// Months that have at least one rule.
    pub fn active_months(&self) -> impl Iterator<Item = u32> + '_ {
        self.periods
            .iter()
            .filter(|(_, rules)| !rules.is_empty())
            .map(|(month, _)| *month)
    }

    /// Every `(month, rules)` period, including explicitly empty ones.
    pub fn periods(&self) -> impl Iterator<Item = (u32, &[StrategyRule])> {
        self.periods
            .iter()
            .map(|(month, rules)| (*month, rules.as_slice()))
    }

    /// The season playbook: November through April, skipping January and
    /// February.
    pub fn default_playbook() -> Self {
        use ConferenceScope::{All, MidMajor, Minor};
        use RequiredDirection::{Both, Favorite, Underdog};

        let periods = [
            (
                11,
                vec![
                    StrategyRule::new(
                        "November Minor Underdog",
                        Minor,
                        Decimal::from(4),
                        Underdog,
                        "Minor conference underdog with 4+ point model edge",
                    ),
                    StrategyRule::new(
                        "November All Favorites",
                        All,
                        Decimal::from(3),
                        Favorite,
                        "All conferences favorite with 3+ point model edge",
                    ),
                ],
            ),
            (
                12,
                vec![
                    StrategyRule::new(
                        "December Mid-Major Both",
                        MidMajor,
                        Decimal::from(3),
                        Both,
                        "Mid-Major conference with 3+ point model edge (either direction)",
                    ),
                    StrategyRule::new(
                        "December Minor Both",
                        Minor,
                        Decimal::from(3),
                        Both,
                        "Minor conference with 3+ point model edge (either direction)",
                    ),
                ],
            ),
            (1, vec![]),
            (2, vec![]),
            (
                3,
                vec![StrategyRule::new(
                    "March All Underdogs",
                    All,
                    Decimal::from(4),
                    Underdog,
                    "All conferences underdog with 4+ point model edge",
                )],
            ),
            (
                4,
                vec![StrategyRule::new(
                    "April Tournament Underdogs",
                    All,
                    Decimal::from(4),
                    Underdog,
                    "Tournament underdog with 4+ point model edge",
                )],
            ),
        ];

        let periods = periods.into_iter().collect();
        Self { periods }
    }
}
