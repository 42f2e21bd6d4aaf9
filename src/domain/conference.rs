//! Conference tier lookup.
//!
//! Tiers come from a name -> tier reference table supplied by the caller.
//! How that table was obtained (database, cached snapshot, built-in
//! fallback) does not matter here.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Coarse competitive strength bucket for a team's conference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConferenceTier {
    Major,
    #[serde(rename = "Mid-Major")]
    MidMajor,
    Minor,
    Unknown,
}

impl fmt::Display for ConferenceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Major => write!(f, "Major"),
            Self::MidMajor => write!(f, "Mid-Major"),
            Self::Minor => write!(f, "Minor"),
            Self::Unknown => write!(f, "Unknown"),
        }
    }
}

/// Team name -> tier reference table.
///
/// Entries keep insertion order, which fixes the order of the containment
/// pass in [`ConferenceTable::tier`].
#[derive(Debug, Clone, Default)]
pub struct ConferenceTable {
    entries: Vec<(String, ConferenceTier)>,
    exact: HashMap<String, ConferenceTier>,
}

impl ConferenceTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a team's tier. Replacing keeps the original position.
    pub fn insert(&mut self, team: impl Into<String>, tier: ConferenceTier) {
        let team = team.into();
        if self.exact.insert(team.clone(), tier).is_some() {
            if let Some(entry) = self.entries.iter_mut().find(|(name, _)| *name == team) {
                entry.1 = tier;
            }
        } else {
            self.entries.push((team, tier));
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, ConferenceTier)> {
        self.entries.iter().map(|(name, tier)| (name.as_str(), *tier))
    }

    /// Count of teams per tier.
    pub fn count(&self, tier: ConferenceTier) -> usize {
        self.entries.iter().filter(|(_, t)| *t == tier).count()
    }

    /// Classify a team.
    ///
    /// Tries, in order: exact key, case-insensitive key, then containment in
    /// either direction. Falls back to [`ConferenceTier::Unknown`], which is
    /// also the tier of a blank name.
    pub fn tier(&self, team: &str) -> ConferenceTier {
        let team = team.trim();
        if team.is_empty() {
            return ConferenceTier::Unknown;
        }
        if let Some(tier) = self.exact.get(team) {
            return *tier;
        }

        let lower = team.to_lowercase();
        if let Some((_, tier)) = self
            .entries
            .iter()
            .find(|(name, _)| name.to_lowercase() == lower)
        {
            return *tier;
        }

        self.entries
            .iter()
            .find(|(name, _)| team.contains(name.as_str()) || name.contains(team))
            .map_or(ConferenceTier::Unknown, |(_, tier)| *tier)
    }

    /// Small built-in table used when no reference snapshot is available.
    pub fn fallback() -> Self {
        use ConferenceTier::{Major, MidMajor, Minor};

        let teams: &[(&str, ConferenceTier)] = &[
            ("Duke", Major),
            ("North Carolina", Major),
            ("Kansas", Major),
            ("Kentucky", Major),
            ("Arizona", Major),
            ("UCLA", Major),
            ("Gonzaga", Major),
            ("Villanova", Major),
            ("Michigan", Major),
            ("Tennessee", Major),
            ("Auburn", Major),
            ("Alabama", Major),
            ("Houston", Major),
            ("Texas", Major),
            ("Purdue", Major),
            ("Wisconsin", Major),
            ("Illinois", Major),
            ("Indiana", Major),
            ("Michigan St.", Major),
            ("Ohio St.", Major),
            ("San Diego State", MidMajor),
            ("Nevada", MidMajor),
            ("Boise State", MidMajor),
            ("Colorado State", MidMajor),
            ("VCU", MidMajor),
            ("Dayton", MidMajor),
            ("Richmond", MidMajor),
            ("Saint Mary's", MidMajor),
            ("BYU", MidMajor),
            ("Memphis", MidMajor),
            ("SMU", MidMajor),
            ("Temple", MidMajor),
            ("Vermont", Minor),
            ("Colgate", Minor),
            ("Furman", Minor),
            ("Charleston", Minor),
            ("Oral Roberts", Minor),
        ];

        teams.iter().map(|(name, tier)| (*name, *tier)).collect()
    }
}

impl<S: Into<String>> FromIterator<(S, ConferenceTier)> for ConferenceTable {
    fn from_iter<I: IntoIterator<Item = (S, ConferenceTier)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (team, tier) in iter {
            table.insert(team, tier);
        }
        table
    }
}
