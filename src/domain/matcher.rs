//! Pairing predictions with odds for the same real-world game.
//!
//! Two names are considered the same team when their normalized forms are
//! equal or one contains the other. Both the home and the away side must
//! agree for a pair to be accepted.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::game::{MatchedGame, OddsRecord, PredictionRecord};
use super::normalizer::TeamNameNormalizer;
use super::odds::{best_line, consensus};
use super::spread::Side;

/// How to choose among several odds records that satisfy a prediction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchPolicy {
    /// Accept the first satisfying odds record in source order.
    #[default]
    FirstMatch,
    /// Score every satisfying record and keep the best. Exact name equality
    /// outranks containment; ties go to the earliest commence time, then to
    /// source order.
    BestScore,
}

impl fmt::Display for MatchPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FirstMatch => write!(f, "first_match"),
            Self::BestScore => write!(f, "best_score"),
        }
    }
}

/// Strength of agreement between two normalized names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum NameMatch {
    Contains = 1,
    Exact = 2,
}

fn name_match(a: &str, b: &str) -> Option<NameMatch> {
    if a == b {
        Some(NameMatch::Exact)
    } else if a.contains(b) || b.contains(a) {
        Some(NameMatch::Contains)
    } else {
        None
    }
}

/// Normalized home/away pair for one record.
struct Teams {
    home: String,
    away: String,
}

/// Pairs prediction records with odds records.
#[derive(Debug, Clone)]
pub struct GameMatcher {
    normalizer: TeamNameNormalizer,
    policy: MatchPolicy,
}

impl GameMatcher {
    pub fn new(normalizer: TeamNameNormalizer, policy: MatchPolicy) -> Self {
        Self { normalizer, policy }
    }

    pub fn normalizer(&self) -> &TeamNameNormalizer {
        &self.normalizer
    }

    pub fn policy(&self) -> MatchPolicy {
        self.policy
    }

    /// Pair each prediction with at most one odds record.
    ///
    /// Output follows prediction order. Predictions with no satisfying odds
    /// record are dropped. Empty inputs yield an empty result.
    pub fn match_games(
        &self,
        predictions: &[PredictionRecord],
        odds: &[OddsRecord],
    ) -> Vec<MatchedGame> {
        let odds_teams: Vec<Teams> = odds
            .iter()
            .map(|record| Teams {
                home: self.normalizer.normalize(&record.home_team),
                away: self.normalizer.normalize(&record.away_team),
            })
            .collect();

        let mut matched = Vec::new();
        for prediction in predictions {
            let teams = Teams {
                home: self.normalizer.normalize(&prediction.home_team),
                away: self.normalizer.normalize(&prediction.away_team),
            };

            let found = match self.policy {
                MatchPolicy::FirstMatch => first_match(&teams, &odds_teams),
                MatchPolicy::BestScore => best_score(&teams, &odds_teams, odds),
            };

            match found {
                Some(index) => {
                    trace!(
                        home = %prediction.home_team,
                        away = %prediction.away_team,
                        odds_id = %odds[index].id,
                        "Matched prediction to odds"
                    );
                    matched.push(build_matched(prediction, &odds[index]));
                }
                None => debug!(
                    home = %teams.home,
                    away = %teams.away,
                    "No odds found for prediction"
                ),
            }
        }
        matched
    }
}

/// Score of a candidate, or `None` if either side disagrees.
fn score(prediction: &Teams, candidate: &Teams) -> Option<(NameMatch, NameMatch)> {
    let home = name_match(&prediction.home, &candidate.home)?;
    let away = name_match(&prediction.away, &candidate.away)?;
    Some((home, away))
}

fn first_match(prediction: &Teams, candidates: &[Teams]) -> Option<usize> {
    candidates
        .iter()
        .position(|candidate| score(prediction, candidate).is_some())
}

fn best_score(prediction: &Teams, candidates: &[Teams], odds: &[OddsRecord]) -> Option<usize> {
    let mut best: Option<(usize, u8)> = None;
    for (index, candidate) in candidates.iter().enumerate() {
        let Some((home, away)) = score(prediction, candidate) else {
            continue;
        };
        let total = home as u8 + away as u8;

        let replace = match best {
            None => true,
            Some((current, current_total)) => {
                total > current_total
                    || (total == current_total
                        && odds[index].commence_time < odds[current].commence_time)
            }
        };
        if let Some((current, current_total)) = best {
            if total == current_total {
                debug!(
                    home = %prediction.home,
                    away = %prediction.away,
                    first = %odds[current].id,
                    second = %odds[index].id,
                    "Ambiguous odds candidates"
                );
            }
        }
        if replace {
            best = Some((index, total));
        }
    }
    best.map(|(index, _)| index)
}

fn build_matched(prediction: &PredictionRecord, odds: &OddsRecord) -> MatchedGame {
    MatchedGame {
        game_id: odds.id.clone(),
        home_team: prediction.home_team.clone(),
        away_team: prediction.away_team.clone(),
        predicted_spread: prediction.predicted_spread,
        home_win_probability: prediction.home_win_probability,
        consensus_spread: consensus(odds),
        commence_time: odds.commence_time,
        quotes: odds.quotes.clone(),
        best_home_line: best_line(odds, Side::Home),
        best_away_line: best_line(odds, Side::Away),
    }
}
