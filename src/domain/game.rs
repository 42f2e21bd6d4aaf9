//! Game records flowing through the core.
//!
//! [`PredictionRecord`] and [`OddsRecord`] come from independent sources and
//! are never mutated. [`MatchedGame`] pairs one of each.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::ids::{BookmakerId, GameId};
use super::spread::{Side, Spread};

/// A model prediction for one game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionRecord {
    pub away_team: String,
    pub home_team: String,
    /// Model spread, positive = home favored.
    #[serde(default)]
    pub predicted_spread: Option<Spread>,
    /// Home win probability as a percentage (0-100).
    #[serde(default)]
    pub home_win_probability: Option<Decimal>,
    /// Slate date in `YYYYMMDD` form.
    #[serde(default)]
    pub date: String,
}

impl PredictionRecord {
    pub fn new(
        away_team: impl Into<String>,
        home_team: impl Into<String>,
        predicted_spread: Option<Spread>,
    ) -> Self {
        Self {
            away_team: away_team.into(),
            home_team: home_team.into(),
            predicted_spread,
            home_win_probability: None,
            date: String::new(),
        }
    }

    #[must_use]
    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = date.into();
        self
    }

    #[must_use]
    pub fn with_win_probability(mut self, probability: Decimal) -> Self {
        self.home_win_probability = Some(probability);
        self
    }
}

/// One bookmaker's spread quote for a game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookQuote {
    pub bookmaker: BookmakerId,
    #[serde(default)]
    pub home_spread: Option<Spread>,
    #[serde(default)]
    pub away_spread: Option<Spread>,
}

impl BookQuote {
    pub fn new(
        bookmaker: impl Into<BookmakerId>,
        home_spread: Option<Spread>,
        away_spread: Option<Spread>,
    ) -> Self {
        Self {
            bookmaker: bookmaker.into(),
            home_spread,
            away_spread,
        }
    }

    /// The quoted spread for one side.
    pub fn spread(&self, side: Side) -> Option<Spread> {
        match side {
            Side::Home => self.home_spread,
            Side::Away => self.away_spread,
        }
    }
}

/// Market lines for one game across the tracked bookmakers.
///
/// Quotes keep the order the feed delivered them in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OddsRecord {
    pub id: GameId,
    pub commence_time: DateTime<Utc>,
    pub home_team: String,
    pub away_team: String,
    #[serde(default)]
    pub quotes: Vec<BookQuote>,
}

impl OddsRecord {
    pub fn new(
        id: impl Into<GameId>,
        commence_time: DateTime<Utc>,
        home_team: impl Into<String>,
        away_team: impl Into<String>,
        quotes: Vec<BookQuote>,
    ) -> Self {
        Self {
            id: id.into(),
            commence_time,
            home_team: home_team.into(),
            away_team: away_team.into(),
            quotes,
        }
    }

    /// Look up a bookmaker's quote.
    pub fn quote(&self, bookmaker: &str) -> Option<&BookQuote> {
        self.quotes.iter().find(|q| q.bookmaker.as_str() == bookmaker)
    }
}

/// The best quoted spread for one side and the bookmaker offering it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BestLine {
    pub bookmaker: BookmakerId,
    pub spread: Spread,
}

/// A prediction paired with the odds for the same real-world game.
///
/// Team names are the prediction source's spelling.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchedGame {
    pub game_id: GameId,
    pub home_team: String,
    pub away_team: String,
    pub predicted_spread: Option<Spread>,
    pub home_win_probability: Option<Decimal>,
    pub consensus_spread: Option<Spread>,
    pub commence_time: DateTime<Utc>,
    pub quotes: Vec<BookQuote>,
    pub best_home_line: Option<BestLine>,
    pub best_away_line: Option<BestLine>,
}

impl MatchedGame {
    /// `"Away @ Home"` label used in reports.
    pub fn label(&self) -> String {
        format!("{} @ {}", self.away_team, self.home_team)
    }

    pub fn quote(&self, bookmaker: &str) -> Option<&BookQuote> {
        self.quotes.iter().find(|q| q.bookmaker.as_str() == bookmaker)
    }
}
