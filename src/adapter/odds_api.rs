//! Snapshots of The Odds API `/v4/sports/{sport}/odds` spreads response.
//!
//! The feed quotes each outcome as the bettor's line: the points added to
//! that team's score, so a favored home team shows a negative `point`.
//! Records leaving this module use the crate-wide convention instead
//! (positive = home favored), which is why the home point is negated. The
//! away point already reads as "home favored by" and is kept as-is.

use std::collections::HashSet;
use std::path::PathBuf;

use anyhow::Context;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::{debug, info, warn};

use super::traits::OddsSource;
use crate::domain::{BookQuote, OddsRecord};

const SPREADS_MARKET: &str = "spreads";

#[derive(Debug, Deserialize)]
struct ApiEvent {
    id: String,
    #[serde(default)]
    sport_key: Option<String>,
    commence_time: DateTime<Utc>,
    home_team: String,
    away_team: String,
    #[serde(default)]
    bookmakers: Vec<ApiBookmaker>,
}

#[derive(Debug, Deserialize)]
struct ApiBookmaker {
    key: String,
    #[serde(default)]
    markets: Vec<ApiMarket>,
}

#[derive(Debug, Deserialize)]
struct ApiMarket {
    key: String,
    #[serde(default)]
    outcomes: Vec<ApiOutcome>,
}

#[derive(Debug, Deserialize)]
struct ApiOutcome {
    name: String,
    #[serde(default)]
    point: Option<Decimal>,
}

impl ApiEvent {
    fn into_record(self, bookmakers: &HashSet<String>) -> OddsRecord {
        let quotes = self
            .bookmakers
            .iter()
            .filter(|book| bookmakers.contains(&book.key))
            .filter_map(|book| {
                let market = book.markets.iter().find(|m| m.key == SPREADS_MARKET)?;
                let point = |team: &str| {
                    market
                        .outcomes
                        .iter()
                        .find(|o| o.name == team)
                        .and_then(|o| o.point)
                };
                Some(BookQuote::new(
                    book.key.as_str(),
                    point(&self.home_team).map(|p| -p),
                    point(&self.away_team),
                ))
            })
            .collect();

        OddsRecord::new(
            self.id,
            self.commence_time,
            self.home_team,
            self.away_team,
            quotes,
        )
    }
}

/// Parse an odds snapshot, keeping `sport` events and the given bookmakers.
///
/// Events without a `sport_key` are assumed to belong to `sport`.
pub fn parse_odds(content: &str, sport: &str, bookmakers: &[String]) -> anyhow::Result<Vec<OddsRecord>> {
    let events: Vec<ApiEvent> = serde_json::from_str(content)?;
    let books: HashSet<String> = bookmakers.iter().cloned().collect();

    Ok(events
        .into_iter()
        .filter(|event| event.sport_key.as_deref().map_or(true, |key| key == sport))
        .map(|event| event.into_record(&books))
        .collect())
}

/// Reads a saved odds response from disk.
#[derive(Debug, Clone)]
pub struct OddsApiFileSource {
    path: PathBuf,
    bookmakers: Vec<String>,
}

impl OddsApiFileSource {
    pub fn new(path: impl Into<PathBuf>, bookmakers: Vec<String>) -> Self {
        Self {
            path: path.into(),
            bookmakers,
        }
    }

    async fn read(&self, sport: &str) -> anyhow::Result<Vec<OddsRecord>> {
        let content = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("reading {}", self.path.display()))?;
        parse_odds(&content, sport, &self.bookmakers)
            .with_context(|| format!("parsing {}", self.path.display()))
    }
}

#[async_trait]
impl OddsSource for OddsApiFileSource {
    fn name(&self) -> &'static str {
        "odds-api-file"
    }

    async fn fetch(&self, sport: &str) -> Vec<OddsRecord> {
        match self.read(sport).await {
            Ok(records) => {
                let unquoted = records.iter().filter(|r| r.quotes.is_empty()).count();
                if unquoted > 0 {
                    debug!(unquoted, "Events without tracked bookmaker spreads");
                }
                info!(count = records.len(), sport, bookmakers = ?self.bookmakers, "Loaded odds");
                records
            }
            Err(e) => {
                warn!(error = %format!("{e:#}"), "Odds source unavailable");
                Vec::new()
            }
        }
    }
}
