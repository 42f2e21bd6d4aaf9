//! One pass of the pick pipeline for a slate date.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use tracing::{info, warn};

use crate::adapter::{OddsSource, PredictionSource};
use crate::domain::strategy::{Recommendation, StrategyRuleEngine};
use crate::domain::{ConferenceTable, DomainError, GameMatcher, MatchedGame};
use crate::error::{Error, Result};

/// Outcome of a pick run.
#[derive(Debug, Clone, Serialize)]
pub struct PickReport {
    /// Slate date, `YYYYMMDD`.
    pub date: String,
    pub month: u32,
    /// Prediction records fetched.
    pub predictions: usize,
    /// Odds records fetched.
    pub odds: usize,
    pub matched: Vec<MatchedGame>,
    pub recommendations: Vec<Recommendation>,
}

/// Sources plus the decision core, wired once per invocation.
pub struct PickRun {
    predictions: Box<dyn PredictionSource>,
    odds: Box<dyn OddsSource>,
    matcher: GameMatcher,
    engine: StrategyRuleEngine,
    table: ConferenceTable,
    sport: String,
}

impl PickRun {
    pub fn new(
        predictions: Box<dyn PredictionSource>,
        odds: Box<dyn OddsSource>,
        matcher: GameMatcher,
        engine: StrategyRuleEngine,
        table: ConferenceTable,
        sport: impl Into<String>,
    ) -> Self {
        Self {
            predictions,
            odds,
            matcher,
            engine,
            table,
            sport: sport.into(),
        }
    }

    /// Fetch, match, and evaluate one slate using `month`'s rules.
    ///
    /// # Errors
    ///
    /// Returns an error only for a month outside 1-12. Source failures
    /// surface as empty inputs and an empty report.
    pub async fn run(&self, date: NaiveDate, month: u32) -> Result<PickReport> {
        if !(1..=12).contains(&month) {
            return Err(DomainError::InvalidMonth { month }.into());
        }
        let date = date.format("%Y%m%d").to_string();

        let (predictions, odds) = tokio::join!(
            self.predictions.fetch(&date),
            self.odds.fetch(&self.sport)
        );
        info!(
            source = self.predictions.name(),
            count = predictions.len(),
            %date,
            "Fetched predictions"
        );
        info!(
            source = self.odds.name(),
            count = odds.len(),
            sport = %self.sport,
            "Fetched odds"
        );

        let matched = self.matcher.match_games(&predictions, &odds);
        info!(
            matched = matched.len(),
            predictions = predictions.len(),
            "Matched games"
        );
        if matched.is_empty() && !predictions.is_empty() && !odds.is_empty() {
            warn!("No predictions matched an odds record; check team name aliases");
        }

        let active = self.engine.rule_book().rules_for(month).len();
        if active == 0 {
            info!(month, "No strategy rules active this month");
        }
        let recommendations = self.engine.evaluate_all(&matched, &self.table, month);
        info!(
            month,
            rules = active,
            recommendations = recommendations.len(),
            "Evaluated strategies"
        );

        Ok(PickReport {
            date,
            month,
            predictions: predictions.len(),
            odds: odds.len(),
            matched,
            recommendations,
        })
    }
}

/// Parse a slate date given as `YYYYMMDD` or `YYYY-MM-DD`.
pub fn parse_slate_date(value: &str) -> Result<NaiveDate> {
    let value = value.trim();
    NaiveDate::parse_from_str(value, "%Y%m%d")
        .or_else(|_| NaiveDate::parse_from_str(value, "%Y-%m-%d"))
        .map_err(|_| Error::InvalidDate(value.to_string()))
}

/// The rule month for a slate: an explicit override, else the date's month.
pub fn slate_month(date: NaiveDate, month: Option<u32>) -> u32 {
    month.unwrap_or_else(|| date.month())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::strategy::RuleBook;
    use crate::domain::{
        BookQuote, ConferenceTier, Direction, MatchPolicy, OddsRecord, PredictionRecord,
        TeamNameNormalizer,
    };
    use async_trait::async_trait;
    use chrono::{TimeZone, Utc};
    use rust_decimal_macros::dec;

    struct StaticPredictions(Vec<PredictionRecord>);

    #[async_trait]
    impl PredictionSource for StaticPredictions {
        fn name(&self) -> &'static str {
            "static"
        }

        async fn fetch(&self, _date: &str) -> Vec<PredictionRecord> {
            self.0.clone()
        }
    }

    struct StaticOdds(Vec<OddsRecord>);

    #[async_trait]
    impl OddsSource for StaticOdds {
        fn name(&self) -> &'static str {
            "static"
        }

        async fn fetch(&self, _sport: &str) -> Vec<OddsRecord> {
            self.0.clone()
        }
    }

    fn run_with(predictions: Vec<PredictionRecord>, odds: Vec<OddsRecord>) -> PickRun {
        let table: ConferenceTable = [
            ("Duke", ConferenceTier::Major),
            ("Vermont", ConferenceTier::Minor),
        ]
        .into_iter()
        .collect();
        PickRun::new(
            Box::new(StaticPredictions(predictions)),
            Box::new(StaticOdds(odds)),
            GameMatcher::new(TeamNameNormalizer::builtin().unwrap(), MatchPolicy::FirstMatch),
            StrategyRuleEngine::new(RuleBook::default_playbook()),
            table,
            "basketball_ncaab",
        )
    }

    fn duke_vermont() -> (Vec<PredictionRecord>, Vec<OddsRecord>) {
        let predictions = vec![PredictionRecord::new("Vermont", "Duke", Some(dec!(21.0)))];
        let odds = vec![OddsRecord::new(
            "e1",
            Utc.with_ymd_and_hms(2025, 11, 4, 0, 0, 0).unwrap(),
            "Duke Blue Devils",
            "Vermont Catamounts",
            vec![
                BookQuote::new("fanduel", Some(dec!(18.5)), Some(dec!(18.5))),
                BookQuote::new("draftkings", Some(dec!(17.5)), Some(dec!(17.5))),
            ],
        )];
        (predictions, odds)
    }

    #[tokio::test]
    async fn november_slate_recommends_favorite() {
        let (predictions, odds) = duke_vermont();
        let run = run_with(predictions, odds);
        let date = parse_slate_date("20251103").unwrap();

        let report = run.run(date, slate_month(date, None)).await.unwrap();

        assert_eq!(report.date, "20251103");
        assert_eq!(report.month, 11);
        assert_eq!(report.predictions, 1);
        assert_eq!(report.odds, 1);
        assert_eq!(report.matched.len(), 1);
        assert_eq!(report.recommendations.len(), 1);

        let pick = &report.recommendations[0];
        assert_eq!(pick.rule_name, "November All Favorites");
        assert_eq!(pick.direction, Direction::Favorite);
        assert_eq!(pick.edge, dec!(-3.0));
        let best = pick.best_line.as_ref().unwrap();
        assert_eq!(best.bookmaker.as_str(), "draftkings");
        assert_eq!(best.spread, dec!(-17.5));
    }

    #[tokio::test]
    async fn quiet_month_yields_matches_but_no_picks() {
        let (predictions, odds) = duke_vermont();
        let run = run_with(predictions, odds);
        let date = parse_slate_date("2026-01-15").unwrap();

        let report = run.run(date, slate_month(date, None)).await.unwrap();

        assert_eq!(report.month, 1);
        assert_eq!(report.matched.len(), 1);
        assert!(report.recommendations.is_empty());
    }

    #[tokio::test]
    async fn empty_sources_give_empty_report() {
        let run = run_with(Vec::new(), Vec::new());
        let date = parse_slate_date("20251103").unwrap();

        let report = run.run(date, 11).await.unwrap();
        assert!(report.matched.is_empty());
        assert!(report.recommendations.is_empty());
    }

    #[tokio::test]
    async fn rejects_month_out_of_range() {
        let run = run_with(Vec::new(), Vec::new());
        let date = parse_slate_date("20251103").unwrap();

        let result = run.run(date, 13).await;
        assert!(matches!(
            result,
            Err(Error::Domain(DomainError::InvalidMonth { month: 13 }))
        ));
    }

    #[test]
    fn parses_both_date_forms() {
        let expected = NaiveDate::from_ymd_opt(2025, 3, 9).unwrap();
        assert_eq!(parse_slate_date("20250309").unwrap(), expected);
        assert_eq!(parse_slate_date("2025-03-09").unwrap(), expected);
        assert!(matches!(
            parse_slate_date("March 9"),
            Err(Error::InvalidDate(_))
        ));
    }

    #[test]
    fn month_override_wins() {
        let date = parse_slate_date("20251103").unwrap();
        assert_eq!(slate_month(date, Some(3)), 3);
        assert_eq!(slate_month(date, None), 11);
    }
}
