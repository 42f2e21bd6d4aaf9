//! Prediction snapshots stored as JSON.

use std::path::{Path, PathBuf};

use anyhow::Context;
use async_trait::async_trait;
use tracing::{debug, info, warn};

use super::traits::PredictionSource;
use crate::domain::PredictionRecord;

/// Reads a JSON array of [`PredictionRecord`]s from disk.
///
/// Records carrying a different `date` than the one requested are skipped;
/// undated records are always kept.
#[derive(Debug, Clone)]
pub struct JsonPredictionSource {
    path: PathBuf,
}

impl JsonPredictionSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read(&self) -> anyhow::Result<Vec<PredictionRecord>> {
        let content = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("reading {}", self.path.display()))?;
        parse_predictions(&content).with_context(|| format!("parsing {}", self.path.display()))
    }
}

/// Parse a JSON array of predictions.
pub fn parse_predictions(content: &str) -> anyhow::Result<Vec<PredictionRecord>> {
    Ok(serde_json::from_str(content)?)
}

#[async_trait]
impl PredictionSource for JsonPredictionSource {
    fn name(&self) -> &'static str {
        "json"
    }

    async fn fetch(&self, date: &str) -> Vec<PredictionRecord> {
        let records = match self.read().await {
            Ok(records) => records,
            Err(e) => {
                warn!(error = %format!("{e:#}"), "Prediction source unavailable");
                return Vec::new();
            }
        };

        let total = records.len();
        let kept: Vec<PredictionRecord> = records
            .into_iter()
            .filter(|record| record.date.is_empty() || record.date == date)
            .collect();

        if kept.len() < total {
            debug!(skipped = total - kept.len(), date, "Skipped predictions for other dates");
        }
        info!(count = kept.len(), date, "Loaded predictions");
        kept
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::io::Write;

    const SNAPSHOT: &str = r#"[
        {"away_team": "Vermont", "home_team": "Duke", "predicted_spread": 15.0,
         "home_win_probability": 91.2, "date": "20251103"},
        {"away_team": "Colgate", "home_team": "Furman", "predicted_spread": null,
         "date": "20251104"},
        {"away_team": "BYU", "home_team": "Gonzaga", "predicted_spread": -1.5}
    ]"#;

    #[test]
    fn parses_snapshot() {
        let records = parse_predictions(SNAPSHOT).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].predicted_spread, Some(dec!(15.0)));
        assert_eq!(records[0].home_win_probability, Some(dec!(91.2)));
        assert_eq!(records[1].predicted_spread, None);
        assert_eq!(records[2].date, "");
    }

    #[tokio::test]
    async fn fetch_filters_by_date() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SNAPSHOT.as_bytes()).unwrap();

        let source = JsonPredictionSource::new(file.path());
        let records = source.fetch("20251103").await;

        let homes: Vec<_> = records.iter().map(|r| r.home_team.as_str()).collect();
        assert_eq!(homes, vec!["Duke", "Gonzaga"]);
    }

    #[test]
    fn missing_file_degrades_to_empty() {
        let source = JsonPredictionSource::new("/nonexistent/predictions.json");
        let records = tokio_test::block_on(source.fetch("20251103"));
        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn malformed_file_degrades_to_empty() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{not json").unwrap();

        let source = JsonPredictionSource::new(file.path());
        assert!(source.fetch("20251103").await.is_empty());
    }
}
