//! Collaborator interfaces the core consumes.
//!
//! Sources never fail outward: an unreachable feed or an unparseable
//! payload is logged and surfaces as an empty collection, which the core
//! handles as "nothing to match".

use async_trait::async_trait;

use crate::domain::{OddsRecord, PredictionRecord};

/// Supplies model predictions for a slate date.
#[async_trait]
pub trait PredictionSource: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Predictions for `date` (`YYYYMMDD`). Empty on any failure.
    async fn fetch(&self, date: &str) -> Vec<PredictionRecord>;
}

/// Supplies market lines for a sport.
#[async_trait]
pub trait OddsSource: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Current odds for `sport`, limited to the source's bookmaker set.
    /// Empty on any failure.
    async fn fetch(&self, sport: &str) -> Vec<OddsRecord>;
}
