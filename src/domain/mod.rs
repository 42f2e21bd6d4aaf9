//! Source-agnostic decision logic.
//!
//! Everything here is synchronous and pure: records go in, new records come
//! out. Missing data produces `None` or an empty result, never an error.

mod conference;
mod edge;
mod error;
mod game;
mod ids;
mod matcher;
mod normalizer;
mod odds;
mod spread;

pub mod strategy;

pub use conference::{ConferenceTable, ConferenceTier};
pub use edge::{edge, Direction, EdgeResult};
pub use error::DomainError;
pub use game::{BestLine, BookQuote, MatchedGame, OddsRecord, PredictionRecord};
pub use ids::{BookmakerId, GameId};
pub use matcher::{GameMatcher, MatchPolicy};
pub use normalizer::{TeamNameNormalizer, DEFAULT_ALIASES, DEFAULT_SUFFIX_RULES};
pub use odds::{best_line, bettor_line, consensus};
pub use spread::{format_points, format_signed, Side, Spread};
