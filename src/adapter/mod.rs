//! Edges of the system: data sources feeding the core and report rendering.

pub mod odds_api;
pub mod predictions;
pub mod report;
pub mod teams;
mod traits;

pub use odds_api::OddsApiFileSource;
pub use predictions::JsonPredictionSource;
pub use report::PickRow;
pub use traits::{OddsSource, PredictionSource};
