//! Conference reference table snapshots.
//!
//! A snapshot is a JSON object mapping team name to tier, e.g.
//! `{"Duke": "Major", "Gonzaga": "Mid-Major"}`. When no snapshot is
//! available the built-in fallback table is used.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::Context;
use tracing::{info, warn};

use crate::domain::{ConferenceTable, ConferenceTier};

/// Parse a team -> tier snapshot.
///
/// Entries are inserted in key order, which fixes the order of the
/// classifier's containment pass.
pub fn parse_table(content: &str) -> anyhow::Result<ConferenceTable> {
    let entries: BTreeMap<String, ConferenceTier> = serde_json::from_str(content)?;
    Ok(entries.into_iter().collect())
}

/// Load a snapshot from disk.
pub fn load_table(path: &Path) -> anyhow::Result<ConferenceTable> {
    let content =
        std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    parse_table(&content).with_context(|| format!("parsing {}", path.display()))
}

/// Load a snapshot if one is given, falling back to the built-in table.
pub fn load_or_fallback(path: Option<&Path>) -> ConferenceTable {
    let table = match path {
        Some(path) => match load_table(path) {
            Ok(table) => table,
            Err(e) => {
                warn!(error = %format!("{e:#}"), "Team snapshot unavailable, using fallback list");
                ConferenceTable::fallback()
            }
        },
        None => ConferenceTable::fallback(),
    };

    info!(
        teams = table.len(),
        major = table.count(ConferenceTier::Major),
        mid_major = table.count(ConferenceTier::MidMajor),
        minor = table.count(ConferenceTier::Minor),
        "Loaded conference table"
    );
    table
}
