//! Configuration validation command.

use std::path::Path;

use crate::cli::output;
use crate::config::{Config, DEFAULT_CONFIG_PATH};
use crate::error::Result;

/// Report on an already loaded and validated configuration.
///
/// Loading happens before dispatch, so reaching this point means the file
/// parsed and passed validation.
pub fn execute_config(config: &Config, path: Option<&Path>) -> Result<()> {
    output::header(env!("CARGO_PKG_VERSION"));
    match path {
        Some(path) => output::field("Config", path.display()),
        None if Path::new(DEFAULT_CONFIG_PATH).exists() => {
            output::field("Config", DEFAULT_CONFIG_PATH)
        }
        None => output::field("Config", output::muted("built-in defaults")),
    }
    output::success("Configuration is valid");

    let normalizer = config.team_normalizer()?;
    let book = config.rule_book()?;
    let months: Vec<String> = book.active_months().map(|m| m.to_string()).collect();

    output::section("Summary");
    output::field("Sport", &config.odds.sport);
    output::field("Bookmakers", config.odds.bookmakers.join(", "));
    output::field("Matching", config.matching.policy);
    output::field(
        "Normalizer",
        format!(
            "{} suffix rules, {} aliases",
            normalizer.suffix_count(),
            normalizer.alias_count()
        ),
    );
    if months.is_empty() {
        output::warning("No month has strategy rules; picks will always be empty");
    } else {
        output::field("Rule months", months.join(", "));
    }
    output::field(
        "Logging",
        format!("{} ({})", config.logging.level, config.logging.format),
    );
    println!();
    Ok(())
}
