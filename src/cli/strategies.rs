//! Strategy rule listing.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::cli::output;
use crate::cli::StrategiesArgs;
use crate::config::Config;
use crate::domain::strategy::{RuleBook, StrategyRule};
use crate::domain::{format_points, DomainError};
use crate::error::Result;

#[derive(Tabled)]
struct RuleRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Conference")]
    conference: String,
    #[tabled(rename = "Min Edge")]
    min_edge: String,
    #[tabled(rename = "Direction")]
    direction: String,
    #[tabled(rename = "Gate")]
    gate_on: String,
    #[tabled(rename = "Description")]
    description: String,
}

impl From<&StrategyRule> for RuleRow {
    fn from(rule: &StrategyRule) -> Self {
        Self {
            name: rule.name.clone(),
            conference: rule.conference.to_string(),
            min_edge: format_points(rule.min_edge),
            direction: rule.direction.to_string(),
            gate_on: rule.gate_on.to_string(),
            description: rule.description.clone(),
        }
    }
}

/// List the configured rule book, month by month.
pub fn execute(config: &Config, args: &StrategiesArgs) -> Result<()> {
    let book = config.rule_book()?;

    output::header(env!("CARGO_PKG_VERSION"));
    match args.month {
        Some(month) => {
            if !(1..=12).contains(&month) {
                return Err(DomainError::InvalidMonth { month }.into());
            }
            print_month(month, book.rules_for(month));
        }
        None => print_all(&book),
    }
    println!();
    Ok(())
}

fn print_all(book: &RuleBook) {
    let mut listed = 0;
    for (month, rules) in book.periods() {
        print_month(month, rules);
        listed += 1;
    }
    if listed == 0 {
        println!();
        output::note("No strategy periods configured");
    }
}

fn print_month(month: u32, rules: &[StrategyRule]) {
    output::section(&month_name(month));
    if rules.is_empty() {
        output::note("No rules: no bets this month");
        return;
    }

    let rows: Vec<RuleRow> = rules.iter().map(RuleRow::from).collect();
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    output::block(&table.to_string());
}

fn month_name(month: u32) -> String {
    u8::try_from(month)
        .ok()
        .and_then(|m| chrono::Month::try_from(m).ok())
        .map_or_else(|| format!("Month {month}"), |m| m.name().to_string())
}
