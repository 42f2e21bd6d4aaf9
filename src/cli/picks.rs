//! Handler for `hoopedge picks`.

use chrono::Utc;
use tracing::info;

use crate::adapter::report::{render_csv, render_table, rows};
use crate::adapter::{teams, JsonPredictionSource, OddsApiFileSource};
use crate::app::{parse_slate_date, slate_month, PickReport, PickRun};
use crate::cli::output;
use crate::cli::{PicksArgs, ReportFormat};
use crate::config::Config;
use crate::error::Result;

/// Run the pick pipeline for one slate and emit the report.
pub async fn execute(config: &Config, args: &PicksArgs) -> Result<()> {
    let date = match &args.date {
        Some(value) => parse_slate_date(value)?,
        None => Utc::now().date_naive(),
    };
    let month = slate_month(date, args.month);

    let bookmakers = config.odds.bookmakers.clone();
    let run = PickRun::new(
        Box::new(JsonPredictionSource::new(&args.predictions)),
        Box::new(OddsApiFileSource::new(&args.odds, bookmakers.clone())),
        config.game_matcher()?,
        config.rule_engine()?,
        teams::load_or_fallback(args.teams.as_deref()),
        config.odds.sport.clone(),
    );
    let report = run.run(date, month).await?;

    let rendered = render(&report, &bookmakers, args.format)?;
    if let Some(path) = &args.output {
        std::fs::write(path, &rendered)?;
        info!(path = %path.display(), picks = report.recommendations.len(), "Report written");
        output::success(&format!(
            "Wrote {} picks to {}",
            report.recommendations.len(),
            path.display()
        ));
        return Ok(());
    }

    match args.format {
        ReportFormat::Table => print_summary(&report, &rendered),
        ReportFormat::Csv => print!("{rendered}"),
        ReportFormat::Json => println!("{rendered}"),
    }
    Ok(())
}

fn render(report: &PickReport, bookmakers: &[String], format: ReportFormat) -> Result<String> {
    let rows = rows(&report.recommendations, bookmakers);
    Ok(match format {
        ReportFormat::Table => render_table(&rows, bookmakers),
        ReportFormat::Csv => render_csv(&rows, bookmakers),
        ReportFormat::Json => serde_json::to_string_pretty(report)?,
    })
}

fn print_summary(report: &PickReport, table: &str) {
    output::header(env!("CARGO_PKG_VERSION"));
    output::section(&format!("Picks for {}", report.date));
    output::field("Month", report.month);
    output::field("Predictions", report.predictions);
    output::field("Odds", report.odds);
    output::field("Matched", report.matched.len());
    output::field("Picks", output::highlight(report.recommendations.len()));

    if report.recommendations.is_empty() {
        println!();
        output::note("No games met this month's strategy criteria");
        return;
    }

    println!();
    output::block(table);
}
