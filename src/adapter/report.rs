//! Rendering recommendations as report rows.
//!
//! One row per recommendation. Bookmaker columns follow the configured
//! bookmaker order; a book with no home spread for the game shows `N/A`.

use tabled::builder::Builder;
use tabled::settings::Style;

use crate::domain::strategy::Recommendation;
use crate::domain::{format_points, format_signed, BestLine, Spread};

const NOT_AVAILABLE: &str = "N/A";

/// A flattened, display-ready recommendation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickRow {
    pub game: String,
    pub game_time: String,
    pub model_spread: String,
    /// Home spread per configured bookmaker, in column order.
    pub book_spreads: Vec<String>,
    pub consensus: String,
    pub edge: String,
    pub recommendation: String,
    pub best_line: String,
    pub strategy: String,
    pub why: String,
}

impl PickRow {
    pub fn new(rec: &Recommendation, bookmakers: &[String]) -> Self {
        let game = &rec.game;
        Self {
            game: game.label(),
            game_time: game.commence_time.format("%Y-%m-%d %H:%M UTC").to_string(),
            model_spread: signed_or_na(game.predicted_spread),
            book_spreads: bookmakers
                .iter()
                .map(|book| signed_or_na(game.quote(book).and_then(|q| q.home_spread)))
                .collect(),
            consensus: signed_or_na(game.consensus_spread),
            edge: format_points(rec.edge),
            recommendation: rec.bet_text.clone(),
            best_line: rec
                .best_line
                .as_ref()
                .map_or_else(|| NOT_AVAILABLE.to_string(), describe_line),
            strategy: rec.rule_name.clone(),
            why: rec.rule_description.clone(),
        }
    }

    fn cells(&self) -> Vec<String> {
        let mut cells = vec![
            self.game.clone(),
            self.game_time.clone(),
            self.model_spread.clone(),
        ];
        cells.extend(self.book_spreads.iter().cloned());
        cells.extend([
            self.consensus.clone(),
            self.edge.clone(),
            self.recommendation.clone(),
            self.best_line.clone(),
            self.strategy.clone(),
            self.why.clone(),
        ]);
        cells
    }
}

/// Column headers for the given bookmaker set.
pub fn headers(bookmakers: &[String]) -> Vec<String> {
    let mut headers = vec![
        "Game".to_string(),
        "Game Time".to_string(),
        "Model Spread".to_string(),
    ];
    headers.extend(bookmakers.iter().cloned());
    headers.extend(
        ["Consensus", "Edge", "Recommendation", "Best Line", "Strategy", "Why"]
            .into_iter()
            .map(String::from),
    );
    headers
}

pub fn rows(recommendations: &[Recommendation], bookmakers: &[String]) -> Vec<PickRow> {
    recommendations
        .iter()
        .map(|rec| PickRow::new(rec, bookmakers))
        .collect()
}

/// CSV text with a header line, one record per row.
pub fn render_csv(rows: &[PickRow], bookmakers: &[String]) -> String {
    let mut out = String::new();
    push_csv_line(&mut out, &headers(bookmakers));
    for row in rows {
        push_csv_line(&mut out, &row.cells());
    }
    out
}

/// A terminal table of the rows.
pub fn render_table(rows: &[PickRow], bookmakers: &[String]) -> String {
    let mut builder = Builder::default();
    builder.push_record(headers(bookmakers));
    for row in rows {
        builder.push_record(row.cells());
    }
    builder.build().with(Style::rounded()).to_string()
}

fn signed_or_na(value: Option<Spread>) -> String {
    value.map_or_else(|| NOT_AVAILABLE.to_string(), format_signed)
}

fn describe_line(line: &BestLine) -> String {
    format!("{}: {}", line.bookmaker, format_signed(line.spread))
}

fn push_csv_line(out: &mut String, cells: &[String]) {
    let line: Vec<String> = cells.iter().map(|cell| escape_csv(cell)).collect();
    out.push_str(&line.join(","));
    out.push('\n');
}

fn escape_csv(cell: &str) -> String {
    if cell.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        cell.to_string()
    }
}
