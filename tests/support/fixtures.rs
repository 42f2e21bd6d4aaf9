//! A small November slate shared by the pipeline and CLI tests.
//!
//! Three predictions, two of which have odds:
//! - Vermont @ Duke: model 21.0, market 18.0 -> favorite edge of 3.0
//! - Furman @ Michigan St.: model 10.0, market 6.0 -> favorite edge of 4.0
//! - Idaho @ Montana: no odds listed

pub const SLATE_DATE: &str = "20251103";

pub const PREDICTIONS: &str = r#"[
  {"away_team": "Vermont", "home_team": "Duke", "predicted_spread": 21.0,
   "home_win_probability": 96.5, "date": "20251103"},
  {"away_team": "Furman", "home_team": "Michigan St.", "predicted_spread": 10.0,
   "home_win_probability": 81.0, "date": "20251103"},
  {"away_team": "Idaho", "home_team": "Montana", "predicted_spread": 4.5,
   "date": "20251103"},
  {"away_team": "Kansas", "home_team": "Kentucky", "predicted_spread": 1.5,
   "date": "20251104"}
]"#;

pub const ODDS: &str = r#"[
  {
    "id": "evt-duke",
    "sport_key": "basketball_ncaab",
    "commence_time": "2025-11-04T00:00:00Z",
    "home_team": "Duke Blue Devils",
    "away_team": "Vermont Catamounts",
    "bookmakers": [
      {"key": "fanduel", "markets": [{"key": "spreads", "outcomes": [
        {"name": "Duke Blue Devils", "price": -110, "point": -18.5},
        {"name": "Vermont Catamounts", "price": -110, "point": 18.5}]}]},
      {"key": "draftkings", "markets": [{"key": "spreads", "outcomes": [
        {"name": "Duke Blue Devils", "price": -105, "point": -17.5},
        {"name": "Vermont Catamounts", "price": -115, "point": 17.5}]}]}
    ]
  },
  {
    "id": "evt-msu",
    "sport_key": "basketball_ncaab",
    "commence_time": "2025-11-04T01:30:00Z",
    "home_team": "Michigan State Spartans",
    "away_team": "Furman Paladins",
    "bookmakers": [
      {"key": "betmgm", "markets": [{"key": "spreads", "outcomes": [
        {"name": "Michigan State Spartans", "point": -6.0},
        {"name": "Furman Paladins", "point": 6.0}]}]}
    ]
  }
]"#;

pub const TEAMS: &str = r#"{
  "Duke": "Major",
  "Michigan State": "Major",
  "Vermont": "Minor",
  "Furman": "Minor"
}"#;
