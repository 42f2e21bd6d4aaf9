mod support;

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use support::{fixtures, write_temp, TempFiles};

fn hoopedge(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_hoopedge"))
        .args(args)
        .env("RUST_LOG", "warn")
        .output()
        .expect("run hoopedge")
}

fn combined(output: &Output) -> String {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    format!("{stdout}{stderr}")
}

fn str_path(path: &Path) -> &str {
    path.to_str().expect("utf-8 temp path")
}

/// Writes the shared slate plus an empty config, returning the paths in
/// argument order: config, predictions, odds, teams.
fn slate_files() -> TempFiles {
    TempFiles(vec![
        write_temp("cli-config", "toml", ""),
        write_temp("cli-predictions", "json", fixtures::PREDICTIONS),
        write_temp("cli-odds", "json", fixtures::ODDS),
        write_temp("cli-teams", "json", fixtures::TEAMS),
    ])
}

fn picks_args<'a>(files: &'a TempFiles, format: &'a str) -> Vec<&'a str> {
    vec![
        "picks",
        "--config",
        str_path(&files.0[0]),
        "--date",
        fixtures::SLATE_DATE,
        "--predictions",
        str_path(&files.0[1]),
        "--odds",
        str_path(&files.0[2]),
        "--teams",
        str_path(&files.0[3]),
        "--format",
        format,
    ]
}

#[test]
fn picks_prints_csv_report() {
    let files = slate_files();
    let output = hoopedge(&picks_args(&files, "csv"));
    assert!(output.status.success(), "{}", combined(&output));

    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<_> = stdout.lines().collect();
    assert_eq!(
        lines[0],
        "Game,Game Time,Model Spread,fanduel,betmgm,draftkings,Consensus,Edge,Recommendation,Best Line,Strategy,Why"
    );
    assert_eq!(lines.len(), 3, "unexpected report:\n{stdout}");
    assert!(lines[1].starts_with("Vermont @ Duke,"));
    assert!(lines[2].starts_with("Furman @ Michigan St.,"));
    assert!(lines[2].contains("betmgm: -6.0"));
}

#[test]
fn picks_prints_json_report() {
    let files = slate_files();
    let output = hoopedge(&picks_args(&files, "json"));
    assert!(output.status.success(), "{}", combined(&output));

    let report: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is JSON");
    assert_eq!(report["date"], "20251103");
    assert_eq!(report["month"], 11);
    assert_eq!(report["matched"].as_array().map(Vec::len), Some(2));
    assert_eq!(
        report["recommendations"][0]["rule_name"],
        "November All Favorites"
    );
    assert_eq!(report["recommendations"][0]["direction"], "FAVORITE");
}

#[test]
fn picks_writes_output_file() {
    let files = slate_files();
    let target = write_temp("cli-report", "csv", "");
    let _cleanup = TempFiles(vec![target.clone()]);

    let mut args = picks_args(&files, "csv");
    args.extend(["--output", str_path(&target)]);
    let output = hoopedge(&args);
    assert!(output.status.success(), "{}", combined(&output));

    let written = fs::read_to_string(&target).expect("read report");
    assert_eq!(written.lines().count(), 3);
    assert!(String::from_utf8_lossy(&output.stdout).contains("Wrote 2 picks"));
}

#[test]
fn picks_month_override_silences_january() {
    let files = slate_files();
    let mut args = picks_args(&files, "csv");
    args.extend(["--month", "1"]);
    let output = hoopedge(&args);
    assert!(output.status.success(), "{}", combined(&output));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.lines().count(), 1, "only the header expected:\n{stdout}");
}

#[test]
fn picks_rejects_bad_date() {
    let files = slate_files();
    let mut args = picks_args(&files, "csv");
    args[4] = "03/11/2025";
    let output = hoopedge(&args);

    assert!(!output.status.success(), "Expected nonzero exit code");
    assert!(combined(&output).contains("invalid date"));
}

#[test]
fn check_config_accepts_valid_file() {
    let path = write_temp("cli-check", "toml", "[odds]\nbookmakers = [\"fanduel\"]\n");
    let _cleanup = TempFiles(vec![path.clone()]);

    let output = hoopedge(&["check", "config", "--config", str_path(&path)]);
    assert!(output.status.success(), "{}", combined(&output));
    assert!(String::from_utf8_lossy(&output.stdout).contains("Configuration is valid"));
}

#[test]
fn cli_returns_nonzero_on_config_error() {
    let path = write_temp("cli-check", "toml", "[odds]\nbookmakers = []\n");
    let _cleanup = TempFiles(vec![path.clone()]);

    let output = hoopedge(&["check", "config", "--config", str_path(&path)]);
    assert!(!output.status.success(), "Expected nonzero exit code");

    let text = combined(&output);
    assert!(
        text.contains("invalid value for bookmakers"),
        "Expected error message about bookmakers.\n{text}"
    );
}

#[test]
fn normalize_shows_canonical_names() {
    let path = write_temp("cli-normalize", "toml", "");
    let _cleanup = TempFiles(vec![path.clone()]);

    let output = hoopedge(&[
        "normalize",
        "--config",
        str_path(&path),
        "Michigan St.",
        "Miami (FL)",
        "Duke",
    ]);
    assert!(output.status.success(), "{}", combined(&output));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Michigan State"));
    assert!(stdout.contains("Miami FL"));
    assert!(stdout.contains("(unchanged)"));
}

#[test]
fn strategies_lists_months() {
    let path = write_temp("cli-strategies", "toml", "");
    let _cleanup = TempFiles(vec![path.clone()]);

    let output = hoopedge(&["strategies", "--config", str_path(&path)]);
    assert!(output.status.success(), "{}", combined(&output));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("November"));
    assert!(stdout.contains("March All Underdogs"));
    assert!(stdout.contains("No rules"));
}

#[test]
fn strategies_rejects_invalid_month() {
    let output = hoopedge(&["strategies", "--month", "14"]);
    assert!(!output.status.success(), "Expected nonzero exit code");
    assert!(combined(&output).contains("between 1 and 12"));
}
