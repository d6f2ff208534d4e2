//! Loader tests over real CSV files written to a temp directory.

use ipldb::ingest::{self, IngestError};
use ipldb::models::BatterColumn;
use ipldb::db;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

// Source files carry more columns than the dashboard uses; these fixtures
// keep a few extras (season, city, inning) to prove they are ignored.
const MATCHES_CSV: &str = "\
id,season,city,date,player_of_match,venue,team1,team2,winner
1,2008,Kolkata,2008-04-18,P1,Eden,A,B,A
2,2008,Kolkata,2008-04-20,,Eden,A,B,
3,2009,Chennai,2009-05-01,P2,Chepauk,B,C,No Result
";

const DELIVERIES_CSV: &str = "\
match_id,inning,batter,bowler,batsman_runs,dismissal_kind
1,1,V,X,4,
1,1,V,X,6,caught
1,2,W,Y,0,run out
";

fn write_dataset(dir: &Path, matches: &str, deliveries: &str) {
    fs::write(dir.join("matches.csv"), matches).unwrap();
    fs::write(dir.join("deliveries.csv"), deliveries).unwrap();
}

#[test]
fn loads_both_tables() {
    let dir = TempDir::new().unwrap();
    write_dataset(dir.path(), MATCHES_CSV, DELIVERIES_CSV);

    let ctx = ingest::load(dir.path()).unwrap();
    assert_eq!(db::total_matches(&ctx).unwrap(), 3);
    assert_eq!(ctx.batter_column(), BatterColumn::Batter);

    let boundaries = db::batter_boundaries(&ctx, "V").unwrap();
    assert_eq!(boundaries.fours, 1);
    assert_eq!(boundaries.sixes, 1);
}

#[test]
fn missing_matches_file_is_fatal() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("deliveries.csv"), DELIVERIES_CSV).unwrap();

    let err = ingest::load(dir.path()).unwrap_err();
    assert!(matches!(err, IngestError::MissingFile(_)));
}

#[test]
fn missing_deliveries_file_is_fatal() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("matches.csv"), MATCHES_CSV).unwrap();

    let err = ingest::load(dir.path()).unwrap_err();
    assert!(matches!(err, IngestError::MissingFile(_)));
}

#[test]
fn falls_back_to_batsman_column() {
    let dir = TempDir::new().unwrap();
    let deliveries = DELIVERIES_CSV.replace("batter", "batsman");
    write_dataset(dir.path(), MATCHES_CSV, &deliveries);

    let ctx = ingest::load(dir.path()).unwrap();
    assert_eq!(ctx.batter_column(), BatterColumn::Batsman);

    // The stored column is canonical, so queries are unchanged.
    assert_eq!(db::batters(&ctx).unwrap(), vec!["V", "W"]);
}

#[test]
fn neither_batter_label_is_fatal() {
    let dir = TempDir::new().unwrap();
    let deliveries = DELIVERIES_CSV.replace("batter", "striker");
    write_dataset(dir.path(), MATCHES_CSV, &deliveries);

    let err = ingest::load(dir.path()).unwrap_err();
    assert!(matches!(err, IngestError::MissingBatterColumn));
}

#[test]
fn dates_are_normalized_for_sorting() {
    let dir = TempDir::new().unwrap();
    let matches = MATCHES_CSV
        .replace("2008-04-18", "18/04/2008")
        .replace("2009-05-01", "01-05-2009");
    write_dataset(dir.path(), &matches, DELIVERIES_CSV);

    let ctx = ingest::load(dir.path()).unwrap();
    let seasons: Vec<String> = db::matches_per_season(&ctx)
        .unwrap()
        .into_iter()
        .map(|c| c.label)
        .collect();
    assert_eq!(seasons, vec!["2008", "2009"]);
}

#[test]
fn unparseable_date_is_fatal() {
    let dir = TempDir::new().unwrap();
    let matches = MATCHES_CSV.replace("2008-04-18", "sometime in April");
    write_dataset(dir.path(), &matches, DELIVERIES_CSV);

    let err = ingest::load(dir.path()).unwrap_err();
    assert!(matches!(err, IngestError::BadDate(_)));
}

#[test]
fn empty_winner_counts_as_no_result() {
    // Match 2 has an empty winner cell and match 3 the sentinel string;
    // both are no-results, never the literal strings "" or "null".
    let dir = TempDir::new().unwrap();
    write_dataset(dir.path(), MATCHES_CSV, DELIVERIES_CSV);

    let ctx = ingest::load(dir.path()).unwrap();
    let summary = db::team_summary(&ctx, "A").unwrap();
    assert_eq!(summary.total, 2);
    assert_eq!(summary.wins, 1);
    assert_eq!(summary.no_result, 1);
    assert_eq!(summary.losses(), 0);

    let b = db::team_summary(&ctx, "B").unwrap();
    assert_eq!(b.no_result, 2);
}

#[test]
fn empty_player_of_match_is_not_a_player() {
    let dir = TempDir::new().unwrap();
    write_dataset(dir.path(), MATCHES_CSV, DELIVERIES_CSV);

    let ctx = ingest::load(dir.path()).unwrap();
    let top = db::top_players_of_match(&ctx, 10).unwrap();
    let mut labels: Vec<&str> = top.iter().map(|c| c.label.as_str()).collect();
    labels.sort();
    assert_eq!(labels, vec!["P1", "P2"]);
}

#[test]
fn non_numeric_runs_are_fatal() {
    let dir = TempDir::new().unwrap();
    let deliveries = DELIVERIES_CSV.replace("1,1,V,X,4,", "1,1,V,X,four,");
    write_dataset(dir.path(), MATCHES_CSV, &deliveries);

    let err = ingest::load(dir.path()).unwrap_err();
    assert!(matches!(err, IngestError::BadInt { .. }));
}
