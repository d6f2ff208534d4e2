use crate::db::DataContext;
use crate::models::{BatterColumn, DeliveryRow, MatchRow};
use chrono::NaiveDate;
use csv::StringRecord;
use log::info;
use std::path::{Path, PathBuf};
use thiserror::Error;

const MATCHES_FILE: &str = "matches.csv";
const DELIVERIES_FILE: &str = "deliveries.csv";

/// Date formats seen across the various exports of the match data. The
/// stored form is always ISO so lexical sort equals chronological sort.
const DATE_FORMATS: [&str; 5] = ["%Y-%m-%d", "%d/%m/%Y", "%d-%m-%Y", "%m/%d/%Y", "%Y/%m/%d"];

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("{} not found; matches.csv and deliveries.csv must both be in the data directory", .0.display())]
    MissingFile(PathBuf),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error("unparseable date {0:?} in matches.csv")]
    BadDate(String),

    #[error("deliveries.csv has no 'batter' or 'batsman' column")]
    MissingBatterColumn,

    #[error("deliveries.csv has no {0:?} column")]
    MissingColumn(&'static str),

    #[error("deliveries.csv row {row}: {column} value {value:?} is not an integer")]
    BadInt {
        row: u64,
        column: &'static str,
        value: String,
    },

    #[error(transparent)]
    Sqlite(#[from] rusqlite::Error),
}

/// Load both CSV files from `data_dir` into a fresh in-memory store. Any
/// failure is fatal: there is no partial dashboard.
pub fn load(data_dir: &Path) -> Result<DataContext, IngestError> {
    let matches = read_matches(&data_dir.join(MATCHES_FILE))?;
    let (batter_column, deliveries) = read_deliveries(&data_dir.join(DELIVERIES_FILE))?;

    info!(
        "Loaded {} matches and {} deliveries from {}",
        matches.len(),
        deliveries.len(),
        data_dir.display(),
    );

    Ok(DataContext::new(&matches, &deliveries, batter_column)?)
}

/// Normalize a source date to ISO `YYYY-MM-DD`, trying each known format.
fn normalize_date(raw: &str) -> Option<String> {
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw.trim(), fmt).ok())
        .map(|date| date.format("%Y-%m-%d").to_string())
}

fn read_matches(path: &Path) -> Result<Vec<MatchRow>, IngestError> {
    if !path.is_file() {
        return Err(IngestError::MissingFile(path.to_path_buf()));
    }

    let mut reader = csv::Reader::from_path(path)?;
    let mut matches = Vec::new();
    for result in reader.deserialize() {
        let mut row: MatchRow = result?;
        row.date =
            normalize_date(&row.date).ok_or_else(|| IngestError::BadDate(row.date.clone()))?;
        matches.push(row);
    }
    Ok(matches)
}

/// Column positions in deliveries.csv, resolved once from the header row.
/// Every subsequent record is read through this mapping, so the batter
/// fallback never leaks into query code.
struct DeliveryHeader {
    batter_column: BatterColumn,
    match_id: usize,
    bowler: usize,
    batter: usize,
    batsman_runs: usize,
    dismissal_kind: usize,
}

impl DeliveryHeader {
    fn resolve(headers: &StringRecord) -> Result<DeliveryHeader, IngestError> {
        let position = |name: &'static str| {
            headers
                .iter()
                .position(|h| h == name)
                .ok_or(IngestError::MissingColumn(name))
        };

        let batter_column =
            BatterColumn::resolve(headers).ok_or(IngestError::MissingBatterColumn)?;

        Ok(DeliveryHeader {
            batter_column,
            match_id: position("match_id")?,
            bowler: position("bowler")?,
            batter: position(batter_column.label())?,
            batsman_runs: position("batsman_runs")?,
            dismissal_kind: position("dismissal_kind")?,
        })
    }

    fn row(&self, record: &StringRecord, line: u64) -> Result<DeliveryRow, IngestError> {
        let field = |idx: usize| record.get(idx).unwrap_or("");

        let int = |idx: usize, column: &'static str| {
            field(idx)
                .parse::<i64>()
                .map_err(|_| IngestError::BadInt {
                    row: line,
                    column,
                    value: field(idx).to_string(),
                })
        };

        // Empty cells in nullable columns become SQL NULL, never "".
        let dismissal_kind = match field(self.dismissal_kind) {
            "" => None,
            kind => Some(kind.to_string()),
        };

        Ok(DeliveryRow {
            match_id: int(self.match_id, "match_id")?,
            bowler: field(self.bowler).to_string(),
            batter: field(self.batter).to_string(),
            batsman_runs: int(self.batsman_runs, "batsman_runs")?,
            dismissal_kind,
        })
    }
}

fn read_deliveries(path: &Path) -> Result<(BatterColumn, Vec<DeliveryRow>), IngestError> {
    if !path.is_file() {
        return Err(IngestError::MissingFile(path.to_path_buf()));
    }

    let mut reader = csv::Reader::from_path(path)?;
    let header = DeliveryHeader::resolve(reader.headers()?)?;

    let mut deliveries = Vec::new();
    for result in reader.records() {
        let record = result?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);
        deliveries.push(header.row(&record, line)?);
    }

    info!(
        "deliveries.csv identifies batters with the {:?} column",
        header.batter_column.label(),
    );

    Ok((header.batter_column, deliveries))
}
