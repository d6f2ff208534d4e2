use csv::StringRecord;
use serde::Deserialize;
use std::fmt::{Display, Formatter};

/// Dismissal kinds that are recorded against a delivery but not credited
/// to the bowler.
pub const NON_BOWLER_DISMISSALS: [&str; 3] = ["run out", "retired hurt", "obstructing the field"];

/// Winner value some exports use instead of leaving the cell empty.
pub const NO_RESULT_SENTINEL: &str = "No Result";

/// One row of matches.csv. The source files carry more columns than this
/// (city, toss details, umpires, ...); serde drops anything not named here.
#[derive(Debug, Clone, Deserialize)]
pub struct MatchRow {
    pub id: i64,
    pub date: String,
    pub team1: String,
    pub team2: String,
    pub venue: String,
    pub winner: Option<String>,
    pub player_of_match: Option<String>,
}

/// One row of deliveries.csv, after the batter column has been resolved
/// to its canonical name.
#[derive(Debug, Clone)]
pub struct DeliveryRow {
    pub match_id: i64,
    pub bowler: String,
    pub batter: String,
    pub batsman_runs: i64,
    pub dismissal_kind: Option<String>,
}

/// Which label the source data uses for the batter column. Newer exports
/// of the ball-by-ball data say "batter", older ones say "batsman".
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum BatterColumn {
    Batter,
    Batsman,
}

impl BatterColumn {
    /// Probe the delivery header row for a batter column, preferring the
    /// newer label. Returns `None` if neither label is present.
    pub fn resolve(headers: &StringRecord) -> Option<BatterColumn> {
        if headers.iter().any(|h| h == "batter") {
            Some(BatterColumn::Batter)
        } else if headers.iter().any(|h| h == "batsman") {
            Some(BatterColumn::Batsman)
        } else {
            None
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BatterColumn::Batter => "batter",
            BatterColumn::Batsman => "batsman",
        }
    }
}

impl Display for BatterColumn {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefers_batter_over_batsman() {
        let headers = StringRecord::from(vec!["match_id", "batsman", "batter", "bowler"]);
        assert_eq!(BatterColumn::resolve(&headers), Some(BatterColumn::Batter));
    }

    #[test]
    fn falls_back_to_batsman() {
        let headers = StringRecord::from(vec!["match_id", "batsman", "bowler"]);
        assert_eq!(BatterColumn::resolve(&headers), Some(BatterColumn::Batsman));
    }

    #[test]
    fn neither_label_present() {
        let headers = StringRecord::from(vec!["match_id", "striker", "bowler"]);
        assert_eq!(BatterColumn::resolve(&headers), None);
    }
}
