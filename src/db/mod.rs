mod league;
mod players;
mod teams;

pub use league::{
    matches_in_season, matches_per_season, seasons, top_players_of_match, total_matches,
};
pub use players::{
    batter_boundaries, batter_boundaries_per_season, batters, bowler_summary, bowlers,
    wicket_breakdown, Boundaries, BowlerSummary,
};
pub use teams::{head_to_head, team_summary, teams, winning_venues, HeadToHead, TeamSummary};

use crate::models::{BatterColumn, DeliveryRow, MatchRow};
use log::info;
use parking_lot::Mutex;
use rusqlite::Connection;
use serde::Serialize;

/// The shared, read-only query context: an in-memory SQLite database
/// holding the two tables, populated once at startup.
///
/// Access is serialized through a `Mutex` because `rusqlite::Connection`
/// is not `Sync`; nothing mutates the tables after construction.
#[derive(Debug)]
pub struct DataContext {
    conn: Mutex<Connection>,
    batter_column: BatterColumn,
}

impl DataContext {
    /// Build the two tables and load every row inside a single transaction
    /// per table. The delivery rows must already carry the canonical batter
    /// field; `batter_column` records which source label it came from.
    pub fn new(
        matches: &[MatchRow],
        deliveries: &[DeliveryRow],
        batter_column: BatterColumn,
    ) -> rusqlite::Result<Self> {
        let mut conn = Connection::open_in_memory()?;

        conn.execute_batch(
            "CREATE TABLE matches (
                id INTEGER PRIMARY KEY,
                date TEXT NOT NULL,
                team1 TEXT NOT NULL,
                team2 TEXT NOT NULL,
                venue TEXT NOT NULL,
                winner TEXT,
                player_of_match TEXT
            );
            CREATE TABLE deliveries (
                match_id INTEGER NOT NULL,
                bowler TEXT NOT NULL,
                batter TEXT NOT NULL,
                batsman_runs INTEGER NOT NULL,
                dismissal_kind TEXT
            );",
        )?;

        let tx = conn.transaction()?;
        {
            let mut stmt = tx.prepare(
                "INSERT INTO matches (id, date, team1, team2, venue, winner, player_of_match)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            )?;
            for m in matches {
                stmt.execute(rusqlite::params![
                    m.id,
                    m.date,
                    m.team1,
                    m.team2,
                    m.venue,
                    m.winner,
                    m.player_of_match,
                ])?;
            }
        }
        tx.commit()?;

        let tx = conn.transaction()?;
        {
            let mut stmt = tx.prepare(
                "INSERT INTO deliveries (match_id, bowler, batter, batsman_runs, dismissal_kind)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
            )?;
            for d in deliveries {
                stmt.execute(rusqlite::params![
                    d.match_id,
                    d.bowler,
                    d.batter,
                    d.batsman_runs,
                    d.dismissal_kind,
                ])?;
            }
        }
        tx.commit()?;

        info!(
            "Data context ready: {} matches, {} deliveries (batter column: {})",
            matches.len(),
            deliveries.len(),
            batter_column,
        );

        Ok(DataContext {
            conn: Mutex::new(conn),
            batter_column,
        })
    }

    /// Which label the source data used for the batter column. The stored
    /// column is always the canonical `batter`; this is diagnostic only.
    pub fn batter_column(&self) -> BatterColumn {
        self.batter_column
    }

    pub(crate) fn with_conn<T>(
        &self,
        f: impl FnOnce(&Connection) -> rusqlite::Result<T>,
    ) -> rusqlite::Result<T> {
        let conn = self.conn.lock();
        f(&conn)
    }
}

/// One bar of a grouped count: a category label and how many rows fell
/// into it. The label can also be a season year.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryCount {
    pub label: String,
    pub count: i64,
}

pub(crate) fn collect_category_counts(
    conn: &Connection,
    sql: &str,
    params: &[&dyn rusqlite::ToSql],
) -> rusqlite::Result<Vec<CategoryCount>> {
    let mut stmt = conn.prepare(sql)?;
    let rows = stmt.query_map(params, |row| {
        Ok(CategoryCount {
            label: row.get(0)?,
            count: row.get(1)?,
        })
    })?;
    rows.collect()
}

pub(crate) fn collect_strings(
    conn: &Connection,
    sql: &str,
) -> rusqlite::Result<Vec<String>> {
    let mut stmt = conn.prepare(sql)?;
    let rows = stmt.query_map([], |row| row.get(0))?;
    rows.collect()
}
