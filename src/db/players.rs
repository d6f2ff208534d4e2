use super::{collect_category_counts, collect_strings, CategoryCount, DataContext};
use crate::models::NON_BOWLER_DISMISSALS;
use serde::Serialize;

/// Boundary counts for one batter. A batter with no boundaries is a valid
/// all-zeros result, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Boundaries {
    pub fours: i64,
    pub sixes: i64,
}

impl Boundaries {
    pub fn any(&self) -> bool {
        self.fours > 0 || self.sixes > 0
    }
}

/// Career wickets and balls bowled for one bowler. Wickets only count
/// dismissals credited to the bowler.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BowlerSummary {
    pub wickets: i64,
    pub balls: i64,
}

impl BowlerSummary {
    /// Overs in the usual cricket notation: complete six-ball overs, then
    /// a dot, then leftover balls. 37 balls is "6.1"; no balls is "0.0".
    pub fn overs(&self) -> String {
        format!("{}.{}", self.balls / 6, self.balls % 6)
    }
}

pub fn batters(ctx: &DataContext) -> rusqlite::Result<Vec<String>> {
    ctx.with_conn(|conn| {
        collect_strings(conn, "SELECT DISTINCT batter FROM deliveries ORDER BY batter")
    })
}

pub fn bowlers(ctx: &DataContext) -> rusqlite::Result<Vec<String>> {
    ctx.with_conn(|conn| {
        collect_strings(conn, "SELECT DISTINCT bowler FROM deliveries ORDER BY bowler")
    })
}

pub fn batter_boundaries(ctx: &DataContext, batter: &str) -> rusqlite::Result<Boundaries> {
    ctx.with_conn(|conn| {
        conn.query_row(
            "SELECT
                COALESCE(SUM(CASE WHEN batsman_runs = 4 THEN 1 ELSE 0 END), 0) AS fours,
                COALESCE(SUM(CASE WHEN batsman_runs = 6 THEN 1 ELSE 0 END), 0) AS sixes
             FROM deliveries
             WHERE batter = ?1",
            [batter],
            |row| {
                Ok(Boundaries {
                    fours: row.get(0)?,
                    sixes: row.get(1)?,
                })
            },
        )
    })
}

pub fn bowler_summary(ctx: &DataContext, bowler: &str) -> rusqlite::Result<BowlerSummary> {
    ctx.with_conn(|conn| {
        conn.query_row(
            "SELECT
                COUNT(CASE WHEN dismissal_kind IS NOT NULL
                            AND dismissal_kind NOT IN (?2, ?3, ?4) THEN 1 END) AS total_wickets,
                COUNT(*) AS total_balls
             FROM deliveries
             WHERE bowler = ?1",
            rusqlite::params![
                bowler,
                NON_BOWLER_DISMISSALS[0],
                NON_BOWLER_DISMISSALS[1],
                NON_BOWLER_DISMISSALS[2],
            ],
            |row| {
                Ok(BowlerSummary {
                    wickets: row.get(0)?,
                    balls: row.get(1)?,
                })
            },
        )
    })
}

/// A batter's boundary count per season, oldest first. This is the one
/// view that needs both tables: deliveries carry the runs, matches carry
/// the date.
pub fn batter_boundaries_per_season(
    ctx: &DataContext,
    batter: &str,
) -> rusqlite::Result<Vec<CategoryCount>> {
    ctx.with_conn(|conn| {
        collect_category_counts(
            conn,
            "SELECT STRFTIME('%Y', m.date) AS season, COUNT(*) AS boundaries
             FROM deliveries d
             JOIN matches m ON d.match_id = m.id
             WHERE d.batter = ?1 AND d.batsman_runs IN (4, 6)
             GROUP BY season
             ORDER BY season",
            &[&batter],
        )
    })
}

/// A bowler's credited wickets grouped by dismissal kind, most common
/// first. Non-credited kinds never appear, so the counts here always sum
/// to `BowlerSummary::wickets`.
pub fn wicket_breakdown(ctx: &DataContext, bowler: &str) -> rusqlite::Result<Vec<CategoryCount>> {
    ctx.with_conn(|conn| {
        collect_category_counts(
            conn,
            "SELECT dismissal_kind, COUNT(*) AS wicket_count
             FROM deliveries
             WHERE bowler = ?1
               AND dismissal_kind IS NOT NULL
               AND dismissal_kind NOT IN (?2, ?3, ?4)
             GROUP BY dismissal_kind
             ORDER BY wicket_count DESC",
            &[
                &bowler,
                &NON_BOWLER_DISMISSALS[0],
                &NON_BOWLER_DISMISSALS[1],
                &NON_BOWLER_DISMISSALS[2],
            ],
        )
    })
}
