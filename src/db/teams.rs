use super::{collect_category_counts, collect_strings, CategoryCount, DataContext};
use serde::Serialize;

/// Win/loss/no-result split for one team.
///
/// Losses are derived, never queried, so the three stored counts are the
/// source of truth. A no-result match is one whose winner is NULL, empty,
/// or the "No Result" sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TeamSummary {
    pub total: i64,
    pub wins: i64,
    pub no_result: i64,
}

impl TeamSummary {
    pub fn losses(&self) -> i64 {
        self.total - self.wins - self.no_result
    }
}

/// Head-to-head split between two teams, over the matches where they were
/// the two participants in either order. No-result is derived the same way
/// losses are in `TeamSummary`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HeadToHead {
    pub total: i64,
    pub team_a_wins: i64,
    pub team_b_wins: i64,
}

impl HeadToHead {
    pub fn no_result(&self) -> i64 {
        self.total - self.team_a_wins - self.team_b_wins
    }
}

/// Distinct team names for the selectors, alphabetical. Every team hosts
/// at least one match over a full round-robin season, so team1 alone
/// covers the league.
pub fn teams(ctx: &DataContext) -> rusqlite::Result<Vec<String>> {
    ctx.with_conn(|conn| {
        collect_strings(conn, "SELECT DISTINCT team1 FROM matches ORDER BY team1")
    })
}

pub fn team_summary(ctx: &DataContext, team: &str) -> rusqlite::Result<TeamSummary> {
    ctx.with_conn(|conn| {
        conn.query_row(
            "SELECT
                COUNT(*) AS total_matches,
                COUNT(CASE WHEN winner = ?1 THEN 1 END) AS wins,
                COUNT(CASE WHEN winner IS NULL OR winner IN ('', 'No Result') THEN 1 END)
                    AS no_result
             FROM matches
             WHERE team1 = ?1 OR team2 = ?1",
            [team],
            |row| {
                Ok(TeamSummary {
                    total: row.get(0)?,
                    wins: row.get(1)?,
                    no_result: row.get(2)?,
                })
            },
        )
    })
}

/// The venues where a team has won the most, descending.
pub fn winning_venues(
    ctx: &DataContext,
    team: &str,
    limit: u32,
) -> rusqlite::Result<Vec<CategoryCount>> {
    ctx.with_conn(|conn| {
        collect_category_counts(
            conn,
            "SELECT venue, COUNT(*) AS wins_at_venue
             FROM matches
             WHERE winner = ?1
             GROUP BY venue
             ORDER BY wins_at_venue DESC
             LIMIT ?2",
            &[&team, &limit],
        )
    })
}

/// Callers must guard the a == b case before calling; the query would
/// happily return that team's self-matches (zero of them).
pub fn head_to_head(ctx: &DataContext, team_a: &str, team_b: &str) -> rusqlite::Result<HeadToHead> {
    ctx.with_conn(|conn| {
        conn.query_row(
            "SELECT
                COUNT(*) AS total_matches,
                COUNT(CASE WHEN winner = ?1 THEN 1 END) AS team_a_wins,
                COUNT(CASE WHEN winner = ?2 THEN 1 END) AS team_b_wins
             FROM matches
             WHERE (team1 = ?1 AND team2 = ?2) OR (team1 = ?2 AND team2 = ?1)",
            [team_a, team_b],
            |row| {
                Ok(HeadToHead {
                    total: row.get(0)?,
                    team_a_wins: row.get(1)?,
                    team_b_wins: row.get(2)?,
                })
            },
        )
    })
}
