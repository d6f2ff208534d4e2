use super::{collect_category_counts, collect_strings, CategoryCount, DataContext};

pub fn total_matches(ctx: &DataContext) -> rusqlite::Result<i64> {
    ctx.with_conn(|conn| {
        conn.query_row("SELECT COUNT(DISTINCT id) FROM matches", [], |row| {
            row.get(0)
        })
    })
}

/// Match counts grouped by calendar year of the match date, oldest first.
/// Relies on the loader having normalized dates to ISO format.
pub fn matches_per_season(ctx: &DataContext) -> rusqlite::Result<Vec<CategoryCount>> {
    ctx.with_conn(|conn| {
        collect_category_counts(
            conn,
            "SELECT STRFTIME('%Y', date) AS season, COUNT(id)
             FROM matches
             GROUP BY season
             ORDER BY season",
            &[],
        )
    })
}

/// Distinct seasons, oldest first. The UI defaults to the last entry.
pub fn seasons(ctx: &DataContext) -> rusqlite::Result<Vec<String>> {
    ctx.with_conn(|conn| {
        collect_strings(
            conn,
            "SELECT DISTINCT STRFTIME('%Y', date) AS season
             FROM matches
             ORDER BY season",
        )
    })
}

/// How many matches were played in one season year.
pub fn matches_in_season(ctx: &DataContext, season: &str) -> rusqlite::Result<i64> {
    ctx.with_conn(|conn| {
        conn.query_row(
            "SELECT COUNT(id) FROM matches WHERE STRFTIME('%Y', date) = ?1",
            [season],
            |row| row.get(0),
        )
    })
}

/// The players with the most player-of-the-match awards, most first.
pub fn top_players_of_match(
    ctx: &DataContext,
    limit: u32,
) -> rusqlite::Result<Vec<CategoryCount>> {
    ctx.with_conn(|conn| {
        collect_category_counts(
            conn,
            "SELECT player_of_match, COUNT(*) AS pom_count
             FROM matches
             WHERE player_of_match IS NOT NULL
             GROUP BY player_of_match
             ORDER BY pom_count DESC
             LIMIT ?1",
            &[&limit],
        )
    })
}
