use rocket::{State, get, uri};
use rocket_dyn_templates::{Template, context};
use serde::Serialize;

use crate::db::DataContext;
use crate::web::error::AppError;
use crate::web::utility_contexts::{BarChartContext, PieChartContext};
use crate::{awards, db};

#[get("/")]
pub async fn index_page(ctx: &State<DataContext>) -> Result<Template, AppError> {
    let total_matches = db::total_matches(ctx)?;
    let season_chart = BarChartContext::from_counts(db::matches_per_season(ctx)?);
    let pom_chart = BarChartContext::from_counts(db::top_players_of_match(ctx, 10)?);

    // Selector sources for every other view.
    let teams = db::teams(ctx)?;
    let batters = db::batters(ctx)?;
    let bowlers = db::bowlers(ctx)?;

    Ok(Template::render(
        "index",
        context! {
            index_url: uri!(index_page()),
            total_matches: total_matches,
            season_chart: season_chart,
            pom_chart: pom_chart,
            teams: teams,
            batters: batters,
            bowlers: bowlers,
            award_seasons: awards::SEASON_AWARDS.iter().map(|s| s.season).collect::<Vec<_>>(),
            default_season: awards::latest().season,
            batter_column: ctx.batter_column().label(),
        },
    ))
}

#[get("/team?<name>")]
pub async fn team_page(name: &str, ctx: &State<DataContext>) -> Result<Template, AppError> {
    let summary = db::team_summary(ctx, name)?;
    let venues = db::winning_venues(ctx, name, 10)?;

    let result_pie = PieChartContext::from_counts([
        ("Wins".to_string(), summary.wins),
        ("Losses".to_string(), summary.losses()),
        ("No Result".to_string(), summary.no_result),
    ]);

    Ok(Template::render(
        "team",
        context! {
            index_url: uri!(index_page()),
            team: name,
            total_matches: summary.total,
            wins: summary.wins,
            losses: summary.losses(),
            no_result: summary.no_result,
            result_pie: result_pie,
            venue_chart: BarChartContext::from_counts(venues),
        },
    ))
}

#[get("/h2h?<team_a>&<team_b>")]
pub async fn h2h_page(
    team_a: &str,
    team_b: &str,
    ctx: &State<DataContext>,
) -> Result<Template, AppError> {
    // Guarded no-op: same team on both sides runs no query at all.
    if team_a == team_b {
        return Ok(Template::render(
            "h2h",
            context! {
                index_url: uri!(index_page()),
                team_a: team_a,
                team_b: team_b,
                same_team: true,
            },
        ));
    }

    let h2h = db::head_to_head(ctx, team_a, team_b)?;

    Ok(Template::render(
        "h2h",
        context! {
            index_url: uri!(index_page()),
            team_a: team_a,
            team_b: team_b,
            same_team: false,
            total_matches: h2h.total,
            team_a_wins: h2h.team_a_wins,
            team_b_wins: h2h.team_b_wins,
            no_result: h2h.no_result(),
        },
    ))
}

#[get("/batter?<name>")]
pub async fn batter_page(name: &str, ctx: &State<DataContext>) -> Result<Template, AppError> {
    let boundaries = db::batter_boundaries(ctx, name)?;
    let per_season = db::batter_boundaries_per_season(ctx, name)?;

    let boundary_pie = PieChartContext::from_counts([
        ("Fours".to_string(), boundaries.fours),
        ("Sixes".to_string(), boundaries.sixes),
    ]);

    Ok(Template::render(
        "batter",
        context! {
            index_url: uri!(index_page()),
            batter: name,
            fours: boundaries.fours,
            sixes: boundaries.sixes,
            has_boundaries: boundaries.any(),
            boundary_pie: boundary_pie,
            season_chart: BarChartContext::from_counts(per_season),
        },
    ))
}

#[get("/bowler?<name>")]
pub async fn bowler_page(name: &str, ctx: &State<DataContext>) -> Result<Template, AppError> {
    let summary = db::bowler_summary(ctx, name)?;
    let breakdown = db::wicket_breakdown(ctx, name)?;

    let wicket_pie =
        PieChartContext::from_counts(breakdown.into_iter().map(|c| (c.label, c.count)));

    Ok(Template::render(
        "bowler",
        context! {
            index_url: uri!(index_page()),
            bowler: name,
            total_wickets: summary.wickets,
            overs: summary.overs(),
            wicket_pie: wicket_pie,
        },
    ))
}

#[get("/season?<year>")]
pub async fn season_page(
    year: Option<i32>,
    ctx: &State<DataContext>,
) -> Result<Template, AppError> {
    #[derive(Serialize)]
    struct AwardsContext {
        season: i32,
        winner: &'static str,
        runner_up: &'static str,
        player_of_series: &'static str,
        purple_cap: &'static str,
        emerging_player: &'static str,
    }

    // The selector covers every season seen in the data plus every season
    // with award records; they usually coincide.
    let data_seasons = db::seasons(ctx)?;
    let mut seasons: Vec<i32> = data_seasons.iter().filter_map(|s| s.parse().ok()).collect();
    for s in &awards::SEASON_AWARDS {
        if !seasons.contains(&s.season) {
            seasons.push(s.season);
        }
    }
    seasons.sort_unstable();

    // Default to the most recent season on record.
    let year = match year {
        Some(year) => year,
        None => seasons
            .last()
            .copied()
            .unwrap_or_else(|| awards::latest().season),
    };

    let matches_played = db::matches_in_season(ctx, &year.to_string())?;
    let awards_row = awards::for_season(year).map(|s| AwardsContext {
        season: s.season,
        winner: s.winner,
        runner_up: s.runner_up,
        player_of_series: s.player_of_series,
        purple_cap: s.purple_cap,
        emerging_player: s.emerging_player,
    });

    Ok(Template::render(
        "season",
        context! {
            index_url: uri!(index_page()),
            year: year,
            matches_played: matches_played,
            awards: awards_row,
            seasons: seasons,
        },
    ))
}
