//! Route tests through Rocket's local client, rendering real templates.

use ipldb::db::DataContext;
use ipldb::models::{BatterColumn, DeliveryRow, MatchRow};
use ipldb::web;
use rocket::http::Status;
use rocket::local::blocking::Client;

fn client() -> Client {
    let matches = vec![
        MatchRow {
            id: 1,
            date: "2008-04-18".to_string(),
            team1: "A".to_string(),
            team2: "B".to_string(),
            venue: "Eden".to_string(),
            winner: Some("A".to_string()),
            player_of_match: Some("P1".to_string()),
        },
        MatchRow {
            id: 2,
            date: "2008-04-20".to_string(),
            team1: "B".to_string(),
            team2: "A".to_string(),
            venue: "Eden".to_string(),
            winner: None,
            player_of_match: None,
        },
    ];
    let deliveries = vec![
        DeliveryRow {
            match_id: 1,
            bowler: "X".to_string(),
            batter: "V".to_string(),
            batsman_runs: 4,
            dismissal_kind: None,
        },
        DeliveryRow {
            match_id: 1,
            bowler: "X".to_string(),
            batter: "V".to_string(),
            batsman_runs: 0,
            dismissal_kind: Some("bowled".to_string()),
        },
    ];

    let context = DataContext::new(&matches, &deliveries, BatterColumn::Batter)
        .expect("fixture load failed");

    let rocket = rocket::build()
        .mount("/", web::routes())
        .manage(context)
        .attach(web::template_fairing());

    Client::tracked(rocket).expect("valid rocket instance")
}

#[test]
fn index_renders_league_stats() {
    let client = client();
    let response = client.get("/").dispatch();
    assert_eq!(response.status(), Status::Ok);

    let body = response.into_string().unwrap();
    assert!(body.contains("Total matches played"));
    assert!(body.contains("2008"));
}

#[test]
fn same_team_h2h_is_guarded() {
    let client = client();
    let response = client.get("/h2h?team_a=A&team_b=A").dispatch();
    assert_eq!(response.status(), Status::Ok);

    let body = response.into_string().unwrap();
    assert!(body.contains("two different teams"));
    // No metrics are rendered for the guarded case.
    assert!(!body.contains("Total H2H matches"));
}

#[test]
fn h2h_renders_metrics_for_distinct_teams() {
    let client = client();
    let response = client.get("/h2h?team_a=A&team_b=B").dispatch();
    assert_eq!(response.status(), Status::Ok);

    let body = response.into_string().unwrap();
    assert!(body.contains("Total H2H matches"));
    assert!(body.contains("A wins"));
}

#[test]
fn unknown_team_renders_no_data_not_an_error() {
    let client = client();
    let response = client.get("/team?name=Nobody").dispatch();
    assert_eq!(response.status(), Status::Ok);

    let body = response.into_string().unwrap();
    assert!(body.contains("No matches found for this team"));
}

#[test]
fn bowler_page_shows_overs_and_wickets() {
    let client = client();
    let response = client.get("/bowler?name=X").dispatch();
    assert_eq!(response.status(), Status::Ok);

    let body = response.into_string().unwrap();
    assert!(body.contains("0.2"));
    assert!(body.contains("bowled"));
}

#[test]
fn season_page_defaults_to_most_recent() {
    let client = client();
    let response = client.get("/season").dispatch();
    assert_eq!(response.status(), Status::Ok);

    let body = response.into_string().unwrap();
    assert!(body.contains("2024"));
    assert!(body.contains("KKR"));
}
