use actix_web::http::StatusCode;
use actix_web::test;
use backend::AppError;
use serde_json::json;

use crate::common::{assert_problem, get_json, post_json};
use crate::support::factory::create_ready_match;
use crate::support::{build_test_state, create_test_app};

#[actix_web::test]
async fn summary_nests_overs_and_builds_scorecard() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let db = backend::db::require_db(&state)?;
    let game = create_ready_match(db, Some(20)).await?;
    let app = create_test_app(state).with_prod_routes().build().await?;
    let uri = format!("/api/matches/{}/deliveries", game.match_id);
    let (s, n, t, b) = (
        game.team1_xi[0],
        game.team1_xi[1],
        game.team1_xi[2],
        game.team2_xi[10],
    );

    let balls = [
        json!({"striker_id": s, "non_striker_id": n, "bowler_id": b, "runs_off_bat": 4}),
        json!({"striker_id": s, "non_striker_id": n, "bowler_id": b, "runs_off_bat": 1}),
        json!({"striker_id": n, "non_striker_id": s, "bowler_id": b, "runs_off_bat": 6}),
        json!({
            "striker_id": n, "non_striker_id": s, "bowler_id": b, "runs_off_bat": 0,
            "wicket_type": "caught", "out_player_id": n
        }),
        json!({
            "striker_id": s, "non_striker_id": t, "bowler_id": b, "runs_off_bat": 0,
            "extra_type": "wide", "extra_runs": 1
        }),
    ];
    for ball in balls {
        post_json(&app, &uri, ball, StatusCode::CREATED).await;
    }

    let summary = get_json(&app, &format!("/api/matches/{}/summary", game.match_id)).await;
    assert_eq!(summary["match"]["id"], game.match_id);
    assert_eq!(summary["match"]["status"], "live");

    let innings = summary["innings"].as_array().expect("innings");
    assert_eq!(innings.len(), 1);
    let first = &innings[0];
    assert_eq!(first["innings_number"], 1);
    assert_eq!(first["overs"][0]["over_number"], 1);
    assert_eq!(first["overs"][0]["balls"].as_array().map(Vec::len), Some(5));

    let card = &first["scorecard"];
    assert_eq!(card["totals"]["runs"], 12);
    assert_eq!(card["totals"]["wickets"], 1);
    assert_eq!(card["totals"]["legal_balls"], 4);
    assert_eq!(card["totals"]["overs"], "0.4");
    assert_eq!(card["totals"]["extras"], 1);

    let batting = card["batting"].as_array().expect("batting");
    assert_eq!(batting.len(), 2);
    assert_eq!(batting[0]["player_id"], s);
    assert_eq!(batting[0]["player_name"], "IND Player 1");
    assert_eq!(batting[0]["runs"], 5);
    assert_eq!(batting[0]["balls"], 2);
    assert_eq!(batting[0]["fours"], 1);
    assert_eq!(batting[1]["runs"], 6);
    assert_eq!(batting[1]["sixes"], 1);
    assert_eq!(batting[1]["out"], true);
    assert_eq!(batting[1]["dismissal"], "caught");

    let bowling = card["bowling"].as_array().expect("bowling");
    assert_eq!(bowling.len(), 1);
    assert_eq!(bowling[0]["player_name"], "AUS Player 11");
    assert_eq!(bowling[0]["runs_conceded"], 12);
    assert_eq!(bowling[0]["wickets"], 1);
    assert_eq!(bowling[0]["overs"], "0.4");
    Ok(())
}

#[actix_web::test]
async fn summary_of_unstarted_match_has_no_innings() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let db = backend::db::require_db(&state)?;
    let game = create_ready_match(db, Some(20)).await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let summary = get_json(&app, &format!("/api/matches/{}/summary", game.match_id)).await;
    assert_eq!(summary["innings"], json!([]));
    assert_eq!(summary["match"]["team1_name"], "India");

    let req = test::TestRequest::get()
        .uri("/api/matches/4242/summary")
        .to_request();
    assert_problem(&app, req, StatusCode::NOT_FOUND, "MATCH_NOT_FOUND", None).await;
    Ok(())
}
