use actix_web::http::StatusCode;
use actix_web::test;
use backend::AppError;
use sea_orm::{ConnectionTrait, DbBackend};
use serde_json::{json, Value};

use crate::common::{assert_problem, get_json, post_json};
use crate::support::factory::{
    create_ready_match, create_test_match, create_test_squad, create_test_team, select_playing_xi,
};
use crate::support::{build_test_state, create_test_app};

fn delivery(striker: i64, non_striker: i64, bowler: i64, runs: i32) -> Value {
    json!({
        "striker_id": striker,
        "non_striker_id": non_striker,
        "bowler_id": bowler,
        "runs_off_bat": runs
    })
}

#[actix_web::test]
async fn one_over_match_plays_to_a_result() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let db = backend::db::require_db(&state)?;
    let game = create_ready_match(db, Some(1)).await?;
    let app = create_test_app(state).with_prod_routes().build().await?;
    let live_uri = format!("/api/matches/{}/live", game.match_id);
    let uri = format!("/api/matches/{}/deliveries", game.match_id);

    let before = get_json(&app, &live_uri).await;
    assert_eq!(before["phase"], "not_started");
    assert_eq!(before["status"], "scheduled");

    // First innings: India bat after winning the toss.
    let (s, n, b) = (game.team1_xi[0], game.team1_xi[1], game.team2_xi[10]);
    let first = post_json(&app, &uri, delivery(s, n, b, 6), StatusCode::CREATED).await;
    assert_eq!(first["ball"]["ball_number"], 1);
    assert_eq!(first["live"]["status"], "live");
    assert_eq!(first["live"]["innings_number"], 1);
    assert_eq!(first["live"]["batting_team_id"], game.team1_id);
    assert_eq!(first["live"]["score"], 6);

    let mut wide = delivery(s, n, b, 0);
    wide["extra_type"] = json!("wide");
    wide["extra_runs"] = json!(1);
    let wide = post_json(&app, &uri, wide, StatusCode::CREATED).await;
    assert_eq!(wide["ball"]["ball_number"], 2);
    assert_eq!(wide["ball"]["is_legal_delivery"], false);
    assert_eq!(wide["live"]["score"], 7);
    assert_eq!(wide["live"]["extras"], 1);
    assert_eq!(wide["live"]["overs"], "0.1");

    let mut last = Value::Null;
    for _ in 0..5 {
        last = post_json(&app, &uri, delivery(s, n, b, 0), StatusCode::CREATED).await;
    }
    assert_eq!(last["ball"]["ball_number"], 7);
    assert_eq!(last["live"]["phase"], "innings_complete");
    assert_eq!(last["live"]["overs"], "1.0");
    assert_eq!(last["live"]["target"], 8);

    let between = get_json(&app, &live_uri).await;
    assert_eq!(between["phase"], "innings_complete");
    assert_eq!(between["score"], 7);

    // Chase: Australia need 8.
    let (s2, n2, b2) = (game.team2_xi[0], game.team2_xi[1], game.team1_xi[10]);
    let chase = post_json(&app, &uri, delivery(s2, n2, b2, 4), StatusCode::CREATED).await;
    assert_eq!(chase["live"]["innings_number"], 2);
    assert_eq!(chase["live"]["batting_team_id"], game.team2_id);
    assert_eq!(chase["live"]["runs_required"], 4);

    let mut out = delivery(s2, n2, b2, 0);
    out["wicket_type"] = json!("bowled");
    out["out_player_id"] = json!(s2);
    let out = post_json(&app, &uri, out, StatusCode::CREATED).await;
    assert_eq!(out["live"]["wickets"], 1);
    assert_eq!(out["live"]["dismissed_player_ids"], json!([s2]));

    let req = test::TestRequest::post()
        .uri(&uri)
        .set_json(delivery(s2, n2, b2, 0))
        .to_request();
    assert_problem(&app, req, StatusCode::BAD_REQUEST, "BATTER_DISMISSED", None).await;

    let won = post_json(
        &app,
        &uri,
        delivery(game.team2_xi[2], n2, b2, 4),
        StatusCode::CREATED,
    )
    .await;
    assert_eq!(won["live"]["phase"], "match_complete");
    assert_eq!(won["live"]["status"], "completed");
    assert_eq!(
        won["live"]["outcome"],
        json!({"result": "won", "winner_team_id": game.team2_id})
    );

    let fetched = get_json(&app, &format!("/api/matches/{}", game.match_id)).await;
    assert_eq!(fetched["status"], "completed");

    let req = test::TestRequest::post()
        .uri(&uri)
        .set_json(delivery(game.team2_xi[2], n2, b2, 1))
        .to_request();
    assert_problem(&app, req, StatusCode::CONFLICT, "MATCH_COMPLETED", None).await;
    Ok(())
}

#[actix_web::test]
async fn bowler_rules_are_enforced() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let db = backend::db::require_db(&state)?;
    let game = create_ready_match(db, Some(5)).await?;
    let app = create_test_app(state).with_prod_routes().build().await?;
    let uri = format!("/api/matches/{}/deliveries", game.match_id);
    let (s, n) = (game.team1_xi[0], game.team1_xi[1]);
    let (x, y) = (game.team2_xi[9], game.team2_xi[10]);

    post_json(&app, &uri, delivery(s, n, x, 0), StatusCode::CREATED).await;

    let req = test::TestRequest::post()
        .uri(&uri)
        .set_json(delivery(s, n, y, 0))
        .to_request();
    assert_problem(&app, req, StatusCode::BAD_REQUEST, "BOWLER_CHANGE_MID_OVER", None).await;

    for _ in 0..5 {
        post_json(&app, &uri, delivery(s, n, x, 0), StatusCode::CREATED).await;
    }
    let live = get_json(&app, &format!("/api/matches/{}/live", game.match_id)).await;
    assert_eq!(live["phase"], "over_complete");
    assert_eq!(live["current_over"], 2);
    assert_eq!(live["last_bowler_id"], x);

    let req = test::TestRequest::post()
        .uri(&uri)
        .set_json(delivery(s, n, x, 0))
        .to_request();
    assert_problem(&app, req, StatusCode::BAD_REQUEST, "OVER_COMPLETE_BOWLER", None).await;

    let next = post_json(&app, &uri, delivery(s, n, y, 0), StatusCode::CREATED).await;
    assert_eq!(next["ball"]["ball_number"], 1);
    assert_eq!(next["live"]["phase"], "awaiting_ball");
    Ok(())
}

#[actix_web::test]
async fn deliveries_are_validated_against_the_playing_xi() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let db = backend::db::require_db(&state)?;
    let game = create_ready_match(db, Some(20)).await?;
    let app = create_test_app(state).with_prod_routes().build().await?;
    let uri = format!("/api/matches/{}/deliveries", game.match_id);
    let (s, n, b) = (game.team1_xi[0], game.team1_xi[1], game.team2_xi[10]);

    // Bowling side tries to bat.
    let req = test::TestRequest::post()
        .uri(&uri)
        .set_json(delivery(game.team2_xi[0], n, b, 0))
        .to_request();
    assert_problem(&app, req, StatusCode::BAD_REQUEST, "NOT_IN_PLAYING_XI", None).await;

    let req = test::TestRequest::post()
        .uri(&uri)
        .set_json(delivery(s, s, b, 0))
        .to_request();
    assert_problem(&app, req, StatusCode::BAD_REQUEST, "SAME_BATTERS", None).await;

    let req = test::TestRequest::post()
        .uri(&uri)
        .set_json(json!({"bowler_id": b, "runs_off_bat": 0}))
        .to_request();
    assert_problem(&app, req, StatusCode::BAD_REQUEST, "BATTERS_REQUIRED", None).await;

    let mut caught = delivery(s, n, b, 0);
    caught["wicket_type"] = json!("caught");
    let req = test::TestRequest::post()
        .uri(&uri)
        .set_json(caught)
        .to_request();
    assert_problem(
        &app,
        req,
        StatusCode::BAD_REQUEST,
        "WICKET_WITHOUT_OUT_PLAYER",
        None,
    )
    .await;

    // Rejected balls leave no trace.
    let live = get_json(&app, &format!("/api/matches/{}/live", game.match_id)).await;
    assert_eq!(live["phase"], "not_started");
    Ok(())
}

#[actix_web::test]
async fn scoring_needs_overs_and_full_teams() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let db = backend::db::require_db(&state)?;
    let india = create_test_team(db, "India", "IND").await?;
    let australia = create_test_team(db, "Australia", "AUS").await?;
    let india_xi = create_test_squad(db, india, "IND Player", 11).await?;
    let australia_xi = create_test_squad(db, australia, "AUS Player", 10).await?;

    let open_ended = create_test_match(db, india, australia, None).await?;
    let short_side = create_test_match(db, india, australia, Some(20)).await?;
    select_playing_xi(db, short_side, india, &india_xi).await?;
    select_playing_xi(db, short_side, australia, &australia_xi).await?;

    let app = create_test_app(state).with_prod_routes().build().await?;
    let body = delivery(india_xi[0], india_xi[1], australia_xi[0], 0);

    let req = test::TestRequest::post()
        .uri(&format!("/api/matches/{open_ended}/deliveries"))
        .set_json(body.clone())
        .to_request();
    assert_problem(&app, req, StatusCode::BAD_REQUEST, "TOTAL_OVERS_REQUIRED", None).await;

    let req = test::TestRequest::post()
        .uri(&format!("/api/matches/{short_side}/deliveries"))
        .set_json(body)
        .to_request();
    assert_problem(&app, req, StatusCode::BAD_REQUEST, "INCOMPLETE_PLAYING_XI", None).await;

    let req = test::TestRequest::get()
        .uri("/api/matches/999/live")
        .to_request();
    assert_problem(&app, req, StatusCode::NOT_FOUND, "MATCH_NOT_FOUND", None).await;
    Ok(())
}

#[actix_web::test]
async fn failed_ball_insert_rolls_back_new_over() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let db = backend::db::require_db(&state)?.clone();
    if db.get_database_backend() != DbBackend::Sqlite {
        return Ok(());
    }
    let game = create_ready_match(&db, Some(5)).await?;
    let app = create_test_app(state).with_prod_routes().build().await?;
    let uri = format!("/api/matches/{}/deliveries", game.match_id);
    let (s, n) = (game.team1_xi[0], game.team1_xi[1]);
    let (x, y) = (game.team2_xi[9], game.team2_xi[10]);

    let req = test::TestRequest::post()
        .uri(&uri)
        .set_json(delivery(s, n, x, i32::MAX))
        .to_request();
    assert_problem(&app, req, StatusCode::BAD_REQUEST, "INVALID_RUNS", None).await;

    let mut last = Value::Null;
    for _ in 0..6 {
        last = post_json(&app, &uri, delivery(s, n, x, 0), StatusCode::CREATED).await;
    }
    assert_eq!(last["live"]["phase"], "over_complete");
    let innings_id = last["live"]["innings_id"].as_i64().expect("innings id");

    // Over 2 gets created, then the ball insert aborts.
    db.execute_unprepared(
        "CREATE TRIGGER freeze_balls BEFORE INSERT ON balls \
         BEGIN SELECT RAISE(ABORT, 'balls are frozen'); END",
    )
    .await?;
    let req = test::TestRequest::post()
        .uri(&uri)
        .set_json(delivery(n, s, y, 0))
        .to_request();
    assert_problem(
        &app,
        req,
        StatusCode::INTERNAL_SERVER_ERROR,
        "DB_ERROR",
        None,
    )
    .await;

    let overs = get_json(&app, &format!("/api/overs?innings_id={innings_id}")).await;
    assert_eq!(overs.as_array().map(Vec::len), Some(1));
    assert_eq!(overs[0]["over_number"], 1);
    let live = get_json(&app, &format!("/api/matches/{}/live", game.match_id)).await;
    assert_eq!(live["overs"], "1.0");
    assert_eq!(live["current_over"], 2);
    Ok(())
}
