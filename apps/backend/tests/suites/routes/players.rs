use actix_web::http::StatusCode;
use actix_web::test;
use backend::AppError;
use serde_json::json;

use crate::common::{assert_problem, call_json, get_json, post_json};
use crate::support::factory::{create_test_squad, create_test_team};
use crate::support::{build_test_state, create_test_app};

#[actix_web::test]
async fn create_player_includes_team_name() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let db = backend::db::require_db(&state)?;
    let team_id = create_test_team(db, "India", "IND").await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let created = post_json(
        &app,
        "/api/players",
        json!({
            "name": "Virat Kohli",
            "date_of_birth": "1988-11-05",
            "role": "batsman",
            "team_id": team_id
        }),
        StatusCode::CREATED,
    )
    .await;
    assert_eq!(created["name"], "Virat Kohli");
    assert_eq!(created["date_of_birth"], "1988-11-05");
    assert_eq!(created["team_id"], team_id);
    assert_eq!(created["team_name"], "India");

    let id = created["id"].as_i64().expect("id");
    let req = test::TestRequest::put()
        .uri(&format!("/api/players/{id}"))
        .set_json(json!({
            "name": "Virat Kohli",
            "date_of_birth": "1988-11-05",
            "role": "captain",
            "team_id": team_id
        }))
        .to_request();
    let updated = call_json(&app, req, StatusCode::OK).await;
    assert_eq!(updated["role"], "captain");
    Ok(())
}

#[actix_web::test]
async fn list_players_filters_by_team() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let db = backend::db::require_db(&state)?;
    let india = create_test_team(db, "India", "IND").await?;
    let australia = create_test_team(db, "Australia", "AUS").await?;
    create_test_squad(db, india, "IND Player", 3).await?;
    create_test_squad(db, australia, "AUS Player", 2).await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let all = get_json(&app, "/api/players").await;
    assert_eq!(all.as_array().map(Vec::len), Some(5));

    let filtered = get_json(&app, &format!("/api/players?team_id={australia}")).await;
    let filtered = filtered.as_array().expect("array");
    assert_eq!(filtered.len(), 2);
    assert!(filtered.iter().all(|p| p["team_id"] == australia));
    assert!(filtered.iter().all(|p| p["team_name"] == "Australia"));

    let req = test::TestRequest::get()
        .uri("/api/players?team_id=abc")
        .to_request();
    assert_problem(&app, req, StatusCode::BAD_REQUEST, "INVALID_ID", None).await;
    Ok(())
}

#[actix_web::test]
async fn create_player_validates_input() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let db = backend::db::require_db(&state)?;
    let team_id = create_test_team(db, "India", "IND").await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let req = test::TestRequest::post()
        .uri("/api/players")
        .set_json(json!({"name": "No Team", "date_of_birth": "1990-01-01", "role": "bowler"}))
        .to_request();
    assert_problem(
        &app,
        req,
        StatusCode::BAD_REQUEST,
        "MISSING_FIELD",
        Some("Name, date_of_birth, role and team_id are required"),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/players")
        .set_json(json!({
            "name": "Bad Date",
            "date_of_birth": "05/11/1988",
            "role": "bowler",
            "team_id": team_id
        }))
        .to_request();
    assert_problem(
        &app,
        req,
        StatusCode::BAD_REQUEST,
        "VALIDATION_ERROR",
        Some("date_of_birth must be a date in YYYY-MM-DD format"),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/players")
        .set_json(json!({
            "name": "Nobody",
            "date_of_birth": "1990-01-01",
            "role": "bowler",
            "team_id": 9999
        }))
        .to_request();
    assert_problem(&app, req, StatusCode::NOT_FOUND, "TEAM_NOT_FOUND", None).await;
    Ok(())
}
