use actix_web::http::StatusCode;
use actix_web::test;
use backend::AppError;
use serde_json::json;

use crate::common::{assert_problem, call_json, get_json, post_json};
use crate::support::factory::{create_test_squad, create_test_team};
use crate::support::{build_test_state, create_test_app};

#[actix_web::test]
async fn team_crud_round_trip() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let created = post_json(
        &app,
        "/api/teams",
        json!({"name": "India", "country_code": "IND"}),
        StatusCode::CREATED,
    )
    .await;
    let id = created["id"].as_i64().expect("id");
    assert_eq!(created["name"], "India");
    assert_eq!(created["country_code"], "IND");

    let listed = get_json(&app, "/api/teams").await;
    assert_eq!(listed.as_array().map(Vec::len), Some(1));

    let req = test::TestRequest::put()
        .uri(&format!("/api/teams/{id}"))
        .set_json(json!({"name": "India A", "country_code": "IN"}))
        .to_request();
    let updated = call_json(&app, req, StatusCode::OK).await;
    assert_eq!(updated["name"], "India A");
    assert_eq!(updated["country_code"], "IN");

    let req = test::TestRequest::delete()
        .uri(&format!("/api/teams/{id}"))
        .to_request();
    let deleted = call_json(&app, req, StatusCode::OK).await;
    assert_eq!(deleted["message"], "Team deleted successfully");

    let req = test::TestRequest::get()
        .uri(&format!("/api/teams/{id}"))
        .to_request();
    assert_problem(
        &app,
        req,
        StatusCode::NOT_FOUND,
        "TEAM_NOT_FOUND",
        Some("Team not found"),
    )
    .await;
    Ok(())
}

#[actix_web::test]
async fn create_team_requires_name_and_code() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let req = test::TestRequest::post()
        .uri("/api/teams")
        .set_json(json!({"name": "India"}))
        .to_request();
    assert_problem(
        &app,
        req,
        StatusCode::BAD_REQUEST,
        "MISSING_FIELD",
        Some("Name and country_code are required"),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/teams")
        .set_json(json!({"name": "India", "country_code": "india"}))
        .to_request();
    assert_problem(
        &app,
        req,
        StatusCode::BAD_REQUEST,
        "INVALID_COUNTRY_CODE",
        None,
    )
    .await;
    Ok(())
}

#[actix_web::test]
async fn deleting_missing_team_is_not_found() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let req = test::TestRequest::delete().uri("/api/teams/999").to_request();
    assert_problem(&app, req, StatusCode::NOT_FOUND, "TEAM_NOT_FOUND", None).await;
    Ok(())
}

#[actix_web::test]
async fn team_with_players_cannot_be_deleted() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let db = backend::db::require_db(&state)?;
    let team_id = create_test_team(db, "England", "ENG").await?;
    create_test_squad(db, team_id, "ENG Player", 1).await?;

    let app = create_test_app(state).with_prod_routes().build().await?;
    let req = test::TestRequest::delete()
        .uri(&format!("/api/teams/{team_id}"))
        .to_request();
    assert_problem(&app, req, StatusCode::CONFLICT, "FK_VIOLATION", None).await;
    Ok(())
}
