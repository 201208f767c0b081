use actix_web::http::StatusCode;
use actix_web::test;
use backend::state::app_state::AppState;
use backend::AppError;

use crate::common::assert_problem;
use crate::support::{build_test_state, create_test_app};

#[actix_web::test]
async fn non_numeric_ids_are_bad_requests() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    for uri in ["/api/teams/abc", "/api/matches/0/live", "/api/balls/-4"] {
        let req = test::TestRequest::get().uri(uri).to_request();
        assert_problem(&app, req, StatusCode::BAD_REQUEST, "INVALID_ID", None).await;
    }
    Ok(())
}

#[actix_web::test]
async fn malformed_bodies_are_bad_requests() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let req = test::TestRequest::post()
        .uri("/api/teams")
        .insert_header(("content-type", "application/json"))
        .set_payload(r#"{"name": "India""#)
        .to_request();
    assert_problem(
        &app,
        req,
        StatusCode::BAD_REQUEST,
        "BAD_REQUEST",
        Some("unexpected end of input"),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/teams")
        .insert_header(("content-type", "application/json"))
        .set_payload(r#"{"name": 42, "country_code": "IND"}"#)
        .to_request();
    assert_problem(
        &app,
        req,
        StatusCode::BAD_REQUEST,
        "BAD_REQUEST",
        Some("wrong types"),
    )
    .await;

    let req = test::TestRequest::post().uri("/api/teams").to_request();
    assert_problem(
        &app,
        req,
        StatusCode::BAD_REQUEST,
        "BAD_REQUEST",
        Some("Request body is required"),
    )
    .await;
    Ok(())
}

#[actix_web::test]
async fn missing_database_is_service_unavailable() -> Result<(), AppError> {
    let app = create_test_app(AppState::new_without_db())
        .with_prod_routes()
        .build()
        .await?;

    let req = test::TestRequest::get().uri("/api/teams").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.headers().get("retry-after").map(|v| v.as_bytes()), Some(&b"1"[..]));
    backend_test_support::problem_details::assert_problem_details_from_service_response(
        resp,
        StatusCode::SERVICE_UNAVAILABLE,
        "DB_UNAVAILABLE",
        None,
    )
    .await;
    Ok(())
}
