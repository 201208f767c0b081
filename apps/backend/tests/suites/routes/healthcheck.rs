use actix_web::http::StatusCode;
use actix_web::test;
use backend::state::app_state::AppState;
use backend::AppError;

use crate::support::{build_test_state, create_test_app};

#[actix_web::test]
async fn root_says_hello() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let req = test::TestRequest::get().uri("/").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp.headers().contains_key("x-trace-id"));
    let body = test::read_body(resp).await;
    assert_eq!(&body[..], b"Cricket scoring backend");
    Ok(())
}

#[actix_web::test]
async fn health_reports_database_and_migrations() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let app = create_test_app(state).with_prod_routes().build().await?;

    let req = test::TestRequest::get().uri("/health").to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["db"], "ok");
    assert_eq!(body["migrations"], "m20250901_000001_init");
    assert!(body.get("db_error").is_none());
    Ok(())
}

#[actix_web::test]
async fn health_without_database_still_answers() -> Result<(), AppError> {
    let app = create_test_app(AppState::new_without_db())
        .with_prod_routes()
        .build()
        .await?;

    let req = test::TestRequest::get().uri("/health").to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["db"], "error");
    assert!(body["db_error"]
        .as_str()
        .is_some_and(|e| e.starts_with("DB unavailable")));
    Ok(())
}
