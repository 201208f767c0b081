#![allow(dead_code)]

use actix_http::Request;
use actix_web::body::BoxBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::test;
use backend_test_support::problem_details::assert_problem_details_from_service_response;
use serde_json::Value;

#[ctor::ctor]
fn init_logging() {
    backend_test_support::logging::init();
}

/// Call the service and decode a JSON body, asserting the status first.
pub async fn call_json<S>(app: &S, req: Request, expected: StatusCode) -> Value
where
    S: Service<Request, Response = ServiceResponse<BoxBody>, Error = actix_web::Error>,
{
    let resp = test::call_service(app, req).await;
    assert_eq!(resp.status(), expected, "unexpected status");
    test::read_body_json(resp).await
}

pub async fn post_json<S>(app: &S, uri: &str, body: Value, expected: StatusCode) -> Value
where
    S: Service<Request, Response = ServiceResponse<BoxBody>, Error = actix_web::Error>,
{
    let req = test::TestRequest::post()
        .uri(uri)
        .set_json(body)
        .to_request();
    call_json(app, req, expected).await
}

pub async fn get_json<S>(app: &S, uri: &str) -> Value
where
    S: Service<Request, Response = ServiceResponse<BoxBody>, Error = actix_web::Error>,
{
    let req = test::TestRequest::get().uri(uri).to_request();
    call_json(app, req, StatusCode::OK).await
}

/// Send `req` and check the Problem Details response.
pub async fn assert_problem<S>(
    app: &S,
    req: Request,
    expected_status: StatusCode,
    expected_code: &str,
    expected_detail: Option<&str>,
) where
    S: Service<Request, Response = ServiceResponse<BoxBody>, Error = actix_web::Error>,
{
    let resp = test::call_service(app, req).await;
    assert_problem_details_from_service_response(
        resp,
        expected_status,
        expected_code,
        expected_detail,
    )
    .await;
}
