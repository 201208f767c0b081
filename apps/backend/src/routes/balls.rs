//! Ball HTTP routes.

use actix_web::{web, HttpRequest, HttpResponse};
use serde::Deserialize;

use super::deleted;
use crate::db::txn::with_txn;
use crate::error::AppError;
use crate::extractors::{parse_filter_id, IdPath, ValidatedJson};
use crate::services::balls::{BallPayload, BallService};
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
struct BallFilter {
    over_id: Option<String>,
}

async fn list_balls(
    http_req: HttpRequest,
    filter: web::Query<BallFilter>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let over_id = parse_filter_id("over_id", filter.over_id.as_deref())?;
    let balls = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move { Ok(BallService::new().list(txn, over_id).await?) })
    })
    .await?;
    Ok(HttpResponse::Ok().json(balls))
}

async fn get_ball(
    http_req: HttpRequest,
    id: IdPath,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let ball = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move { Ok(BallService::new().get(txn, id.0).await?) })
    })
    .await?;
    Ok(HttpResponse::Ok().json(ball))
}

async fn create_ball(
    http_req: HttpRequest,
    body: ValidatedJson<BallPayload>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let payload = body.into_inner();
    let ball = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move { Ok(BallService::new().create(txn, payload).await?) })
    })
    .await?;
    Ok(HttpResponse::Created().json(ball))
}

async fn update_ball(
    http_req: HttpRequest,
    id: IdPath,
    body: ValidatedJson<BallPayload>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let payload = body.into_inner();
    let ball = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move { Ok(BallService::new().update(txn, id.0, payload).await?) })
    })
    .await?;
    Ok(HttpResponse::Ok().json(ball))
}

async fn delete_ball(
    http_req: HttpRequest,
    id: IdPath,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move { Ok(BallService::new().delete(txn, id.0).await?) })
    })
    .await?;
    Ok(deleted("Ball"))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("")
            .route(web::get().to(list_balls))
            .route(web::post().to(create_ball)),
    );
    cfg.service(
        web::resource("/{id}")
            .route(web::get().to(get_ball))
            .route(web::put().to(update_ball))
            .route(web::delete().to(delete_ball)),
    );
}
