//! Over HTTP routes.

use actix_web::{web, HttpRequest, HttpResponse};
use serde::Deserialize;

use super::deleted;
use crate::db::txn::with_txn;
use crate::error::AppError;
use crate::extractors::{parse_filter_id, IdPath, ValidatedJson};
use crate::services::overs::{OverPayload, OverService};
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
struct OverFilter {
    innings_id: Option<String>,
}

async fn list_overs(
    http_req: HttpRequest,
    filter: web::Query<OverFilter>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let innings_id = parse_filter_id("innings_id", filter.innings_id.as_deref())?;
    let overs = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move { Ok(OverService::new().list(txn, innings_id).await?) })
    })
    .await?;
    Ok(HttpResponse::Ok().json(overs))
}

async fn get_over(
    http_req: HttpRequest,
    id: IdPath,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let over = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move { Ok(OverService::new().get(txn, id.0).await?) })
    })
    .await?;
    Ok(HttpResponse::Ok().json(over))
}

async fn create_over(
    http_req: HttpRequest,
    body: ValidatedJson<OverPayload>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let payload = body.into_inner();
    let over = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move { Ok(OverService::new().create(txn, payload).await?) })
    })
    .await?;
    Ok(HttpResponse::Created().json(over))
}

async fn delete_over(
    http_req: HttpRequest,
    id: IdPath,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move { Ok(OverService::new().delete(txn, id.0).await?) })
    })
    .await?;
    Ok(deleted("Over"))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("")
            .route(web::get().to(list_overs))
            .route(web::post().to(create_over)),
    );
    cfg.service(
        web::resource("/{id}")
            .route(web::get().to(get_over))
            .route(web::delete().to(delete_over)),
    );
}
