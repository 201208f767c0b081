//! Innings HTTP routes.

use actix_web::{web, HttpRequest, HttpResponse};
use serde::Deserialize;

use super::deleted;
use crate::db::txn::with_txn;
use crate::error::AppError;
use crate::extractors::{parse_filter_id, IdPath, ValidatedJson};
use crate::services::innings::{InningsPayload, InningsService};
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
struct InningsFilter {
    match_id: Option<String>,
}

async fn list_innings(
    http_req: HttpRequest,
    filter: web::Query<InningsFilter>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let match_id = parse_filter_id("match_id", filter.match_id.as_deref())?;
    let innings = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move { Ok(InningsService::new().list(txn, match_id).await?) })
    })
    .await?;
    Ok(HttpResponse::Ok().json(innings))
}

async fn get_innings(
    http_req: HttpRequest,
    id: IdPath,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let innings = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move { Ok(InningsService::new().get(txn, id.0).await?) })
    })
    .await?;
    Ok(HttpResponse::Ok().json(innings))
}

async fn create_innings(
    http_req: HttpRequest,
    body: ValidatedJson<InningsPayload>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let payload = body.into_inner();
    let innings = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move { Ok(InningsService::new().create(txn, payload).await?) })
    })
    .await?;
    Ok(HttpResponse::Created().json(innings))
}

async fn delete_innings(
    http_req: HttpRequest,
    id: IdPath,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move { Ok(InningsService::new().delete(txn, id.0).await?) })
    })
    .await?;
    Ok(deleted("Innings"))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("")
            .route(web::get().to(list_innings))
            .route(web::post().to(create_innings)),
    );
    cfg.service(
        web::resource("/{id}")
            .route(web::get().to(get_innings))
            .route(web::delete().to(delete_innings)),
    );
}
