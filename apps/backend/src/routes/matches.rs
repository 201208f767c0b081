//! Match HTTP routes, including playing XI, summary and live scoring.

use actix_web::{web, HttpRequest, HttpResponse};

use super::deleted;
use crate::db::txn::with_txn;
use crate::error::AppError;
use crate::extractors::{IdPath, ValidatedJson};
use crate::services::live_scoring::{DeliveryPayload, LiveScoringService};
use crate::services::matches::{MatchPayload, MatchService};
use crate::services::playing_xi::{PlayingXiPayload, PlayingXiService};
use crate::services::summary::SummaryService;
use crate::state::app_state::AppState;

/// GET /api/matches
async fn list_matches(
    http_req: HttpRequest,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let matches = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move { Ok(MatchService::new().list(txn).await?) })
    })
    .await?;
    Ok(HttpResponse::Ok().json(matches))
}

/// GET /api/matches/{id}
async fn get_match(
    http_req: HttpRequest,
    id: IdPath,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let found = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move { Ok(MatchService::new().get(txn, id.0).await?) })
    })
    .await?;
    Ok(HttpResponse::Ok().json(found))
}

/// POST /api/matches
async fn create_match(
    http_req: HttpRequest,
    body: ValidatedJson<MatchPayload>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let payload = body.into_inner();
    let created = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move { Ok(MatchService::new().create(txn, payload).await?) })
    })
    .await?;
    Ok(HttpResponse::Created().json(created))
}

/// PUT /api/matches/{id}
async fn update_match(
    http_req: HttpRequest,
    id: IdPath,
    body: ValidatedJson<MatchPayload>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let payload = body.into_inner();
    let updated = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move { Ok(MatchService::new().update(txn, id.0, payload).await?) })
    })
    .await?;
    Ok(HttpResponse::Ok().json(updated))
}

/// DELETE /api/matches/{id}
async fn delete_match(
    http_req: HttpRequest,
    id: IdPath,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move { Ok(MatchService::new().delete(txn, id.0).await?) })
    })
    .await?;
    Ok(deleted("Match"))
}

/// GET /api/matches/{id}/summary
///
/// Match details plus every innings with nested overs, balls and the
/// derived batting/bowling scorecard.
async fn get_summary(
    http_req: HttpRequest,
    id: IdPath,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let summary = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move { Ok(SummaryService::new().match_summary(txn, id.0).await?) })
    })
    .await?;
    Ok(HttpResponse::Ok().json(summary))
}

/// GET /api/matches/{id}/playing-xi
async fn get_playing_xi(
    http_req: HttpRequest,
    id: IdPath,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let entries = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move { Ok(PlayingXiService::new().list(txn, id.0).await?) })
    })
    .await?;
    Ok(HttpResponse::Ok().json(entries))
}

/// POST /api/matches/{id}/playing-xi
async fn add_playing_xi(
    http_req: HttpRequest,
    id: IdPath,
    body: ValidatedJson<PlayingXiPayload>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let payload = body.into_inner();
    let inserted = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move { Ok(PlayingXiService::new().add(txn, id.0, payload).await?) })
    })
    .await?;
    Ok(HttpResponse::Created().json(inserted))
}

/// GET /api/matches/{id}/live
async fn get_live(
    http_req: HttpRequest,
    id: IdPath,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let view = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move { Ok(LiveScoringService::new().live_view(txn, id.0).await?) })
    })
    .await?;
    Ok(HttpResponse::Ok().json(view))
}

/// POST /api/matches/{id}/deliveries
///
/// Records one ball. The over lookup-or-create, the ball insert and the
/// match status change commit together.
async fn record_delivery(
    http_req: HttpRequest,
    id: IdPath,
    body: ValidatedJson<DeliveryPayload>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let payload = body.into_inner();
    let recorded = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move {
            Ok(LiveScoringService::new()
                .record_delivery(txn, id.0, payload)
                .await?)
        })
    })
    .await?;
    Ok(HttpResponse::Created().json(recorded))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("")
            .route(web::get().to(list_matches))
            .route(web::post().to(create_match)),
    );
    cfg.service(
        web::resource("/{id}")
            .route(web::get().to(get_match))
            .route(web::put().to(update_match))
            .route(web::delete().to(delete_match)),
    );
    cfg.service(web::resource("/{id}/summary").route(web::get().to(get_summary)));
    cfg.service(
        web::resource("/{id}/playing-xi")
            .route(web::get().to(get_playing_xi))
            .route(web::post().to(add_playing_xi)),
    );
    cfg.service(web::resource("/{id}/live").route(web::get().to(get_live)));
    cfg.service(web::resource("/{id}/deliveries").route(web::post().to(record_delivery)));
}
