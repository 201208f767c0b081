//! Player HTTP routes.

use actix_web::{web, HttpRequest, HttpResponse};
use serde::Deserialize;

use super::deleted;
use crate::db::txn::with_txn;
use crate::error::AppError;
use crate::extractors::{parse_filter_id, IdPath, ValidatedJson};
use crate::services::players::{PlayerPayload, PlayerService};
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
struct PlayerFilter {
    team_id: Option<String>,
}

/// GET /api/players?team_id=
async fn list_players(
    http_req: HttpRequest,
    filter: web::Query<PlayerFilter>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let team_id = parse_filter_id("team_id", filter.team_id.as_deref())?;
    let players = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move { Ok(PlayerService::new().list(txn, team_id).await?) })
    })
    .await?;
    Ok(HttpResponse::Ok().json(players))
}

/// GET /api/players/{id}
async fn get_player(
    http_req: HttpRequest,
    id: IdPath,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let player = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move { Ok(PlayerService::new().get(txn, id.0).await?) })
    })
    .await?;
    Ok(HttpResponse::Ok().json(player))
}

/// POST /api/players
async fn create_player(
    http_req: HttpRequest,
    body: ValidatedJson<PlayerPayload>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let payload = body.into_inner();
    let player = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move { Ok(PlayerService::new().create(txn, payload).await?) })
    })
    .await?;
    Ok(HttpResponse::Created().json(player))
}

/// PUT /api/players/{id}
async fn update_player(
    http_req: HttpRequest,
    id: IdPath,
    body: ValidatedJson<PlayerPayload>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let payload = body.into_inner();
    let player = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move { Ok(PlayerService::new().update(txn, id.0, payload).await?) })
    })
    .await?;
    Ok(HttpResponse::Ok().json(player))
}

/// DELETE /api/players/{id}
async fn delete_player(
    http_req: HttpRequest,
    id: IdPath,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move { Ok(PlayerService::new().delete(txn, id.0).await?) })
    })
    .await?;
    Ok(deleted("Player"))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("")
            .route(web::get().to(list_players))
            .route(web::post().to(create_player)),
    );
    cfg.service(
        web::resource("/{id}")
            .route(web::get().to(get_player))
            .route(web::put().to(update_player))
            .route(web::delete().to(delete_player)),
    );
}
