//! Team HTTP routes.

use actix_web::{web, HttpRequest, HttpResponse};

use super::deleted;
use crate::db::txn::with_txn;
use crate::error::AppError;
use crate::extractors::{IdPath, ValidatedJson};
use crate::services::teams::{TeamPayload, TeamService};
use crate::state::app_state::AppState;

/// GET /api/teams
async fn list_teams(
    http_req: HttpRequest,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let teams = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move { Ok(TeamService::new().list(txn).await?) })
    })
    .await?;
    Ok(HttpResponse::Ok().json(teams))
}

/// GET /api/teams/{id}
async fn get_team(
    http_req: HttpRequest,
    id: IdPath,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let team = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move { Ok(TeamService::new().get(txn, id.0).await?) })
    })
    .await?;
    Ok(HttpResponse::Ok().json(team))
}

/// POST /api/teams
async fn create_team(
    http_req: HttpRequest,
    body: ValidatedJson<TeamPayload>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let payload = body.into_inner();
    let team = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move { Ok(TeamService::new().create(txn, payload).await?) })
    })
    .await?;
    Ok(HttpResponse::Created().json(team))
}

/// PUT /api/teams/{id}
async fn update_team(
    http_req: HttpRequest,
    id: IdPath,
    body: ValidatedJson<TeamPayload>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let payload = body.into_inner();
    let team = with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move { Ok(TeamService::new().update(txn, id.0, payload).await?) })
    })
    .await?;
    Ok(HttpResponse::Ok().json(team))
}

/// DELETE /api/teams/{id}
async fn delete_team(
    http_req: HttpRequest,
    id: IdPath,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    with_txn(Some(&http_req), &app_state, |txn| {
        Box::pin(async move { Ok(TeamService::new().delete(txn, id.0).await?) })
    })
    .await?;
    Ok(deleted("Team"))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("")
            .route(web::get().to(list_teams))
            .route(web::post().to(create_team)),
    );
    cfg.service(
        web::resource("/{id}")
            .route(web::get().to(get_team))
            .route(web::put().to(update_team))
            .route(web::delete().to(delete_team)),
    );
}
