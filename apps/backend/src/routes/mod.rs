use actix_web::{web, HttpResponse};
use serde::Serialize;

pub mod balls;
pub mod health;
pub mod innings;
pub mod matches;
pub mod overs;
pub mod players;
pub mod teams;

#[derive(Debug, Serialize)]
struct DeletedResponse {
    message: String,
}

/// `200 {"message": "<What> deleted successfully"}`
pub(crate) fn deleted(what: &str) -> HttpResponse {
    HttpResponse::Ok().json(DeletedResponse {
        message: format!("{what} deleted successfully"),
    })
}

/// Register every route. `main.rs` and the test app builder share this so
/// endpoint behaviour is identical in both.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(health::configure_routes);
    cfg.service(web::scope("/api/teams").configure(teams::configure_routes));
    cfg.service(web::scope("/api/players").configure(players::configure_routes));
    cfg.service(web::scope("/api/matches").configure(matches::configure_routes));
    cfg.service(web::scope("/api/innings").configure(innings::configure_routes));
    cfg.service(web::scope("/api/overs").configure(overs::configure_routes));
    cfg.service(web::scope("/api/balls").configure(balls::configure_routes));
}
