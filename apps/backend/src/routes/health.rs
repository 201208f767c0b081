use actix_web::{web, HttpResponse};
use migration::get_latest_migration_version;
use sea_orm::{ConnectionTrait, DatabaseConnection, Statement};
use serde::Serialize;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

use crate::db::require_db;
use crate::error::AppError;
use crate::state::app_state::AppState;

const SERVICE_NAME: &str = "Cricket scoring backend";

/// GET /
pub async fn root() -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().body(SERVICE_NAME))
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    app_version: &'static str,
    db: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    db_error: Option<String>,
    migrations: String,
    time: String,
}

/// Outcome of pinging the database.
struct DbProbe {
    ok: bool,
    error: Option<String>,
    migrations: String,
}

impl DbProbe {
    fn failed(error: String) -> Self {
        Self {
            ok: false,
            error: Some(error),
            migrations: "unknown".to_string(),
        }
    }
}

async fn probe(db: &DatabaseConnection) -> DbProbe {
    let ping = Statement::from_string(db.get_database_backend(), "SELECT 1 AS ok".to_string());
    if let Err(e) = db.query_one(ping).await {
        return DbProbe::failed(format!("DB query failed: {e}"));
    }
    let migrations = match get_latest_migration_version(db).await {
        Ok(Some(version)) => version,
        Ok(None) => "no_migrations".to_string(),
        Err(_) => "unknown".to_string(),
    };
    DbProbe {
        ok: true,
        error: None,
        migrations,
    }
}

/// GET /health
///
/// Always 200 while the process is up; database trouble shows in `db`/`db_error`.
async fn health(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let db_probe = match require_db(&app_state) {
        Ok(db) => probe(db).await,
        Err(e) => DbProbe::failed(format!("DB unavailable: {e}")),
    };

    Ok(HttpResponse::Ok().json(HealthResponse {
        status: "ok",
        app_version: env!("CARGO_PKG_VERSION"),
        db: if db_probe.ok { "ok" } else { "error" },
        db_error: db_probe.error,
        migrations: db_probe.migrations,
        time: OffsetDateTime::now_utc()
            .format(&Rfc3339)
            .unwrap_or_else(|_| "unknown".to_string()),
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(root));
    cfg.route("/health", web::get().to(health));
}
