use std::time::Duration;

use migration::{migrate, MigrationCommand};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::{info, warn};

use crate::config::db::{db_url, DbKind, DbOwner, RuntimeEnv};
use crate::error::AppError;
use crate::logging::pii::Redacted;

/// Open a connection pool. Does NOT run any migrations.
pub async fn connect_db(
    env: RuntimeEnv,
    kind: DbKind,
    owner: DbOwner,
) -> Result<DatabaseConnection, AppError> {
    let database_url = db_url(env, kind, owner)?;

    let mut opts = ConnectOptions::new(database_url.clone());
    opts.sqlx_logging(false)
        .connect_timeout(Duration::from_secs(10));
    if kind == DbKind::SqliteMemory {
        // every pooled connection would otherwise see its own empty database
        opts.max_connections(1).min_connections(1);
    } else {
        opts.max_connections(10);
    }

    let conn = Database::connect(opts).await.map_err(|e| {
        let msg = format!("connect to {database_url} failed: {e}");
        warn!(error = %Redacted(&msg), "database connection failed");
        AppError::db_unavailable()
    })?;
    Ok(conn)
}

/// Single entry point for the server and tests: connect, then migrate to latest.
pub async fn bootstrap_db(env: RuntimeEnv, kind: DbKind) -> Result<DatabaseConnection, AppError> {
    let conn = match kind {
        DbKind::SqliteMemory => {
            let conn = connect_db(env, kind, DbOwner::App).await?;
            run_migrations(&conn).await?;
            conn
        }
        DbKind::Postgres => {
            let owner = connect_db(env, kind, DbOwner::Owner).await?;
            run_migrations(&owner).await?;
            owner
                .close()
                .await
                .map_err(|e| AppError::db(format!("failed to close owner pool: {e}")))?;
            connect_db(env, kind, DbOwner::App).await?
        }
    };

    info!(?env, ?kind, "database ready");
    Ok(conn)
}

async fn run_migrations(conn: &DatabaseConnection) -> Result<(), AppError> {
    migrate(conn, MigrationCommand::Up)
        .await
        .map_err(|e| AppError::db(format!("migration failed: {e}")))
}
