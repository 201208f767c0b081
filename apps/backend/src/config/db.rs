use std::env;
use std::str::FromStr;

use crate::error::AppError;

/// Which database the process talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeEnv {
    Prod,
    /// Test profile - enforces the `_test` database name suffix
    Test,
}

/// Database backend selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DbKind {
    Postgres,
    /// Private in-memory SQLite database, one per connection pool
    SqliteMemory,
}

impl FromStr for DbKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" | "pg" => Ok(DbKind::Postgres),
            "sqlite" | "sqlite-memory" | "sqlite_memory" | "memory" => Ok(DbKind::SqliteMemory),
            other => Err(AppError::config(format!(
                "Unsupported database kind '{other}' (expected postgres or sqlite-memory)"
            ))),
        }
    }
}

/// Access level of the credentials used to connect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DbOwner {
    /// Application-level access (limited permissions)
    App,
    /// Owner-level access (schema changes, used by migrations)
    Owner,
}

/// Builds a database URL from the process environment.
pub fn db_url(env: RuntimeEnv, kind: DbKind, owner: DbOwner) -> Result<String, AppError> {
    db_url_from(env, kind, owner, |name| env::var(name).ok())
}

/// Builds a database URL, resolving variables through `lookup`.
///
/// `DATABASE_URL` wins over everything else when present.
pub fn db_url_from<L>(
    runtime: RuntimeEnv,
    kind: DbKind,
    owner: DbOwner,
    lookup: L,
) -> Result<String, AppError>
where
    L: Fn(&str) -> Option<String>,
{
    if kind == DbKind::SqliteMemory {
        return Ok("sqlite::memory:".to_string());
    }

    if let Some(url) = lookup("DATABASE_URL").filter(|u| !u.trim().is_empty()) {
        return Ok(url);
    }

    let host = lookup("POSTGRES_HOST").unwrap_or_else(|| "localhost".to_string());
    let port = lookup("POSTGRES_PORT").unwrap_or_else(|| "5432".to_string());
    let db_name = match runtime {
        RuntimeEnv::Prod => must_var(&lookup, "PROD_DB")?,
        RuntimeEnv::Test => {
            let name = must_var(&lookup, "TEST_DB")?;
            if !name.ends_with("_test") {
                return Err(AppError::config(format!(
                    "Test profile requires database name to end with '_test', but got: '{name}'"
                )));
            }
            name
        }
    };
    let (username, password) = match owner {
        DbOwner::App => (
            must_var(&lookup, "APP_DB_USER")?,
            must_var(&lookup, "APP_DB_PASSWORD")?,
        ),
        DbOwner::Owner => (
            must_var(&lookup, "DB_OWNER_USER")?,
            must_var(&lookup, "DB_OWNER_PASSWORD")?,
        ),
    };

    Ok(format!(
        "postgresql://{username}:{password}@{host}:{port}/{db_name}"
    ))
}

fn must_var<L>(lookup: &L, name: &str) -> Result<String, AppError>
where
    L: Fn(&str) -> Option<String>,
{
    lookup(name)
        .ok_or_else(|| AppError::config(format!("Required environment variable '{name}' is not set")))
}
