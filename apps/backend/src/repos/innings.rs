//! Innings repository functions for domain layer.

use sea_orm::ConnectionTrait;
use serde::Serialize;

use super::teams;
use crate::adapters::innings_sea as innings_adapter;
pub use crate::adapters::innings_sea::InningsCreate;
use crate::entities::innings;
use crate::errors::domain::{DomainError, NotFoundKind};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Innings {
    pub id: i64,
    pub match_id: i64,
    pub batting_team_id: i64,
    pub bowling_team_id: i64,
    pub innings_number: i16,
    pub batting_team_name: Option<String>,
    pub bowling_team_name: Option<String>,
}

async fn with_team_names<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    rows: Vec<innings::Model>,
) -> Result<Vec<Innings>, DomainError> {
    let mut ids: Vec<i64> = rows
        .iter()
        .flat_map(|i| [i.batting_team_id, i.bowling_team_id])
        .collect();
    ids.sort_unstable();
    ids.dedup();
    let names = teams::names_by_id(conn, &ids).await?;
    Ok(rows
        .into_iter()
        .map(|row| Innings {
            batting_team_name: names.get(&row.batting_team_id).cloned(),
            bowling_team_name: names.get(&row.bowling_team_id).cloned(),
            id: row.id,
            match_id: row.match_id,
            batting_team_id: row.batting_team_id,
            bowling_team_id: row.bowling_team_id,
            innings_number: row.innings_number,
        })
        .collect())
}

/// Ordered by match, then innings number.
pub async fn list_innings<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    match_id: Option<i64>,
) -> Result<Vec<Innings>, DomainError> {
    let rows = innings_adapter::list(conn, match_id).await?;
    with_team_names(conn, rows).await
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    innings_id: i64,
) -> Result<Option<Innings>, DomainError> {
    match innings_adapter::find_by_id(conn, innings_id).await? {
        Some(row) => Ok(with_team_names(conn, vec![row]).await?.pop()),
        None => Ok(None),
    }
}

pub async fn require_innings<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    innings_id: i64,
) -> Result<Innings, DomainError> {
    find_by_id(conn, innings_id)
        .await?
        .ok_or_else(|| DomainError::not_found(NotFoundKind::Innings, "Innings not found"))
}

pub async fn create_innings<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: InningsCreate,
) -> Result<Innings, DomainError> {
    let row = innings_adapter::create_innings(conn, dto).await?;
    require_innings(conn, row.id).await
}

pub async fn delete_innings<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    innings_id: i64,
) -> Result<bool, DomainError> {
    Ok(innings_adapter::delete_innings(conn, innings_id).await? > 0)
}
