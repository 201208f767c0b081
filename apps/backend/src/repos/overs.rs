//! Over repository functions for domain layer.

use sea_orm::ConnectionTrait;
use serde::Serialize;

use super::players;
use crate::adapters::overs_sea as overs_adapter;
pub use crate::adapters::overs_sea::OverCreate;
use crate::entities::overs;
use crate::errors::domain::{DomainError, NotFoundKind};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Over {
    pub id: i64,
    pub innings_id: i64,
    pub over_number: i32,
    pub bowler_id: i64,
    pub bowler_name: Option<String>,
}

async fn with_bowler_names<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    rows: Vec<overs::Model>,
) -> Result<Vec<Over>, DomainError> {
    let mut ids: Vec<i64> = rows.iter().map(|o| o.bowler_id).collect();
    ids.sort_unstable();
    ids.dedup();
    let names = players::names_by_id(conn, &ids).await?;
    Ok(rows
        .into_iter()
        .map(|row| Over {
            bowler_name: names.get(&row.bowler_id).cloned(),
            id: row.id,
            innings_id: row.innings_id,
            over_number: row.over_number,
            bowler_id: row.bowler_id,
        })
        .collect())
}

/// Ordered by innings, then over number.
pub async fn list_overs<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    innings_id: Option<i64>,
) -> Result<Vec<Over>, DomainError> {
    let rows = overs_adapter::list(conn, innings_id).await?;
    with_bowler_names(conn, rows).await
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    over_id: i64,
) -> Result<Option<Over>, DomainError> {
    match overs_adapter::find_by_id(conn, over_id).await? {
        Some(row) => Ok(with_bowler_names(conn, vec![row]).await?.pop()),
        None => Ok(None),
    }
}

pub async fn require_over<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    over_id: i64,
) -> Result<Over, DomainError> {
    find_by_id(conn, over_id)
        .await?
        .ok_or_else(|| DomainError::not_found(NotFoundKind::Over, "Over not found"))
}

/// Existing over with this number, or a fresh one bowled by `bowler_id`.
pub async fn find_or_create<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: OverCreate,
) -> Result<Over, DomainError> {
    let id = match overs_adapter::find_by_number(conn, dto.innings_id, dto.over_number).await? {
        Some(existing) => existing.id,
        None => overs_adapter::create_over(conn, dto).await?.id,
    };
    require_over(conn, id).await
}

pub async fn create_over<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: OverCreate,
) -> Result<Over, DomainError> {
    let row = overs_adapter::create_over(conn, dto).await?;
    require_over(conn, row.id).await
}

pub async fn delete_over<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    over_id: i64,
) -> Result<bool, DomainError> {
    Ok(overs_adapter::delete_over(conn, over_id).await? > 0)
}
