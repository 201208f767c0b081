//! Player repository functions for domain layer.

use std::collections::HashMap;

use sea_orm::ConnectionTrait;
use serde::Serialize;
use time::Date;

use super::teams;
use crate::adapters::players_sea as players_adapter;
use crate::entities::players;
use crate::errors::domain::{DomainError, NotFoundKind};

/// Player with the owning team's display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Player {
    pub id: i64,
    pub name: String,
    pub date_of_birth: Date,
    pub role: String,
    pub team_id: i64,
    pub team_name: Option<String>,
}

impl Player {
    fn from_model(model: players::Model, team_names: &HashMap<i64, String>) -> Self {
        Self {
            team_name: team_names.get(&model.team_id).cloned(),
            id: model.id,
            name: model.name,
            date_of_birth: model.date_of_birth,
            role: model.role,
            team_id: model.team_id,
        }
    }
}

async fn with_team_names<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    rows: Vec<players::Model>,
) -> Result<Vec<Player>, DomainError> {
    let mut team_ids: Vec<i64> = rows.iter().map(|p| p.team_id).collect();
    team_ids.sort_unstable();
    team_ids.dedup();
    let names = teams::names_by_id(conn, &team_ids).await?;
    Ok(rows
        .into_iter()
        .map(|row| Player::from_model(row, &names))
        .collect())
}

pub async fn list_players<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    team_id: Option<i64>,
) -> Result<Vec<Player>, DomainError> {
    let rows = players_adapter::list(conn, team_id).await?;
    with_team_names(conn, rows).await
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player_id: i64,
) -> Result<Option<Player>, DomainError> {
    match players_adapter::find_by_id(conn, player_id).await? {
        Some(row) => Ok(with_team_names(conn, vec![row]).await?.pop()),
        None => Ok(None),
    }
}

pub async fn require_player<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player_id: i64,
) -> Result<Player, DomainError> {
    find_by_id(conn, player_id)
        .await?
        .ok_or_else(|| DomainError::not_found(NotFoundKind::Player, "Player not found"))
}

/// Team membership of the given players (id -> team_id).
pub async fn teams_by_player<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    ids: &[i64],
) -> Result<HashMap<i64, i64>, DomainError> {
    let rows = players_adapter::find_by_ids(conn, ids).await?;
    Ok(rows.into_iter().map(|p| (p.id, p.team_id)).collect())
}

pub async fn names_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    ids: &[i64],
) -> Result<HashMap<i64, String>, DomainError> {
    let rows = players_adapter::find_by_ids(conn, ids).await?;
    Ok(rows.into_iter().map(|p| (p.id, p.name)).collect())
}

pub async fn create_player<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: players_adapter::PlayerFields,
) -> Result<Player, DomainError> {
    let row = players_adapter::create_player(conn, dto).await?;
    require_player(conn, row.id).await
}

pub async fn update_player<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player_id: i64,
    dto: players_adapter::PlayerFields,
) -> Result<Player, DomainError> {
    players_adapter::update_player(conn, player_id, dto).await?;
    require_player(conn, player_id).await
}

pub async fn delete_player<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player_id: i64,
) -> Result<bool, DomainError> {
    Ok(players_adapter::delete_player(conn, player_id).await? > 0)
}
