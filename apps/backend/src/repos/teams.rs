//! Team repository functions for domain layer.

use std::collections::HashMap;

use sea_orm::ConnectionTrait;
use serde::Serialize;

use crate::adapters::teams_sea as teams_adapter;
use crate::entities::teams;
use crate::errors::domain::{DomainError, NotFoundKind};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Team {
    pub id: i64,
    pub name: String,
    pub country_code: String,
}

impl From<teams::Model> for Team {
    fn from(model: teams::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            country_code: model.country_code,
        }
    }
}

pub async fn list_teams<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<Team>, DomainError> {
    let rows = teams_adapter::list_all(conn).await?;
    Ok(rows.into_iter().map(Team::from).collect())
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    team_id: i64,
) -> Result<Option<Team>, DomainError> {
    Ok(teams_adapter::find_by_id(conn, team_id).await?.map(Team::from))
}

pub async fn require_team<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    team_id: i64,
) -> Result<Team, DomainError> {
    find_by_id(conn, team_id)
        .await?
        .ok_or_else(|| DomainError::not_found(NotFoundKind::Team, "Team not found"))
}

/// id -> name for the given teams; unknown ids are simply absent.
pub async fn names_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    ids: &[i64],
) -> Result<HashMap<i64, String>, DomainError> {
    let rows = teams_adapter::find_by_ids(conn, ids).await?;
    Ok(rows.into_iter().map(|t| (t.id, t.name)).collect())
}

pub async fn create_team<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: teams_adapter::TeamFields,
) -> Result<Team, DomainError> {
    Ok(Team::from(teams_adapter::create_team(conn, dto).await?))
}

pub async fn update_team<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    team_id: i64,
    dto: teams_adapter::TeamFields,
) -> Result<Team, DomainError> {
    Ok(Team::from(
        teams_adapter::update_team(conn, team_id, dto).await?,
    ))
}

/// Returns false when no team had this id.
pub async fn delete_team<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    team_id: i64,
) -> Result<bool, DomainError> {
    Ok(teams_adapter::delete_team(conn, team_id).await? > 0)
}
