//! Match repository functions for domain layer.

use std::collections::HashMap;

use sea_orm::ConnectionTrait;
use serde::Serialize;
use time::Date;

use super::teams;
use crate::adapters::matches_sea as matches_adapter;
pub use crate::adapters::matches_sea::MatchFields;
pub use crate::entities::matches::{ElectedTo, MatchStatus};
use crate::entities::matches;
use crate::errors::domain::{DomainError, NotFoundKind};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Match {
    pub id: i64,
    pub team1_id: i64,
    pub team2_id: i64,
    pub toss_winner_team_id: i64,
    pub elected_to: ElectedTo,
    pub match_date: Date,
    pub venue: String,
    pub total_overs: Option<i32>,
    pub status: MatchStatus,
    pub team1_name: Option<String>,
    pub team2_name: Option<String>,
    pub toss_winner_team_name: Option<String>,
}

impl Match {
    fn from_model(model: matches::Model, names: &HashMap<i64, String>) -> Self {
        Self {
            team1_name: names.get(&model.team1_id).cloned(),
            team2_name: names.get(&model.team2_id).cloned(),
            toss_winner_team_name: names.get(&model.toss_winner_team_id).cloned(),
            id: model.id,
            team1_id: model.team1_id,
            team2_id: model.team2_id,
            toss_winner_team_id: model.toss_winner_team_id,
            elected_to: model.elected_to,
            match_date: model.match_date,
            venue: model.venue,
            total_overs: model.total_overs,
            status: model.status,
        }
    }

    pub fn has_team(&self, team_id: i64) -> bool {
        self.team1_id == team_id || self.team2_id == team_id
    }

    pub fn opponent_of(&self, team_id: i64) -> i64 {
        if team_id == self.team1_id {
            self.team2_id
        } else {
            self.team1_id
        }
    }
}

async fn with_team_names<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    rows: Vec<matches::Model>,
) -> Result<Vec<Match>, DomainError> {
    let mut ids: Vec<i64> = rows
        .iter()
        .flat_map(|m| [m.team1_id, m.team2_id, m.toss_winner_team_id])
        .collect();
    ids.sort_unstable();
    ids.dedup();
    let names = teams::names_by_id(conn, &ids).await?;
    Ok(rows
        .into_iter()
        .map(|row| Match::from_model(row, &names))
        .collect())
}

pub async fn list_matches<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<Match>, DomainError> {
    let rows = matches_adapter::list_all(conn).await?;
    with_team_names(conn, rows).await
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    match_id: i64,
) -> Result<Option<Match>, DomainError> {
    match matches_adapter::find_by_id(conn, match_id).await? {
        Some(row) => Ok(with_team_names(conn, vec![row]).await?.pop()),
        None => Ok(None),
    }
}

pub async fn require_match<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    match_id: i64,
) -> Result<Match, DomainError> {
    find_by_id(conn, match_id)
        .await?
        .ok_or_else(|| DomainError::not_found(NotFoundKind::Match, "Match not found"))
}

pub async fn create_match<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: MatchFields,
) -> Result<Match, DomainError> {
    let row = matches_adapter::create_match(conn, dto).await?;
    require_match(conn, row.id).await
}

pub async fn update_match<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    match_id: i64,
    dto: MatchFields,
) -> Result<Match, DomainError> {
    matches_adapter::update_match(conn, match_id, dto).await?;
    require_match(conn, match_id).await
}

pub async fn set_status<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    match_id: i64,
    status: MatchStatus,
) -> Result<(), DomainError> {
    matches_adapter::set_status(conn, match_id, status).await?;
    Ok(())
}

pub async fn delete_match<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    match_id: i64,
) -> Result<bool, DomainError> {
    Ok(matches_adapter::delete_match(conn, match_id).await? > 0)
}
