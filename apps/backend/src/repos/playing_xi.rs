//! Playing XI repository functions for domain layer.

use sea_orm::ConnectionTrait;
use serde::Serialize;

use super::{players, teams};
use crate::adapters::playing_xi_sea as playing_xi_adapter;
pub use crate::adapters::playing_xi_sea::PlayingXiCreate;
use crate::errors::domain::DomainError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayingXiEntry {
    pub id: i64,
    pub match_id: i64,
    pub team_id: i64,
    pub player_id: i64,
    pub is_playing_xi: bool,
    pub player_name: Option<String>,
    pub team_name: Option<String>,
}

/// Selected players for a match, ordered by team then player name.
pub async fn list_for_match<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    match_id: i64,
) -> Result<Vec<PlayingXiEntry>, DomainError> {
    let rows = playing_xi_adapter::list_for_match(conn, match_id).await?;

    let player_ids: Vec<i64> = rows.iter().map(|r| r.player_id).collect();
    let mut team_ids: Vec<i64> = rows.iter().map(|r| r.team_id).collect();
    team_ids.sort_unstable();
    team_ids.dedup();
    let player_names = players::names_by_id(conn, &player_ids).await?;
    let team_names = teams::names_by_id(conn, &team_ids).await?;

    let mut entries: Vec<PlayingXiEntry> = rows
        .into_iter()
        .map(|row| PlayingXiEntry {
            player_name: player_names.get(&row.player_id).cloned(),
            team_name: team_names.get(&row.team_id).cloned(),
            id: row.id,
            match_id: row.match_id,
            team_id: row.team_id,
            player_id: row.player_id,
            is_playing_xi: row.is_playing_xi,
        })
        .collect();
    entries.sort_by(|a, b| {
        a.team_id
            .cmp(&b.team_id)
            .then_with(|| a.player_name.cmp(&b.player_name))
    });
    Ok(entries)
}

/// Player ids selected for `team_id` in this match.
pub async fn selected_players<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    match_id: i64,
    team_id: i64,
) -> Result<Vec<i64>, DomainError> {
    let rows = playing_xi_adapter::list_for_match(conn, match_id).await?;
    Ok(rows
        .into_iter()
        .filter(|r| r.team_id == team_id && r.is_playing_xi)
        .map(|r| r.player_id)
        .collect())
}

pub async fn create_entry<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: PlayingXiCreate,
) -> Result<i64, DomainError> {
    Ok(playing_xi_adapter::create_entry(conn, dto).await?.id)
}
