//! Playing XI selection for a match.

use std::collections::HashMap;

use sea_orm::ConnectionTrait;
use serde::Deserialize;
use tracing::info;

use crate::errors::domain::{DomainError, NotFoundKind, ValidationKind};
use crate::repos::matches::{self, Match};
use crate::repos::playing_xi::{self, PlayingXiCreate, PlayingXiEntry};
use crate::repos::players;

pub const XI_SIZE: usize = 11;

#[derive(Debug, Default, Clone, Deserialize)]
pub struct PlayingXiSelection {
    pub team_id: Option<i64>,
    pub player_id: Option<i64>,
    pub is_playing_xi: Option<bool>,
}

#[derive(Debug, Default, Clone, Deserialize)]
pub struct PlayingXiPayload {
    pub players: Option<Vec<PlayingXiSelection>>,
}

pub struct PlayingXiService;

impl PlayingXiService {
    pub fn new() -> Self {
        Self
    }

    /// Selected players for the match, ordered by team then name.
    pub async fn list<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        match_id: i64,
    ) -> Result<Vec<PlayingXiEntry>, DomainError> {
        matches::require_match(conn, match_id).await?;
        let entries = playing_xi::list_for_match(conn, match_id).await?;
        Ok(entries.into_iter().filter(|e| e.is_playing_xi).collect())
    }

    /// Add players to the match's XI; returns the inserted entries.
    pub async fn add<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        match_id: i64,
        payload: PlayingXiPayload,
    ) -> Result<Vec<PlayingXiEntry>, DomainError> {
        let selections = match payload.players {
            Some(list) if !list.is_empty() => list,
            _ => {
                return Err(DomainError::validation(
                    ValidationKind::PlayersRequired,
                    "Players array is required",
                ))
            }
        };
        let game = matches::require_match(conn, match_id).await?;

        let mut rows = Vec::with_capacity(selections.len());
        for sel in selections {
            let (Some(team_id), Some(player_id)) = (sel.team_id, sel.player_id) else {
                return Err(DomainError::validation(
                    ValidationKind::MissingField,
                    "Each player entry requires team_id and player_id",
                ));
            };
            rows.push(PlayingXiCreate {
                match_id,
                team_id,
                player_id,
                is_playing_xi: sel.is_playing_xi.unwrap_or(true),
            });
        }

        self.check_selection(conn, &game, &rows).await?;

        let mut inserted = Vec::with_capacity(rows.len());
        for row in rows {
            inserted.push(playing_xi::create_entry(conn, row).await?);
        }
        info!(match_id, count = inserted.len(), "playing XI updated");

        let all = playing_xi::list_for_match(conn, match_id).await?;
        Ok(all
            .into_iter()
            .filter(|e| inserted.contains(&e.id))
            .collect())
    }

    async fn check_selection<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        game: &Match,
        rows: &[PlayingXiCreate],
    ) -> Result<(), DomainError> {
        let player_ids: Vec<i64> = rows.iter().map(|r| r.player_id).collect();
        let team_of = players::teams_by_player(conn, &player_ids).await?;

        let mut added: HashMap<i64, usize> = HashMap::new();
        for row in rows {
            if !game.has_team(row.team_id) {
                return Err(DomainError::validation(
                    ValidationKind::TeamsNotInMatch,
                    format!("Team {} is not playing in this match", row.team_id),
                ));
            }
            match team_of.get(&row.player_id) {
                None => {
                    return Err(DomainError::not_found(
                        NotFoundKind::Player,
                        format!("Player {} not found", row.player_id),
                    ))
                }
                Some(&team_id) if team_id != row.team_id => {
                    return Err(DomainError::validation(
                        ValidationKind::PlayerTeamMismatch,
                        format!(
                            "Player {} does not belong to team {}",
                            row.player_id, row.team_id
                        ),
                    ))
                }
                Some(_) => {}
            }
            if row.is_playing_xi {
                *added.entry(row.team_id).or_default() += 1;
            }
        }

        for (team_id, count) in added {
            let existing = playing_xi::selected_players(conn, game.id, team_id)
                .await?
                .len();
            if existing + count > XI_SIZE {
                return Err(DomainError::validation(
                    ValidationKind::PlayingXiFull,
                    format!("Team {team_id} cannot have more than {XI_SIZE} players in the XI"),
                ));
            }
        }
        Ok(())
    }
}

impl Default for PlayingXiService {
    fn default() -> Self {
        Self::new()
    }
}
