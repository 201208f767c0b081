//! Player use cases.

use sea_orm::ConnectionTrait;
use serde::Deserialize;
use tracing::info;

use super::{non_blank, parse_date};
use crate::adapters::players_sea::PlayerFields;
use crate::errors::domain::{DomainError, NotFoundKind, ValidationKind};
use crate::repos::players::{self, Player};
use crate::repos::teams;

#[derive(Debug, Default, Clone, Deserialize)]
pub struct PlayerPayload {
    pub name: Option<String>,
    pub date_of_birth: Option<String>,
    pub role: Option<String>,
    pub team_id: Option<i64>,
}

impl PlayerPayload {
    fn validate(self) -> Result<PlayerFields, DomainError> {
        let (Some(name), Some(dob), Some(role), Some(team_id)) = (
            non_blank(self.name),
            non_blank(self.date_of_birth),
            non_blank(self.role),
            self.team_id,
        ) else {
            return Err(DomainError::validation(
                ValidationKind::MissingField,
                "Name, date_of_birth, role and team_id are required",
            ));
        };
        Ok(PlayerFields {
            name,
            date_of_birth: parse_date("date_of_birth", &dob)?,
            role,
            team_id,
        })
    }
}

pub struct PlayerService;

impl PlayerService {
    pub fn new() -> Self {
        Self
    }

    /// Players by name, optionally restricted to one team.
    pub async fn list<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        team_id: Option<i64>,
    ) -> Result<Vec<Player>, DomainError> {
        players::list_players(conn, team_id).await
    }

    pub async fn get<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        player_id: i64,
    ) -> Result<Player, DomainError> {
        players::require_player(conn, player_id).await
    }

    pub async fn create<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        payload: PlayerPayload,
    ) -> Result<Player, DomainError> {
        let fields = payload.validate()?;
        teams::require_team(conn, fields.team_id).await?;
        let player = players::create_player(conn, fields).await?;
        info!(player_id = player.id, team_id = player.team_id, "player created");
        Ok(player)
    }

    pub async fn update<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        player_id: i64,
        payload: PlayerPayload,
    ) -> Result<Player, DomainError> {
        let fields = payload.validate()?;
        players::require_player(conn, player_id).await?;
        teams::require_team(conn, fields.team_id).await?;
        players::update_player(conn, player_id, fields).await
    }

    pub async fn delete<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        player_id: i64,
    ) -> Result<(), DomainError> {
        if !players::delete_player(conn, player_id).await? {
            return Err(DomainError::not_found(
                NotFoundKind::Player,
                "Player not found",
            ));
        }
        info!(player_id, "player deleted");
        Ok(())
    }
}

impl Default for PlayerService {
    fn default() -> Self {
        Self::new()
    }
}
