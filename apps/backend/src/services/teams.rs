//! Team use cases.

use sea_orm::ConnectionTrait;
use serde::Deserialize;
use tracing::info;

use super::non_blank;
use crate::adapters::teams_sea::TeamFields;
use crate::errors::domain::{DomainError, NotFoundKind, ValidationKind};
use crate::repos::teams::{self, Team};

#[derive(Debug, Default, Clone, Deserialize)]
pub struct TeamPayload {
    pub name: Option<String>,
    pub country_code: Option<String>,
}

impl TeamPayload {
    fn validate(self) -> Result<TeamFields, DomainError> {
        let (Some(name), Some(country_code)) =
            (non_blank(self.name), non_blank(self.country_code))
        else {
            return Err(DomainError::validation(
                ValidationKind::MissingField,
                "Name and country_code are required",
            ));
        };
        let code_ok = (2..=3).contains(&country_code.len())
            && country_code.chars().all(|c| c.is_ascii_uppercase());
        if !code_ok {
            return Err(DomainError::validation(
                ValidationKind::InvalidCountryCode,
                "country_code must be 2-3 uppercase letters",
            ));
        }
        Ok(TeamFields { name, country_code })
    }
}

pub struct TeamService;

impl TeamService {
    pub fn new() -> Self {
        Self
    }

    pub async fn list<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
    ) -> Result<Vec<Team>, DomainError> {
        teams::list_teams(conn).await
    }

    pub async fn get<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        team_id: i64,
    ) -> Result<Team, DomainError> {
        teams::require_team(conn, team_id).await
    }

    pub async fn create<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        payload: TeamPayload,
    ) -> Result<Team, DomainError> {
        let fields = payload.validate()?;
        let team = teams::create_team(conn, fields).await?;
        info!(team_id = team.id, "team created");
        Ok(team)
    }

    pub async fn update<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        team_id: i64,
        payload: TeamPayload,
    ) -> Result<Team, DomainError> {
        let fields = payload.validate()?;
        teams::require_team(conn, team_id).await?;
        teams::update_team(conn, team_id, fields).await
    }

    pub async fn delete<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        team_id: i64,
    ) -> Result<(), DomainError> {
        if !teams::delete_team(conn, team_id).await? {
            return Err(DomainError::not_found(NotFoundKind::Team, "Team not found"));
        }
        info!(team_id, "team deleted");
        Ok(())
    }
}

impl Default for TeamService {
    fn default() -> Self {
        Self::new()
    }
}
