//! Innings use cases.

use sea_orm::ConnectionTrait;
use serde::Deserialize;
use tracing::info;

use crate::errors::domain::{DomainError, NotFoundKind, ValidationKind};
use crate::repos::innings::{self, Innings, InningsCreate};
use crate::repos::matches;

#[derive(Debug, Default, Clone, Deserialize)]
pub struct InningsPayload {
    pub match_id: Option<i64>,
    pub batting_team_id: Option<i64>,
    pub bowling_team_id: Option<i64>,
    pub innings_number: Option<i16>,
}

impl InningsPayload {
    fn validate(self) -> Result<InningsCreate, DomainError> {
        let (Some(match_id), Some(batting_team_id), Some(bowling_team_id), Some(innings_number)) = (
            self.match_id,
            self.batting_team_id,
            self.bowling_team_id,
            self.innings_number,
        ) else {
            return Err(DomainError::validation(
                ValidationKind::MissingField,
                "All fields are required",
            ));
        };
        if batting_team_id == bowling_team_id {
            return Err(DomainError::validation(
                ValidationKind::SameTeams,
                "Batting team and bowling team must be different",
            ));
        }
        if !(1..=2).contains(&innings_number) {
            return Err(DomainError::validation(
                ValidationKind::InvalidInningsNumber,
                "innings_number must be 1 or 2",
            ));
        }
        Ok(InningsCreate {
            match_id,
            batting_team_id,
            bowling_team_id,
            innings_number,
        })
    }
}

pub struct InningsService;

impl InningsService {
    pub fn new() -> Self {
        Self
    }

    pub async fn list<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        match_id: Option<i64>,
    ) -> Result<Vec<Innings>, DomainError> {
        innings::list_innings(conn, match_id).await
    }

    pub async fn get<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        innings_id: i64,
    ) -> Result<Innings, DomainError> {
        innings::require_innings(conn, innings_id).await
    }

    pub async fn create<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        payload: InningsPayload,
    ) -> Result<Innings, DomainError> {
        let dto = payload.validate()?;
        let game = matches::require_match(conn, dto.match_id).await?;
        if !game.has_team(dto.batting_team_id) || !game.has_team(dto.bowling_team_id) {
            return Err(DomainError::validation(
                ValidationKind::TeamsNotInMatch,
                "Batting and bowling teams must be the match's teams",
            ));
        }
        let created = innings::create_innings(conn, dto).await?;
        info!(
            innings_id = created.id,
            match_id = created.match_id,
            innings_number = created.innings_number,
            "innings created"
        );
        Ok(created)
    }

    pub async fn delete<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        innings_id: i64,
    ) -> Result<(), DomainError> {
        if !innings::delete_innings(conn, innings_id).await? {
            return Err(DomainError::not_found(
                NotFoundKind::Innings,
                "Innings not found",
            ));
        }
        Ok(())
    }
}

impl Default for InningsService {
    fn default() -> Self {
        Self::new()
    }
}
