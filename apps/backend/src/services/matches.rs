//! Match use cases.

use sea_orm::ConnectionTrait;
use serde::Deserialize;
use tracing::info;

use super::{non_blank, parse_date};
use crate::domain::ball::MAX_TOTAL_OVERS;
use crate::errors::domain::{DomainError, NotFoundKind, ValidationKind};
use crate::repos::matches::{self, ElectedTo, Match, MatchFields, MatchStatus};
use crate::repos::teams;

#[derive(Debug, Default, Clone, Deserialize)]
pub struct MatchPayload {
    pub team1_id: Option<i64>,
    pub team2_id: Option<i64>,
    pub toss_winner_team_id: Option<i64>,
    pub elected_to: Option<String>,
    pub match_date: Option<String>,
    pub venue: Option<String>,
    pub total_overs: Option<i32>,
    pub status: Option<String>,
}

pub(crate) fn parse_elected_to(raw: &str) -> Result<ElectedTo, DomainError> {
    match raw {
        "bat" => Ok(ElectedTo::Bat),
        "bowl" => Ok(ElectedTo::Bowl),
        _ => Err(DomainError::validation(
            ValidationKind::InvalidElectedTo,
            "elected_to must be either \"bat\" or \"bowl\"",
        )),
    }
}

pub(crate) fn parse_status(raw: &str) -> Result<MatchStatus, DomainError> {
    match raw {
        "scheduled" => Ok(MatchStatus::Scheduled),
        "live" => Ok(MatchStatus::Live),
        "completed" => Ok(MatchStatus::Completed),
        _ => Err(DomainError::validation(
            ValidationKind::InvalidStatus,
            "status must be one of: scheduled, live, completed",
        )),
    }
}

impl MatchPayload {
    /// Checked fields; `status` stays `None` when the caller omitted it.
    fn validate(self) -> Result<(MatchFields, Option<MatchStatus>), DomainError> {
        let (
            Some(team1_id),
            Some(team2_id),
            Some(toss_winner_team_id),
            Some(elected_to),
            Some(match_date),
            Some(venue),
        ) = (
            self.team1_id,
            self.team2_id,
            self.toss_winner_team_id,
            non_blank(self.elected_to),
            non_blank(self.match_date),
            non_blank(self.venue),
        )
        else {
            return Err(DomainError::validation(
                ValidationKind::MissingField,
                "All fields are required",
            ));
        };

        if team1_id == team2_id {
            return Err(DomainError::validation(
                ValidationKind::SameTeams,
                "Team 1 and Team 2 must be different",
            ));
        }
        if toss_winner_team_id != team1_id && toss_winner_team_id != team2_id {
            return Err(DomainError::validation(
                ValidationKind::InvalidTossWinner,
                "Toss winner must be one of the two teams",
            ));
        }
        let elected_to = parse_elected_to(&elected_to)?;
        let status = non_blank(self.status)
            .map(|s| parse_status(&s))
            .transpose()?;
        if matches!(self.total_overs, Some(n) if !(1..=MAX_TOTAL_OVERS).contains(&n)) {
            return Err(DomainError::validation(
                ValidationKind::InvalidTotalOvers,
                format!("total_overs must be between 1 and {MAX_TOTAL_OVERS}"),
            ));
        }

        let fields = MatchFields {
            team1_id,
            team2_id,
            toss_winner_team_id,
            elected_to,
            match_date: parse_date("match_date", &match_date)?,
            venue,
            total_overs: self.total_overs,
            status: status.unwrap_or(MatchStatus::Scheduled),
        };
        Ok((fields, status))
    }
}

pub struct MatchService;

impl MatchService {
    pub fn new() -> Self {
        Self
    }

    /// Newest first.
    pub async fn list<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
    ) -> Result<Vec<Match>, DomainError> {
        matches::list_matches(conn).await
    }

    pub async fn get<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        match_id: i64,
    ) -> Result<Match, DomainError> {
        matches::require_match(conn, match_id).await
    }

    pub async fn create<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        payload: MatchPayload,
    ) -> Result<Match, DomainError> {
        let (fields, _) = payload.validate()?;
        teams::require_team(conn, fields.team1_id).await?;
        teams::require_team(conn, fields.team2_id).await?;
        let created = matches::create_match(conn, fields).await?;
        info!(
            match_id = created.id,
            team1_id = created.team1_id,
            team2_id = created.team2_id,
            "match created"
        );
        Ok(created)
    }

    pub async fn update<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        match_id: i64,
        payload: MatchPayload,
    ) -> Result<Match, DomainError> {
        let (mut fields, status) = payload.validate()?;
        let existing = matches::require_match(conn, match_id).await?;
        if status.is_none() {
            fields.status = existing.status;
        }
        teams::require_team(conn, fields.team1_id).await?;
        teams::require_team(conn, fields.team2_id).await?;
        matches::update_match(conn, match_id, fields).await
    }

    pub async fn delete<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        match_id: i64,
    ) -> Result<(), DomainError> {
        if !matches::delete_match(conn, match_id).await? {
            return Err(DomainError::not_found(NotFoundKind::Match, "Match not found"));
        }
        info!(match_id, "match deleted");
        Ok(())
    }
}

impl Default for MatchService {
    fn default() -> Self {
        Self::new()
    }
}
