//! Ball CRUD. Scored deliveries go through `live_scoring` instead.

use sea_orm::ConnectionTrait;
use serde::Deserialize;
use tracing::info;

use crate::domain::ball::{check_runs, ExtraType, WicketType};
use crate::errors::domain::{DomainError, NotFoundKind, ValidationKind};
use crate::repos::balls::{self, Ball, NewBall};
use crate::repos::{overs, players};

#[derive(Debug, Default, Clone, Deserialize)]
pub struct BallPayload {
    pub over_id: Option<i64>,
    pub ball_number: Option<i32>,
    pub batsman_id: Option<i64>,
    pub bowler_id: Option<i64>,
    pub runs_off_bat: Option<i32>,
    pub extra_type: Option<String>,
    pub extra_runs: Option<i32>,
    pub is_legal_delivery: Option<bool>,
    pub wicket_type: Option<String>,
    pub out_player_id: Option<i64>,
}

/// Parse an optional enum field; empty strings count as absent.
pub(crate) fn parse_optional<T>(raw: Option<&str>) -> Result<Option<T>, DomainError>
where
    T: std::str::FromStr<Err = DomainError>,
{
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value.parse().map(Some),
    }
}

impl BallPayload {
    fn validate(self) -> Result<NewBall, DomainError> {
        let (
            Some(over_id),
            Some(ball_number),
            Some(batsman_id),
            Some(bowler_id),
            Some(runs_off_bat),
            Some(is_legal_delivery),
        ) = (
            self.over_id,
            self.ball_number,
            self.batsman_id,
            self.bowler_id,
            self.runs_off_bat,
            self.is_legal_delivery,
        )
        else {
            return Err(DomainError::validation(
                ValidationKind::MissingField,
                "over_id, ball_number, batsman_id, bowler_id, runs_off_bat, and is_legal_delivery are required",
            ));
        };

        let extra_type = parse_optional::<ExtraType>(self.extra_type.as_deref())?;
        let wicket_type = parse_optional::<WicketType>(self.wicket_type.as_deref())?;
        let extra_runs = self.extra_runs.unwrap_or(0);

        if ball_number < 1 {
            return Err(DomainError::validation(
                ValidationKind::InvalidBallNumber,
                "ball_number must be at least 1",
            ));
        }
        check_runs(runs_off_bat, extra_runs)?;
        if wicket_type.is_some() && self.out_player_id.is_none() {
            return Err(DomainError::validation(
                ValidationKind::WicketWithoutOutPlayer,
                "out_player_id is required when a wicket falls",
            ));
        }

        Ok(NewBall {
            over_id,
            ball_number,
            batsman_id,
            bowler_id,
            runs_off_bat,
            extra_type,
            extra_runs,
            is_legal_delivery,
            wicket_type,
            out_player_id: self.out_player_id,
        })
    }
}

pub struct BallService;

impl BallService {
    pub fn new() -> Self {
        Self
    }

    pub async fn list<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        over_id: Option<i64>,
    ) -> Result<Vec<Ball>, DomainError> {
        balls::list_balls(conn, over_id).await
    }

    pub async fn get<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        ball_id: i64,
    ) -> Result<Ball, DomainError> {
        balls::require_ball(conn, ball_id).await
    }

    async fn check_references<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        ball: &NewBall,
    ) -> Result<(), DomainError> {
        overs::require_over(conn, ball.over_id).await?;
        players::require_player(conn, ball.batsman_id).await?;
        players::require_player(conn, ball.bowler_id).await?;
        if let Some(out) = ball.out_player_id {
            players::require_player(conn, out).await?;
        }
        Ok(())
    }

    pub async fn create<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        payload: BallPayload,
    ) -> Result<Ball, DomainError> {
        let ball = payload.validate()?;
        self.check_references(conn, &ball).await?;
        let created = balls::create_ball(conn, ball).await?;
        info!(ball_id = created.id, over_id = created.over_id, "ball created");
        Ok(created)
    }

    pub async fn update<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        ball_id: i64,
        payload: BallPayload,
    ) -> Result<Ball, DomainError> {
        let ball = payload.validate()?;
        balls::require_ball(conn, ball_id).await?;
        self.check_references(conn, &ball).await?;
        balls::update_ball(conn, ball_id, ball).await
    }

    pub async fn delete<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        ball_id: i64,
    ) -> Result<(), DomainError> {
        if !balls::delete_ball(conn, ball_id).await? {
            return Err(DomainError::not_found(NotFoundKind::Ball, "Ball not found"));
        }
        Ok(())
    }
}

impl Default for BallService {
    fn default() -> Self {
        Self::new()
    }
}
