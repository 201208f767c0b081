//! Ball repository functions for domain layer.

use std::collections::HashMap;

use sea_orm::ConnectionTrait;
use serde::Serialize;

use super::overs::{self, Over};
use super::players;
use crate::adapters::balls_sea::{self as balls_adapter, BallFields};
use crate::domain::ball::{BallRecord, ExtraType, WicketType};
use crate::entities::balls as ball_entity;
use crate::errors::domain::{DomainError, NotFoundKind};

impl From<ball_entity::ExtraType> for ExtraType {
    fn from(value: ball_entity::ExtraType) -> Self {
        match value {
            ball_entity::ExtraType::NoBall => ExtraType::NoBall,
            ball_entity::ExtraType::Wide => ExtraType::Wide,
            ball_entity::ExtraType::Bye => ExtraType::Bye,
            ball_entity::ExtraType::LegBye => ExtraType::LegBye,
        }
    }
}

impl From<ExtraType> for ball_entity::ExtraType {
    fn from(value: ExtraType) -> Self {
        match value {
            ExtraType::NoBall => ball_entity::ExtraType::NoBall,
            ExtraType::Wide => ball_entity::ExtraType::Wide,
            ExtraType::Bye => ball_entity::ExtraType::Bye,
            ExtraType::LegBye => ball_entity::ExtraType::LegBye,
        }
    }
}

impl From<ball_entity::WicketType> for WicketType {
    fn from(value: ball_entity::WicketType) -> Self {
        match value {
            ball_entity::WicketType::Caught => WicketType::Caught,
            ball_entity::WicketType::RunOut => WicketType::RunOut,
            ball_entity::WicketType::Bowled => WicketType::Bowled,
            ball_entity::WicketType::Lbw => WicketType::Lbw,
        }
    }
}

impl From<WicketType> for ball_entity::WicketType {
    fn from(value: WicketType) -> Self {
        match value {
            WicketType::Caught => ball_entity::WicketType::Caught,
            WicketType::RunOut => ball_entity::WicketType::RunOut,
            WicketType::Bowled => ball_entity::WicketType::Bowled,
            WicketType::Lbw => ball_entity::WicketType::Lbw,
        }
    }
}

/// Ball values as written by services; enums are domain types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBall {
    pub over_id: i64,
    pub ball_number: i32,
    pub batsman_id: i64,
    pub bowler_id: i64,
    pub runs_off_bat: i32,
    pub extra_type: Option<ExtraType>,
    pub extra_runs: i32,
    pub is_legal_delivery: bool,
    pub wicket_type: Option<WicketType>,
    pub out_player_id: Option<i64>,
}

impl From<NewBall> for BallFields {
    fn from(ball: NewBall) -> Self {
        Self {
            over_id: ball.over_id,
            ball_number: ball.ball_number,
            batsman_id: ball.batsman_id,
            bowler_id: ball.bowler_id,
            runs_off_bat: ball.runs_off_bat,
            extra_type: ball.extra_type.map(Into::into),
            extra_runs: Some(ball.extra_runs),
            is_legal_delivery: ball.is_legal_delivery,
            wicket_type: ball.wicket_type.map(Into::into),
            out_player_id: ball.out_player_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ball {
    pub id: i64,
    pub over_id: i64,
    pub ball_number: i32,
    pub batsman_id: i64,
    pub bowler_id: i64,
    pub runs_off_bat: i32,
    pub extra_type: Option<ExtraType>,
    pub extra_runs: i32,
    pub is_legal_delivery: bool,
    pub wicket_type: Option<WicketType>,
    pub out_player_id: Option<i64>,
    pub batsman_name: Option<String>,
    pub bowler_name: Option<String>,
    pub out_player_name: Option<String>,
}

impl Ball {
    pub fn to_record(&self) -> BallRecord {
        BallRecord {
            batsman_id: self.batsman_id,
            bowler_id: self.bowler_id,
            runs_off_bat: self.runs_off_bat,
            extra_type: self.extra_type,
            extra_runs: self.extra_runs,
            is_legal_delivery: self.is_legal_delivery,
            wicket_type: self.wicket_type,
            out_player_id: self.out_player_id,
        }
    }
}

async fn with_player_names<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    rows: Vec<ball_entity::Model>,
) -> Result<Vec<Ball>, DomainError> {
    let mut ids: Vec<i64> = rows
        .iter()
        .flat_map(|b| [Some(b.batsman_id), Some(b.bowler_id), b.out_player_id])
        .flatten()
        .collect();
    ids.sort_unstable();
    ids.dedup();
    let names = players::names_by_id(conn, &ids).await?;
    Ok(rows
        .into_iter()
        .map(|row| Ball {
            batsman_name: names.get(&row.batsman_id).cloned(),
            bowler_name: names.get(&row.bowler_id).cloned(),
            out_player_name: row.out_player_id.and_then(|id| names.get(&id).cloned()),
            id: row.id,
            over_id: row.over_id,
            ball_number: row.ball_number,
            batsman_id: row.batsman_id,
            bowler_id: row.bowler_id,
            runs_off_bat: row.runs_off_bat,
            extra_type: row.extra_type.map(Into::into),
            extra_runs: row.extra_runs.unwrap_or(0),
            is_legal_delivery: row.is_legal_delivery,
            wicket_type: row.wicket_type.map(Into::into),
            out_player_id: row.out_player_id,
        })
        .collect())
}

/// Ordered by over, then ball number.
pub async fn list_balls<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    over_id: Option<i64>,
) -> Result<Vec<Ball>, DomainError> {
    let rows = balls_adapter::list(conn, over_id).await?;
    with_player_names(conn, rows).await
}

/// Balls of several overs in one query, in (over, ball number) order.
pub async fn list_for_overs<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    over_ids: &[i64],
) -> Result<Vec<Ball>, DomainError> {
    let rows = balls_adapter::list_for_overs(conn, over_ids).await?;
    with_player_names(conn, rows).await
}

/// Overs of an innings in over-number order, each with its balls.
pub async fn overs_with_balls<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    innings_id: i64,
) -> Result<Vec<(Over, Vec<Ball>)>, DomainError> {
    let overs = overs::list_overs(conn, Some(innings_id)).await?;
    let over_ids: Vec<i64> = overs.iter().map(|o| o.id).collect();

    let mut by_over: HashMap<i64, Vec<Ball>> = HashMap::new();
    for ball in list_for_overs(conn, &over_ids).await? {
        by_over.entry(ball.over_id).or_default().push(ball);
    }
    Ok(overs
        .into_iter()
        .map(|over| {
            let balls = by_over.remove(&over.id).unwrap_or_default();
            (over, balls)
        })
        .collect())
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    ball_id: i64,
) -> Result<Option<Ball>, DomainError> {
    match balls_adapter::find_by_id(conn, ball_id).await? {
        Some(row) => Ok(with_player_names(conn, vec![row]).await?.pop()),
        None => Ok(None),
    }
}

pub async fn require_ball<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    ball_id: i64,
) -> Result<Ball, DomainError> {
    find_by_id(conn, ball_id)
        .await?
        .ok_or_else(|| DomainError::not_found(NotFoundKind::Ball, "Ball not found"))
}

pub async fn create_ball<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    ball: NewBall,
) -> Result<Ball, DomainError> {
    let row = balls_adapter::create_ball(conn, ball.into()).await?;
    require_ball(conn, row.id).await
}

pub async fn update_ball<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    ball_id: i64,
    ball: NewBall,
) -> Result<Ball, DomainError> {
    balls_adapter::update_ball(conn, ball_id, ball.into()).await?;
    require_ball(conn, ball_id).await
}

pub async fn delete_ball<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    ball_id: i64,
) -> Result<bool, DomainError> {
    Ok(balls_adapter::delete_ball(conn, ball_id).await? > 0)
}
