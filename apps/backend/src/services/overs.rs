//! Over use cases.

use sea_orm::ConnectionTrait;
use serde::Deserialize;

use crate::errors::domain::{DomainError, NotFoundKind, ValidationKind};
use crate::repos::overs::{self, Over, OverCreate};
use crate::repos::{innings, players};

#[derive(Debug, Default, Clone, Deserialize)]
pub struct OverPayload {
    pub innings_id: Option<i64>,
    pub over_number: Option<i32>,
    pub bowler_id: Option<i64>,
}

pub struct OverService;

impl OverService {
    pub fn new() -> Self {
        Self
    }

    pub async fn list<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        innings_id: Option<i64>,
    ) -> Result<Vec<Over>, DomainError> {
        overs::list_overs(conn, innings_id).await
    }

    pub async fn get<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        over_id: i64,
    ) -> Result<Over, DomainError> {
        overs::require_over(conn, over_id).await
    }

    pub async fn create<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        payload: OverPayload,
    ) -> Result<Over, DomainError> {
        let (Some(innings_id), Some(over_number), Some(bowler_id)) =
            (payload.innings_id, payload.over_number, payload.bowler_id)
        else {
            return Err(DomainError::validation(
                ValidationKind::MissingField,
                "All fields are required",
            ));
        };
        if over_number < 1 {
            return Err(DomainError::validation_other(
                "over_number must be at least 1",
            ));
        }
        innings::require_innings(conn, innings_id).await?;
        players::require_player(conn, bowler_id).await?;
        overs::create_over(
            conn,
            OverCreate {
                innings_id,
                over_number,
                bowler_id,
            },
        )
        .await
    }

    pub async fn delete<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        over_id: i64,
    ) -> Result<(), DomainError> {
        if !overs::delete_over(conn, over_id).await? {
            return Err(DomainError::not_found(NotFoundKind::Over, "Over not found"));
        }
        Ok(())
    }
}

impl Default for OverService {
    fn default() -> Self {
        Self::new()
    }
}
