//! SeaORM adapter for matches.

use sea_orm::{ActiveModelTrait, ConnectionTrait, EntityTrait, NotSet, QueryOrder, Set};

use crate::entities::matches::{self, MatchStatus};

pub mod dto;

pub use dto::MatchFields;

/// Most recent fixtures first.
pub async fn list_all<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<matches::Model>, sea_orm::DbErr> {
    matches::Entity::find()
        .order_by_desc(matches::Column::MatchDate)
        .order_by_desc(matches::Column::Id)
        .all(conn)
        .await
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    match_id: i64,
) -> Result<Option<matches::Model>, sea_orm::DbErr> {
    matches::Entity::find_by_id(match_id).one(conn).await
}

pub async fn create_match<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: MatchFields,
) -> Result<matches::Model, sea_orm::DbErr> {
    matches::ActiveModel {
        id: NotSet,
        team1_id: Set(dto.team1_id),
        team2_id: Set(dto.team2_id),
        toss_winner_team_id: Set(dto.toss_winner_team_id),
        elected_to: Set(dto.elected_to),
        match_date: Set(dto.match_date),
        venue: Set(dto.venue),
        total_overs: Set(dto.total_overs),
        status: Set(dto.status),
    }
    .insert(conn)
    .await
}

pub async fn update_match<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    match_id: i64,
    dto: MatchFields,
) -> Result<matches::Model, sea_orm::DbErr> {
    matches::ActiveModel {
        id: Set(match_id),
        team1_id: Set(dto.team1_id),
        team2_id: Set(dto.team2_id),
        toss_winner_team_id: Set(dto.toss_winner_team_id),
        elected_to: Set(dto.elected_to),
        match_date: Set(dto.match_date),
        venue: Set(dto.venue),
        total_overs: Set(dto.total_overs),
        status: Set(dto.status),
    }
    .update(conn)
    .await
}

pub async fn set_status<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    match_id: i64,
    status: MatchStatus,
) -> Result<matches::Model, sea_orm::DbErr> {
    matches::ActiveModel {
        id: Set(match_id),
        status: Set(status),
        ..Default::default()
    }
    .update(conn)
    .await
}

pub async fn delete_match<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    match_id: i64,
) -> Result<u64, sea_orm::DbErr> {
    let result = matches::Entity::delete_by_id(match_id).exec(conn).await?;
    Ok(result.rows_affected)
}
