//! SeaORM adapter for innings.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, QueryOrder,
    Set,
};

use crate::entities::innings;

pub mod dto;

pub use dto::InningsCreate;

/// Ordered by (match, innings number).
pub async fn list<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    match_id: Option<i64>,
) -> Result<Vec<innings::Model>, sea_orm::DbErr> {
    let mut query = innings::Entity::find();
    if let Some(match_id) = match_id {
        query = query.filter(innings::Column::MatchId.eq(match_id));
    }
    query
        .order_by_asc(innings::Column::MatchId)
        .order_by_asc(innings::Column::InningsNumber)
        .all(conn)
        .await
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    innings_id: i64,
) -> Result<Option<innings::Model>, sea_orm::DbErr> {
    innings::Entity::find_by_id(innings_id).one(conn).await
}

pub async fn create_innings<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: InningsCreate,
) -> Result<innings::Model, sea_orm::DbErr> {
    innings::ActiveModel {
        id: NotSet,
        match_id: Set(dto.match_id),
        batting_team_id: Set(dto.batting_team_id),
        bowling_team_id: Set(dto.bowling_team_id),
        innings_number: Set(dto.innings_number),
    }
    .insert(conn)
    .await
}

pub async fn delete_innings<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    innings_id: i64,
) -> Result<u64, sea_orm::DbErr> {
    let result = innings::Entity::delete_by_id(innings_id).exec(conn).await?;
    Ok(result.rows_affected)
}
