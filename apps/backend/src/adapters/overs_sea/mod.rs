//! SeaORM adapter for overs.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, QueryOrder,
    Set,
};

use crate::entities::overs;

pub mod dto;

pub use dto::OverCreate;

/// Ordered by (innings, over number).
pub async fn list<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    innings_id: Option<i64>,
) -> Result<Vec<overs::Model>, sea_orm::DbErr> {
    let mut query = overs::Entity::find();
    if let Some(innings_id) = innings_id {
        query = query.filter(overs::Column::InningsId.eq(innings_id));
    }
    query
        .order_by_asc(overs::Column::InningsId)
        .order_by_asc(overs::Column::OverNumber)
        .all(conn)
        .await
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    over_id: i64,
) -> Result<Option<overs::Model>, sea_orm::DbErr> {
    overs::Entity::find_by_id(over_id).one(conn).await
}

pub async fn find_by_number<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    innings_id: i64,
    over_number: i32,
) -> Result<Option<overs::Model>, sea_orm::DbErr> {
    overs::Entity::find()
        .filter(overs::Column::InningsId.eq(innings_id))
        .filter(overs::Column::OverNumber.eq(over_number))
        .one(conn)
        .await
}

pub async fn create_over<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: OverCreate,
) -> Result<overs::Model, sea_orm::DbErr> {
    overs::ActiveModel {
        id: NotSet,
        innings_id: Set(dto.innings_id),
        over_number: Set(dto.over_number),
        bowler_id: Set(dto.bowler_id),
    }
    .insert(conn)
    .await
}

pub async fn delete_over<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    over_id: i64,
) -> Result<u64, sea_orm::DbErr> {
    let result = overs::Entity::delete_by_id(over_id).exec(conn).await?;
    Ok(result.rows_affected)
}
