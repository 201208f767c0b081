//! SeaORM adapter for balls.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, QueryOrder,
    Set,
};

use crate::entities::balls;

pub mod dto;

pub use dto::BallFields;

fn active_model(dto: BallFields) -> balls::ActiveModel {
    balls::ActiveModel {
        id: NotSet,
        over_id: Set(dto.over_id),
        ball_number: Set(dto.ball_number),
        batsman_id: Set(dto.batsman_id),
        bowler_id: Set(dto.bowler_id),
        runs_off_bat: Set(dto.runs_off_bat),
        extra_type: Set(dto.extra_type),
        extra_runs: Set(dto.extra_runs),
        is_legal_delivery: Set(dto.is_legal_delivery),
        wicket_type: Set(dto.wicket_type),
        out_player_id: Set(dto.out_player_id),
    }
}

/// Ordered by (over, ball number).
pub async fn list<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    over_id: Option<i64>,
) -> Result<Vec<balls::Model>, sea_orm::DbErr> {
    let mut query = balls::Entity::find();
    if let Some(over_id) = over_id {
        query = query.filter(balls::Column::OverId.eq(over_id));
    }
    query
        .order_by_asc(balls::Column::OverId)
        .order_by_asc(balls::Column::BallNumber)
        .all(conn)
        .await
}

/// Balls of several overs at once, ordered by (over, ball number).
pub async fn list_for_overs<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    over_ids: &[i64],
) -> Result<Vec<balls::Model>, sea_orm::DbErr> {
    if over_ids.is_empty() {
        return Ok(Vec::new());
    }
    balls::Entity::find()
        .filter(balls::Column::OverId.is_in(over_ids.iter().copied()))
        .order_by_asc(balls::Column::OverId)
        .order_by_asc(balls::Column::BallNumber)
        .all(conn)
        .await
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    ball_id: i64,
) -> Result<Option<balls::Model>, sea_orm::DbErr> {
    balls::Entity::find_by_id(ball_id).one(conn).await
}

pub async fn create_ball<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: BallFields,
) -> Result<balls::Model, sea_orm::DbErr> {
    active_model(dto).insert(conn).await
}

pub async fn update_ball<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    ball_id: i64,
    dto: BallFields,
) -> Result<balls::Model, sea_orm::DbErr> {
    let mut model = active_model(dto);
    model.id = Set(ball_id);
    model.update(conn).await
}

pub async fn delete_ball<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    ball_id: i64,
) -> Result<u64, sea_orm::DbErr> {
    let result = balls::Entity::delete_by_id(ball_id).exec(conn).await?;
    Ok(result.rows_affected)
}
