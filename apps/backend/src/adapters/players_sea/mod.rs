//! SeaORM adapter for players.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, QueryOrder,
    Set,
};

use crate::entities::players;

pub mod dto;

pub use dto::PlayerFields;

/// All players ordered by name, optionally restricted to one team.
pub async fn list<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    team_id: Option<i64>,
) -> Result<Vec<players::Model>, sea_orm::DbErr> {
    let mut query = players::Entity::find();
    if let Some(team_id) = team_id {
        query = query.filter(players::Column::TeamId.eq(team_id));
    }
    query
        .order_by_asc(players::Column::Name)
        .order_by_asc(players::Column::Id)
        .all(conn)
        .await
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player_id: i64,
) -> Result<Option<players::Model>, sea_orm::DbErr> {
    players::Entity::find_by_id(player_id).one(conn).await
}

pub async fn find_by_ids<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    ids: &[i64],
) -> Result<Vec<players::Model>, sea_orm::DbErr> {
    if ids.is_empty() {
        return Ok(Vec::new());
    }
    players::Entity::find()
        .filter(players::Column::Id.is_in(ids.iter().copied()))
        .all(conn)
        .await
}

pub async fn create_player<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: PlayerFields,
) -> Result<players::Model, sea_orm::DbErr> {
    players::ActiveModel {
        id: NotSet,
        name: Set(dto.name),
        date_of_birth: Set(dto.date_of_birth),
        role: Set(dto.role),
        team_id: Set(dto.team_id),
    }
    .insert(conn)
    .await
}

pub async fn update_player<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player_id: i64,
    dto: PlayerFields,
) -> Result<players::Model, sea_orm::DbErr> {
    players::ActiveModel {
        id: Set(player_id),
        name: Set(dto.name),
        date_of_birth: Set(dto.date_of_birth),
        role: Set(dto.role),
        team_id: Set(dto.team_id),
    }
    .update(conn)
    .await
}

pub async fn delete_player<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player_id: i64,
) -> Result<u64, sea_orm::DbErr> {
    let result = players::Entity::delete_by_id(player_id).exec(conn).await?;
    Ok(result.rows_affected)
}
