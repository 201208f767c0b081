//! SeaORM adapter for teams.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, QueryOrder,
    Set,
};

use crate::entities::teams;

pub mod dto;

pub use dto::TeamFields;

pub async fn list_all<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<teams::Model>, sea_orm::DbErr> {
    teams::Entity::find()
        .order_by_asc(teams::Column::Name)
        .order_by_asc(teams::Column::Id)
        .all(conn)
        .await
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    team_id: i64,
) -> Result<Option<teams::Model>, sea_orm::DbErr> {
    teams::Entity::find_by_id(team_id).one(conn).await
}

pub async fn find_by_ids<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    ids: &[i64],
) -> Result<Vec<teams::Model>, sea_orm::DbErr> {
    if ids.is_empty() {
        return Ok(Vec::new());
    }
    teams::Entity::find()
        .filter(teams::Column::Id.is_in(ids.iter().copied()))
        .all(conn)
        .await
}

pub async fn create_team<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: TeamFields,
) -> Result<teams::Model, sea_orm::DbErr> {
    teams::ActiveModel {
        id: NotSet,
        name: Set(dto.name),
        country_code: Set(dto.country_code),
    }
    .insert(conn)
    .await
}

pub async fn update_team<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    team_id: i64,
    dto: TeamFields,
) -> Result<teams::Model, sea_orm::DbErr> {
    teams::ActiveModel {
        id: Set(team_id),
        name: Set(dto.name),
        country_code: Set(dto.country_code),
    }
    .update(conn)
    .await
}

/// Returns the number of rows removed (0 or 1).
pub async fn delete_team<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    team_id: i64,
) -> Result<u64, sea_orm::DbErr> {
    let result = teams::Entity::delete_by_id(team_id).exec(conn).await?;
    Ok(result.rows_affected)
}
