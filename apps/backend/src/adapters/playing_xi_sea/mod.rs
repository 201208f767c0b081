//! SeaORM adapter for playing XI selections.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, QueryOrder,
    Set,
};

use crate::entities::playing_xi;

pub mod dto;

pub use dto::PlayingXiCreate;

pub async fn list_for_match<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    match_id: i64,
) -> Result<Vec<playing_xi::Model>, sea_orm::DbErr> {
    playing_xi::Entity::find()
        .filter(playing_xi::Column::MatchId.eq(match_id))
        .order_by_asc(playing_xi::Column::TeamId)
        .order_by_asc(playing_xi::Column::Id)
        .all(conn)
        .await
}

pub async fn create_entry<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: PlayingXiCreate,
) -> Result<playing_xi::Model, sea_orm::DbErr> {
    playing_xi::ActiveModel {
        id: NotSet,
        match_id: Set(dto.match_id),
        team_id: Set(dto.team_id),
        player_id: Set(dto.player_id),
        is_playing_xi: Set(dto.is_playing_xi),
    }
    .insert(conn)
    .await
}
