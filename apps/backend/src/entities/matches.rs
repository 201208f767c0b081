use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "snake_case")]
pub enum ElectedTo {
    #[sea_orm(string_value = "bat")]
    Bat,
    #[sea_orm(string_value = "bowl")]
    Bowl,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    #[sea_orm(string_value = "scheduled")]
    Scheduled,
    #[sea_orm(string_value = "live")]
    Live,
    #[sea_orm(string_value = "completed")]
    Completed,
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "matches")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub team1_id: i64,
    pub team2_id: i64,
    pub toss_winner_team_id: i64,
    pub elected_to: ElectedTo,
    pub match_date: TimeDate,
    pub venue: String,
    pub total_overs: Option<i32>,
    pub status: MatchStatus,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::innings::Entity")]
    Innings,
    #[sea_orm(has_many = "super::playing_xi::Entity")]
    PlayingXi,
}

impl Related<super::innings::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Innings.def()
    }
}

impl Related<super::playing_xi::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PlayingXi.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
