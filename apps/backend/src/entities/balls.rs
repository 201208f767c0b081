use sea_orm::entity::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum ExtraType {
    #[sea_orm(string_value = "no_ball")]
    NoBall,
    #[sea_orm(string_value = "wide")]
    Wide,
    #[sea_orm(string_value = "bye")]
    Bye,
    #[sea_orm(string_value = "leg_bye")]
    LegBye,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum WicketType {
    #[sea_orm(string_value = "caught")]
    Caught,
    #[sea_orm(string_value = "run_out")]
    RunOut,
    #[sea_orm(string_value = "bowled")]
    Bowled,
    #[sea_orm(string_value = "lbw")]
    Lbw,
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "balls")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub over_id: i64,
    pub ball_number: i32,
    pub batsman_id: i64,
    pub bowler_id: i64,
    pub runs_off_bat: i32,
    pub extra_type: Option<ExtraType>,
    pub extra_runs: Option<i32>,
    pub is_legal_delivery: bool,
    pub wicket_type: Option<WicketType>,
    pub out_player_id: Option<i64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::overs::Entity",
        from = "Column::OverId",
        to = "super::overs::Column::Id"
    )]
    Over,
}

impl Related<super::overs::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Over.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
