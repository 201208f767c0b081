use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "innings")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub match_id: i64,
    pub batting_team_id: i64,
    pub bowling_team_id: i64,
    #[sea_orm(column_type = "SmallInteger")]
    pub innings_number: i16,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::matches::Entity",
        from = "Column::MatchId",
        to = "super::matches::Column::Id"
    )]
    Match,
    #[sea_orm(has_many = "super::overs::Entity")]
    Overs,
}

impl Related<super::matches::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Match.def()
    }
}

impl Related<super::overs::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Overs.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
