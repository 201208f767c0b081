use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "overs")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub innings_id: i64,
    pub over_number: i32,
    pub bowler_id: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::innings::Entity",
        from = "Column::InningsId",
        to = "super::innings::Column::Id"
    )]
    Innings,
    #[sea_orm(has_many = "super::balls::Entity")]
    Balls,
}

impl Related<super::innings::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Innings.def()
    }
}

impl Related<super::balls::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Balls.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
