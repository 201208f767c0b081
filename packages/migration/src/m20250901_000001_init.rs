use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_query::{ColumnDef, ForeignKeyAction, Index, Table};

#[derive(DeriveMigrationName)]
pub struct Migration;

// ----- Iden enums for tables & columns -----
#[derive(Iden)]
enum Teams {
    Table,
    Id,
    Name,
    CountryCode,
}

#[derive(Iden)]
enum Players {
    Table,
    Id,
    Name,
    DateOfBirth,
    Role,
    TeamId,
}

#[derive(Iden)]
enum Matches {
    Table,
    Id,
    Team1Id,
    Team2Id,
    TossWinnerTeamId,
    ElectedTo,
    MatchDate,
    Venue,
    TotalOvers,
    Status,
}

#[derive(Iden)]
enum Innings {
    Table,
    Id,
    MatchId,
    BattingTeamId,
    BowlingTeamId,
    InningsNumber,
}

#[derive(Iden)]
enum Overs {
    Table,
    Id,
    InningsId,
    OverNumber,
    BowlerId,
}

#[derive(Iden)]
enum Balls {
    Table,
    Id,
    OverId,
    BallNumber,
    BatsmanId,
    BowlerId,
    RunsOffBat,
    ExtraType,
    ExtraRuns,
    IsLegalDelivery,
    WicketType,
    OutPlayerId,
}

#[derive(Iden)]
enum PlayingXi {
    Table,
    Id,
    MatchId,
    TeamId,
    PlayerId,
    IsPlayingXi,
}

fn pk(col: impl IntoIden) -> ColumnDef {
    ColumnDef::new(col)
        .big_integer()
        .not_null()
        .primary_key()
        .auto_increment()
        .to_owned()
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // teams
        manager
            .create_table(
                Table::create()
                    .table(Teams::Table)
                    .if_not_exists()
                    .col(pk(Teams::Id))
                    .col(ColumnDef::new(Teams::Name).string().not_null())
                    .col(ColumnDef::new(Teams::CountryCode).string().not_null())
                    .to_owned(),
            )
            .await?;

        // players
        manager
            .create_table(
                Table::create()
                    .table(Players::Table)
                    .if_not_exists()
                    .col(pk(Players::Id))
                    .col(ColumnDef::new(Players::Name).string().not_null())
                    .col(ColumnDef::new(Players::DateOfBirth).date().not_null())
                    .col(ColumnDef::new(Players::Role).string().not_null())
                    .col(ColumnDef::new(Players::TeamId).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_players_team_id")
                            .from(Players::Table, Players::TeamId)
                            .to(Teams::Table, Teams::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ix_players_team_id")
                    .table(Players::Table)
                    .col(Players::TeamId)
                    .to_owned(),
            )
            .await?;

        // matches
        manager
            .create_table(
                Table::create()
                    .table(Matches::Table)
                    .if_not_exists()
                    .col(pk(Matches::Id))
                    .col(ColumnDef::new(Matches::Team1Id).big_integer().not_null())
                    .col(ColumnDef::new(Matches::Team2Id).big_integer().not_null())
                    .col(
                        ColumnDef::new(Matches::TossWinnerTeamId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Matches::ElectedTo).string().not_null())
                    .col(ColumnDef::new(Matches::MatchDate).date().not_null())
                    .col(ColumnDef::new(Matches::Venue).string().not_null())
                    .col(ColumnDef::new(Matches::TotalOvers).integer().null())
                    .col(
                        ColumnDef::new(Matches::Status)
                            .string()
                            .not_null()
                            .default("scheduled"),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_matches_team1_id")
                            .from(Matches::Table, Matches::Team1Id)
                            .to(Teams::Table, Teams::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_matches_team2_id")
                            .from(Matches::Table, Matches::Team2Id)
                            .to(Teams::Table, Teams::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_matches_toss_winner_team_id")
                            .from(Matches::Table, Matches::TossWinnerTeamId)
                            .to(Teams::Table, Teams::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        // innings
        manager
            .create_table(
                Table::create()
                    .table(Innings::Table)
                    .if_not_exists()
                    .col(pk(Innings::Id))
                    .col(ColumnDef::new(Innings::MatchId).big_integer().not_null())
                    .col(
                        ColumnDef::new(Innings::BattingTeamId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Innings::BowlingTeamId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Innings::InningsNumber)
                            .small_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_innings_match_id")
                            .from(Innings::Table, Innings::MatchId)
                            .to(Matches::Table, Matches::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_innings_batting_team_id")
                            .from(Innings::Table, Innings::BattingTeamId)
                            .to(Teams::Table, Teams::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_innings_bowling_team_id")
                            .from(Innings::Table, Innings::BowlingTeamId)
                            .to(Teams::Table, Teams::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ux_innings_match_number")
                    .table(Innings::Table)
                    .col(Innings::MatchId)
                    .col(Innings::InningsNumber)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // overs
        manager
            .create_table(
                Table::create()
                    .table(Overs::Table)
                    .if_not_exists()
                    .col(pk(Overs::Id))
                    .col(ColumnDef::new(Overs::InningsId).big_integer().not_null())
                    .col(ColumnDef::new(Overs::OverNumber).integer().not_null())
                    .col(ColumnDef::new(Overs::BowlerId).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_overs_innings_id")
                            .from(Overs::Table, Overs::InningsId)
                            .to(Innings::Table, Innings::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_overs_bowler_id")
                            .from(Overs::Table, Overs::BowlerId)
                            .to(Players::Table, Players::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ux_overs_innings_number")
                    .table(Overs::Table)
                    .col(Overs::InningsId)
                    .col(Overs::OverNumber)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // balls
        manager
            .create_table(
                Table::create()
                    .table(Balls::Table)
                    .if_not_exists()
                    .col(pk(Balls::Id))
                    .col(ColumnDef::new(Balls::OverId).big_integer().not_null())
                    .col(ColumnDef::new(Balls::BallNumber).integer().not_null())
                    .col(ColumnDef::new(Balls::BatsmanId).big_integer().not_null())
                    .col(ColumnDef::new(Balls::BowlerId).big_integer().not_null())
                    .col(
                        ColumnDef::new(Balls::RunsOffBat)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(Balls::ExtraType).string().null())
                    .col(ColumnDef::new(Balls::ExtraRuns).integer().null())
                    .col(
                        ColumnDef::new(Balls::IsLegalDelivery)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(ColumnDef::new(Balls::WicketType).string().null())
                    .col(ColumnDef::new(Balls::OutPlayerId).big_integer().null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_balls_over_id")
                            .from(Balls::Table, Balls::OverId)
                            .to(Overs::Table, Overs::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_balls_batsman_id")
                            .from(Balls::Table, Balls::BatsmanId)
                            .to(Players::Table, Players::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_balls_bowler_id")
                            .from(Balls::Table, Balls::BowlerId)
                            .to(Players::Table, Players::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_balls_out_player_id")
                            .from(Balls::Table, Balls::OutPlayerId)
                            .to(Players::Table, Players::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        // Makes ball submission idempotent per over
        manager
            .create_index(
                Index::create()
                    .name("ux_balls_over_number")
                    .table(Balls::Table)
                    .col(Balls::OverId)
                    .col(Balls::BallNumber)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // playing_xi
        manager
            .create_table(
                Table::create()
                    .table(PlayingXi::Table)
                    .if_not_exists()
                    .col(pk(PlayingXi::Id))
                    .col(ColumnDef::new(PlayingXi::MatchId).big_integer().not_null())
                    .col(ColumnDef::new(PlayingXi::TeamId).big_integer().not_null())
                    .col(ColumnDef::new(PlayingXi::PlayerId).big_integer().not_null())
                    .col(
                        ColumnDef::new(PlayingXi::IsPlayingXi)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_playing_xi_match_id")
                            .from(PlayingXi::Table, PlayingXi::MatchId)
                            .to(Matches::Table, Matches::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_playing_xi_team_id")
                            .from(PlayingXi::Table, PlayingXi::TeamId)
                            .to(Teams::Table, Teams::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_playing_xi_player_id")
                            .from(PlayingXi::Table, PlayingXi::PlayerId)
                            .to(Players::Table, Players::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ux_playing_xi_match_player")
                    .table(PlayingXi::Table)
                    .col(PlayingXi::MatchId)
                    .col(PlayingXi::PlayerId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // drop in reverse dependency order; indexes go with their tables
        manager
            .drop_table(Table::drop().table(PlayingXi::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Balls::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Overs::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Innings::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Matches::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Players::Table).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Teams::Table).if_exists().to_owned())
            .await?;
        Ok(())
    }
}
