//! Seed data written straight through the repos, bypassing HTTP.

use backend::adapters::players_sea::PlayerFields;
use backend::adapters::teams_sea::TeamFields;
use backend::repos::matches::{self, ElectedTo, MatchFields, MatchStatus};
use backend::repos::playing_xi::{self, PlayingXiCreate};
use backend::repos::{players, teams};
use backend::AppError;
use sea_orm::ConnectionTrait;
use time::macros::date;

pub async fn create_test_team<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    name: &str,
    country_code: &str,
) -> Result<i64, AppError> {
    let team = teams::create_team(
        conn,
        TeamFields {
            name: name.to_string(),
            country_code: country_code.to_string(),
        },
    )
    .await?;
    Ok(team.id)
}

/// `count` players named `"{prefix} 1"`, `"{prefix} 2"`, ...
pub async fn create_test_squad<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    team_id: i64,
    prefix: &str,
    count: usize,
) -> Result<Vec<i64>, AppError> {
    let mut ids = Vec::with_capacity(count);
    for n in 1..=count {
        let player = players::create_player(
            conn,
            PlayerFields {
                name: format!("{prefix} {n}"),
                date_of_birth: date!(1995 - 06 - 15),
                role: if n > 7 { "bowler" } else { "batsman" }.to_string(),
                team_id,
            },
        )
        .await?;
        ids.push(player.id);
    }
    Ok(ids)
}

/// Scheduled match; team 1 wins the toss and bats.
pub async fn create_test_match<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    team1_id: i64,
    team2_id: i64,
    total_overs: Option<i32>,
) -> Result<i64, AppError> {
    let created = matches::create_match(
        conn,
        MatchFields {
            team1_id,
            team2_id,
            toss_winner_team_id: team1_id,
            elected_to: ElectedTo::Bat,
            match_date: date!(2024 - 03 - 01),
            venue: "Eden Gardens".to_string(),
            total_overs,
            status: MatchStatus::Scheduled,
        },
    )
    .await?;
    Ok(created.id)
}

pub async fn select_playing_xi<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    match_id: i64,
    team_id: i64,
    player_ids: &[i64],
) -> Result<(), AppError> {
    for &player_id in player_ids {
        playing_xi::create_entry(
            conn,
            PlayingXiCreate {
                match_id,
                team_id,
                player_id,
                is_playing_xi: true,
            },
        )
        .await?;
    }
    Ok(())
}

/// Two teams with full XIs, ready for live scoring.
#[derive(Debug, Clone)]
pub struct ReadyMatch {
    pub match_id: i64,
    pub team1_id: i64,
    pub team2_id: i64,
    pub team1_xi: Vec<i64>,
    pub team2_xi: Vec<i64>,
}

pub async fn create_ready_match<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    total_overs: Option<i32>,
) -> Result<ReadyMatch, AppError> {
    let team1_id = create_test_team(conn, "India", "IND").await?;
    let team2_id = create_test_team(conn, "Australia", "AUS").await?;
    let team1_xi = create_test_squad(conn, team1_id, "IND Player", 11).await?;
    let team2_xi = create_test_squad(conn, team2_id, "AUS Player", 11).await?;
    let match_id = create_test_match(conn, team1_id, team2_id, total_overs).await?;
    select_playing_xi(conn, match_id, team1_id, &team1_xi).await?;
    select_playing_xi(conn, match_id, team2_id, &team2_xi).await?;
    Ok(ReadyMatch {
        match_id,
        team1_id,
        team2_id,
        team1_xi,
        team2_xi,
    })
}
