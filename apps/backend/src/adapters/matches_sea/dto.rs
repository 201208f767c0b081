//! DTOs for matches_sea adapter.

use time::Date;

use crate::entities::matches::{ElectedTo, MatchStatus};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchFields {
    pub team1_id: i64,
    pub team2_id: i64,
    pub toss_winner_team_id: i64,
    pub elected_to: ElectedTo,
    pub match_date: Date,
    pub venue: String,
    pub total_overs: Option<i32>,
    pub status: MatchStatus,
}
