//! DTOs for innings_sea adapter.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InningsCreate {
    pub match_id: i64,
    pub batting_team_id: i64,
    pub bowling_team_id: i64,
    pub innings_number: i16,
}
