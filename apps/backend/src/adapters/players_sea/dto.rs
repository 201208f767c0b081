//! DTOs for players_sea adapter.

use time::Date;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerFields {
    pub name: String,
    pub date_of_birth: Date,
    pub role: String,
    pub team_id: i64,
}
