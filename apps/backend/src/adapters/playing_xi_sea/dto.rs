//! DTOs for playing_xi_sea adapter.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayingXiCreate {
    pub match_id: i64,
    pub team_id: i64,
    pub player_id: i64,
    pub is_playing_xi: bool,
}
