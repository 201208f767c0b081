//! DTOs for balls_sea adapter.

use crate::entities::balls::{ExtraType, WicketType};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BallFields {
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
