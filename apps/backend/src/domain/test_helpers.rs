use crate::domain::ball::{BallRecord, Delivery, ExtraType, WicketType};
use crate::domain::scoring::{apply_ball, ScoringState};

pub const BAT_TEAM: i64 = 1;
pub const BOWL_TEAM: i64 = 2;

/// Openers and the first two bowlers used throughout the scoring tests.
pub const OPENER_A: i64 = 101;
pub const OPENER_B: i64 = 102;
pub const BOWLER_X: i64 = 201;
pub const BOWLER_Y: i64 = 202;

pub fn dot(striker: i64, non_striker: i64, bowler: i64) -> Delivery {
    runs(striker, non_striker, bowler, 0)
}

pub fn runs(striker: i64, non_striker: i64, bowler: i64, runs_off_bat: i32) -> Delivery {
    Delivery {
        striker_id: Some(striker),
        non_striker_id: Some(non_striker),
        bowler_id: bowler,
        runs_off_bat,
        extra_type: None,
        extra_runs: 0,
        is_legal_delivery: true,
        wicket_type: None,
        out_player_id: None,
    }
}

pub fn extra(
    striker: i64,
    non_striker: i64,
    bowler: i64,
    kind: ExtraType,
    extra_runs: i32,
) -> Delivery {
    Delivery {
        extra_type: Some(kind),
        extra_runs,
        is_legal_delivery: matches!(kind, ExtraType::Bye | ExtraType::LegBye),
        ..dot(striker, non_striker, bowler)
    }
}

pub fn wicket(striker: i64, non_striker: i64, bowler: i64, kind: WicketType, out: i64) -> Delivery {
    Delivery {
        wicket_type: Some(kind),
        out_player_id: Some(out),
        ..dot(striker, non_striker, bowler)
    }
}

pub fn ball_record(batsman: i64, bowler: i64, runs_off_bat: i32) -> BallRecord {
    BallRecord {
        batsman_id: batsman,
        bowler_id: bowler,
        runs_off_bat,
        extra_type: None,
        extra_runs: 0,
        is_legal_delivery: true,
        wicket_type: None,
        out_player_id: None,
    }
}

pub fn first_innings(total_overs: i32) -> ScoringState {
    ScoringState::new(1, BAT_TEAM, BOWL_TEAM, total_overs, None)
}

/// Bowl a full maiden over, keeping whichever batter is on strike.
pub fn bowl_maiden(state: &mut ScoringState, bowler: i64) {
    for _ in 0..6 {
        let (s, n) = crease(state);
        apply_ball(state, &dot(s, n, bowler)).unwrap();
    }
}

/// Batters at the crease, defaulting to the openers before the first ball.
pub fn crease(state: &ScoringState) -> (i64, i64) {
    (
        state.striker.unwrap_or(OPENER_A),
        state.non_striker.unwrap_or(OPENER_B),
    )
}
