use crate::domain::ball::{ExtraType, WicketType};
use crate::domain::scoring::{
    apply_ball, first_innings_sides, start_second_innings, InningsPhase, MatchOutcome,
    ScoringState,
};
use crate::domain::test_helpers::*;
use crate::errors::domain::{ConflictKind, DomainError, ValidationKind};

#[test]
fn odd_runs_rotate_strike() {
    let mut state = first_innings(20);
    apply_ball(&mut state, &runs(OPENER_A, OPENER_B, BOWLER_X, 1)).unwrap();
    assert_eq!(state.striker, Some(OPENER_B));
    assert_eq!(state.non_striker, Some(OPENER_A));
    assert_eq!(state.score, 1);

    apply_ball(&mut state, &runs(OPENER_B, OPENER_A, BOWLER_X, 2)).unwrap();
    assert_eq!(state.striker, Some(OPENER_B));
    assert_eq!(state.score, 3);
}

#[test]
fn byes_rotate_but_wides_do_not() {
    let mut state = first_innings(20);
    apply_ball(
        &mut state,
        &extra(OPENER_A, OPENER_B, BOWLER_X, ExtraType::Bye, 1),
    )
    .unwrap();
    assert_eq!(state.striker, Some(OPENER_B));
    assert_eq!(state.extras, 1);
    assert_eq!(state.legal_balls, 1);

    apply_ball(
        &mut state,
        &extra(OPENER_B, OPENER_A, BOWLER_X, ExtraType::Wide, 1),
    )
    .unwrap();
    assert_eq!(state.striker, Some(OPENER_B));
    assert_eq!(state.score, 2);
    assert_eq!(state.legal_balls, 1);
    assert_eq!(state.next_ball_number(), 3);
}

#[test]
fn no_ball_rotation_follows_bat_runs() {
    let mut state = first_innings(20);
    let mut ball = extra(OPENER_A, OPENER_B, BOWLER_X, ExtraType::NoBall, 1);
    ball.runs_off_bat = 1;
    apply_ball(&mut state, &ball).unwrap();
    assert_eq!(state.striker, Some(OPENER_B));
    assert_eq!(state.score, 2);
    assert_eq!(state.legal_balls, 0);
}

#[test]
fn sixth_legal_ball_completes_over_and_swaps_strike() {
    let mut state = first_innings(20);
    for _ in 0..5 {
        apply_ball(&mut state, &dot(OPENER_A, OPENER_B, BOWLER_X)).unwrap();
    }
    assert_eq!(state.phase, InningsPhase::AwaitingBall);
    apply_ball(&mut state, &dot(OPENER_A, OPENER_B, BOWLER_X)).unwrap();

    assert_eq!(state.phase, InningsPhase::OverComplete);
    assert_eq!(state.current_over, 2);
    assert_eq!(state.overs(), "1.0");
    assert_eq!(state.striker, Some(OPENER_B));
    assert_eq!(state.last_bowler, Some(BOWLER_X));
    assert_eq!(state.current_bowler, None);
    assert_eq!(state.next_ball_number(), 1);
}

#[test]
fn single_off_last_ball_keeps_striker() {
    let mut state = first_innings(20);
    for _ in 0..5 {
        apply_ball(&mut state, &dot(OPENER_A, OPENER_B, BOWLER_X)).unwrap();
    }
    apply_ball(&mut state, &runs(OPENER_A, OPENER_B, BOWLER_X, 1)).unwrap();
    // crossed for the run, then swapped again at the end of the over
    assert_eq!(state.striker, Some(OPENER_A));
}

#[test]
fn previous_bowler_cannot_open_next_over() {
    let mut state = first_innings(20);
    bowl_maiden(&mut state, BOWLER_X);
    let (s, n) = crease(&state);

    let err = apply_ball(&mut state, &dot(s, n, BOWLER_X)).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Validation(ValidationKind::OverCompleteBowler, _)
    ));
    assert_eq!(state.phase, InningsPhase::OverComplete);

    apply_ball(&mut state, &dot(s, n, BOWLER_Y)).unwrap();
    assert_eq!(state.phase, InningsPhase::AwaitingBall);
    assert_eq!(state.current_bowler, Some(BOWLER_Y));
}

#[test]
fn bowler_cannot_change_mid_over() {
    let mut state = first_innings(20);
    apply_ball(&mut state, &dot(OPENER_A, OPENER_B, BOWLER_X)).unwrap();
    let err = apply_ball(&mut state, &dot(OPENER_A, OPENER_B, BOWLER_Y)).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Validation(ValidationKind::BowlerChangeMidOver, _)
    ));
}

#[test]
fn wicket_clears_matching_slot() {
    let mut state = first_innings(20);
    apply_ball(
        &mut state,
        &wicket(OPENER_A, OPENER_B, BOWLER_X, WicketType::Bowled, OPENER_A),
    )
    .unwrap();
    assert_eq!(state.wickets, 1);
    assert_eq!(state.striker, None);
    assert_eq!(state.non_striker, Some(OPENER_B));

    // run out at the non-striker's end
    apply_ball(
        &mut state,
        &wicket(103, OPENER_B, BOWLER_X, WicketType::RunOut, OPENER_B),
    )
    .unwrap();
    assert_eq!(state.striker, Some(103));
    assert_eq!(state.non_striker, None);
    assert_eq!(state.out_players, vec![OPENER_A, OPENER_B]);
}

#[test]
fn dismissed_batter_cannot_return() {
    let mut state = first_innings(20);
    apply_ball(
        &mut state,
        &wicket(OPENER_A, OPENER_B, BOWLER_X, WicketType::Caught, OPENER_A),
    )
    .unwrap();
    let err = apply_ball(&mut state, &dot(OPENER_A, OPENER_B, BOWLER_X)).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Validation(ValidationKind::BatterDismissed, _)
    ));
}

#[test]
fn rejects_bad_batter_input() {
    let mut state = first_innings(20);
    let mut ball = dot(OPENER_A, OPENER_B, BOWLER_X);
    ball.non_striker_id = None;
    assert!(matches!(
        apply_ball(&mut state, &ball),
        Err(DomainError::Validation(ValidationKind::BattersRequired, _))
    ));
    assert!(matches!(
        apply_ball(&mut state, &dot(OPENER_A, OPENER_A, BOWLER_X)),
        Err(DomainError::Validation(ValidationKind::SameBatters, _))
    ));
    assert!(matches!(
        apply_ball(&mut state, &runs(OPENER_A, OPENER_B, BOWLER_X, -1)),
        Err(DomainError::Validation(ValidationKind::InvalidRuns, _))
    ));
    assert_eq!(state, first_innings(20));
}

#[test]
fn oversized_runs_are_rejected_without_touching_state() {
    let mut state = first_innings(20);
    apply_ball(&mut state, &runs(OPENER_A, OPENER_B, BOWLER_X, 1)).unwrap();
    let before = state.clone();

    let err = apply_ball(&mut state, &runs(OPENER_B, OPENER_A, BOWLER_X, i32::MAX)).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Validation(ValidationKind::InvalidRuns, _)
    ));
    let mut ball = extra(OPENER_B, OPENER_A, BOWLER_X, ExtraType::Wide, i32::MAX);
    ball.runs_off_bat = 0;
    assert!(apply_ball(&mut state, &ball).is_err());
    assert_eq!(state, before);
}

#[test]
fn huge_over_limit_does_not_overflow() {
    let mut state = ScoringState::new(1, BAT_TEAM, BOWL_TEAM, i32::MAX, None);
    apply_ball(&mut state, &dot(OPENER_A, OPENER_B, BOWLER_X)).unwrap();
    assert_eq!(state.phase, InningsPhase::AwaitingBall);
    assert_eq!(state.legal_balls, 1);
}

#[test]
fn replayed_score_saturates() {
    let records = vec![
        ball_record(OPENER_A, BOWLER_X, i32::MAX),
        ball_record(OPENER_A, BOWLER_X, i32::MAX),
    ];
    let state = ScoringState::replay(1, BAT_TEAM, BOWL_TEAM, 20, None, &records);
    assert_eq!(state.score, i32::MAX);
    assert_eq!(state.legal_balls, 2);

    let chase = ScoringState::replay(2, BAT_TEAM, BOWL_TEAM, 20, Some(i32::MAX), &records);
    assert_eq!(chase.phase, InningsPhase::MatchComplete);
    assert_eq!(chase.runs_required(), Some(0));
}

#[test]
fn wicket_requires_out_player() {
    let mut state = first_innings(20);
    let mut ball = wicket(OPENER_A, OPENER_B, BOWLER_X, WicketType::Lbw, OPENER_A);
    ball.out_player_id = None;
    assert!(matches!(
        apply_ball(&mut state, &ball),
        Err(DomainError::Validation(
            ValidationKind::WicketWithoutOutPlayer,
            _
        ))
    ));
}

#[test]
fn ten_wickets_end_the_innings() {
    let mut state = first_innings(50);
    apply_ball(&mut state, &runs(OPENER_A, OPENER_B, BOWLER_X, 4)).unwrap();
    let mut next_batter = 103;
    for _ in 0..10 {
        let (s, n) = crease(&state);
        let bowler = state.current_bowler.unwrap_or(if state.last_bowler == Some(BOWLER_X) {
            BOWLER_Y
        } else {
            BOWLER_X
        });
        apply_ball(&mut state, &wicket(s, n, bowler, WicketType::Bowled, s)).unwrap();
        if state.striker.is_none() {
            state.striker = Some(next_batter);
            next_batter += 1;
        }
        if state.non_striker.is_none() {
            state.non_striker = Some(next_batter);
            next_batter += 1;
        }
    }
    assert_eq!(state.wickets, 10);
    assert_eq!(state.phase, InningsPhase::InningsComplete);
    assert_eq!(state.target, Some(5));
}

#[test]
fn exhausted_overs_end_first_innings_and_set_target() {
    let mut state = first_innings(2);
    apply_ball(&mut state, &runs(OPENER_A, OPENER_B, BOWLER_X, 6)).unwrap();
    for _ in 0..5 {
        let (s, n) = crease(&state);
        apply_ball(&mut state, &dot(s, n, BOWLER_X)).unwrap();
    }
    bowl_maiden(&mut state, BOWLER_Y);

    assert_eq!(state.phase, InningsPhase::InningsComplete);
    assert_eq!(state.target, Some(7));
    let (s, n) = crease(&state);
    let err = apply_ball(&mut state, &dot(s, n, BOWLER_X)).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Conflict(ConflictKind::InningsComplete, _)
    ));
}

#[test]
fn second_innings_swaps_sides_and_keeps_target() {
    let mut state = first_innings(1);
    apply_ball(&mut state, &runs(OPENER_A, OPENER_B, BOWLER_X, 4)).unwrap();
    for _ in 0..5 {
        let (s, n) = crease(&state);
        apply_ball(&mut state, &dot(s, n, BOWLER_X)).unwrap();
    }
    let chase = start_second_innings(&state).unwrap();
    assert_eq!(chase.innings_number, 2);
    assert_eq!(chase.batting_team_id, BOWL_TEAM);
    assert_eq!(chase.bowling_team_id, BAT_TEAM);
    assert_eq!(chase.target, Some(5));
    assert_eq!(chase.score, 0);
    assert_eq!(chase.phase, InningsPhase::AwaitingBall);
}

#[test]
fn second_innings_cannot_start_early() {
    let state = first_innings(20);
    assert!(matches!(
        start_second_innings(&state),
        Err(DomainError::Conflict(ConflictKind::InningsInProgress, _))
    ));
}

#[test]
fn reaching_target_ends_match_mid_over() {
    let mut state = ScoringState::new(2, BAT_TEAM, BOWL_TEAM, 20, Some(5));
    apply_ball(&mut state, &runs(OPENER_A, OPENER_B, BOWLER_X, 4)).unwrap();
    assert_eq!(state.phase, InningsPhase::AwaitingBall);
    apply_ball(&mut state, &runs(OPENER_A, OPENER_B, BOWLER_X, 1)).unwrap();

    assert_eq!(state.phase, InningsPhase::MatchComplete);
    assert_eq!(
        state.outcome,
        Some(MatchOutcome::Won {
            winner_team_id: BAT_TEAM
        })
    );
    assert_eq!(state.legal_balls, 2);

    let err = apply_ball(&mut state, &dot(OPENER_B, OPENER_A, BOWLER_X)).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Conflict(ConflictKind::MatchCompleted, _)
    ));
}

#[test]
fn chase_one_short_is_a_tie() {
    let mut state = ScoringState::new(2, BAT_TEAM, BOWL_TEAM, 1, Some(5));
    apply_ball(&mut state, &runs(OPENER_A, OPENER_B, BOWLER_X, 4)).unwrap();
    for _ in 0..5 {
        let (s, n) = crease(&state);
        apply_ball(&mut state, &dot(s, n, BOWLER_X)).unwrap();
    }
    assert_eq!(state.phase, InningsPhase::MatchComplete);
    assert_eq!(state.outcome, Some(MatchOutcome::Tied));
}

#[test]
fn failed_chase_is_won_by_defending_side() {
    let mut state = ScoringState::new(2, BAT_TEAM, BOWL_TEAM, 1, Some(10));
    bowl_maiden(&mut state, BOWLER_X);
    assert_eq!(
        state.outcome,
        Some(MatchOutcome::Won {
            winner_team_id: BOWL_TEAM
        })
    );
}

#[test]
fn replay_matches_live_application() {
    let mut live = first_innings(20);
    let mut records = Vec::new();
    let deliveries = [
        runs(OPENER_A, OPENER_B, BOWLER_X, 1),
        runs(OPENER_B, OPENER_A, BOWLER_X, 4),
        extra(OPENER_B, OPENER_A, BOWLER_X, ExtraType::LegBye, 1),
        dot(OPENER_A, OPENER_B, BOWLER_X),
        runs(OPENER_A, OPENER_B, BOWLER_X, 3),
        dot(OPENER_B, OPENER_A, BOWLER_X),
        dot(OPENER_A, OPENER_B, BOWLER_Y),
        runs(OPENER_A, OPENER_B, BOWLER_Y, 2),
    ];
    for d in &deliveries {
        records.push(d.to_record(d.striker_id.unwrap()));
        apply_ball(&mut live, d).unwrap();
    }

    let replayed = ScoringState::replay(1, BAT_TEAM, BOWL_TEAM, 20, None, &records);
    assert_eq!(replayed.score, live.score);
    assert_eq!(replayed.legal_balls, live.legal_balls);
    assert_eq!(replayed.current_over, live.current_over);
    assert_eq!(replayed.last_bowler, live.last_bowler);
    assert_eq!(replayed.striker, live.striker);
    assert_eq!(replayed.non_striker, live.non_striker);
    assert_eq!(replayed.overs(), "1.2");
}

#[test]
fn toss_decides_first_innings_sides() {
    assert_eq!(first_innings_sides(1, 2, 1, true), (1, 2));
    assert_eq!(first_innings_sides(1, 2, 1, false), (2, 1));
    assert_eq!(first_innings_sides(1, 2, 2, true), (2, 1));
    assert_eq!(first_innings_sides(1, 2, 2, false), (1, 2));
}
