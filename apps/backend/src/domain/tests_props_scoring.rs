//! Property tests for strike rotation and over progression (pure domain, no DB).

use proptest::prelude::*;

use crate::domain::ball::{Delivery, ExtraType};
use crate::domain::scoring::{advance, apply_ball, InningsPhase};
use crate::domain::test_helpers::*;

fn extra_kind() -> impl Strategy<Value = Option<ExtraType>> {
    prop_oneof![
        3 => Just(None),
        1 => Just(Some(ExtraType::NoBall)),
        1 => Just(Some(ExtraType::Wide)),
        1 => Just(Some(ExtraType::Bye)),
        1 => Just(Some(ExtraType::LegBye)),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Odd physical runs swap strike, even ones do not (mid-over).
    #[test]
    fn prop_strike_follows_physical_parity(
        runs_off_bat in 0i32..=6,
        kind in extra_kind(),
        extra_runs in 0i32..=4,
    ) {
        let mut state = first_innings(20);
        let delivery = Delivery {
            striker_id: Some(OPENER_A),
            non_striker_id: Some(OPENER_B),
            bowler_id: BOWLER_X,
            runs_off_bat,
            extra_type: kind,
            extra_runs: if kind.is_some() { extra_runs } else { 0 },
            is_legal_delivery: !matches!(kind, Some(ExtraType::Wide | ExtraType::NoBall)),
            wicket_type: None,
            out_player_id: None,
        };
        let physical = delivery.physical_runs();
        apply_ball(&mut state, &delivery).unwrap();

        if physical % 2 == 1 {
            prop_assert_eq!(state.striker, Some(OPENER_B));
            prop_assert_eq!(state.non_striker, Some(OPENER_A));
        } else {
            prop_assert_eq!(state.striker, Some(OPENER_A));
            prop_assert_eq!(state.non_striker, Some(OPENER_B));
        }
        prop_assert_eq!(state.score, delivery.runs_off_bat + delivery.extra_runs);
    }

    /// Six legal balls always close the over, whatever illegal balls are mixed in.
    #[test]
    fn prop_six_legal_balls_complete_an_over(
        illegal_before in proptest::collection::vec(0usize..6, 0..4),
        bat_runs in proptest::collection::vec(0i32..=6, 6),
    ) {
        let mut state = first_innings(20);
        for (i, r) in bat_runs.iter().enumerate() {
            for _ in illegal_before.iter().filter(|&&at| at == i) {
                let (s, n) = crease(&state);
                advance(&mut state, &extra(s, n, BOWLER_X, ExtraType::Wide, 1));
            }
            let (s, n) = crease(&state);
            advance(&mut state, &runs(s, n, BOWLER_X, *r));
            if i < 5 {
                prop_assert_eq!(state.current_over, 1);
                let swapped = r % 2 == 1;
                prop_assert_eq!(state.striker != Some(s), swapped);
            }
        }

        prop_assert_eq!(state.phase, InningsPhase::OverComplete);
        prop_assert_eq!(state.current_over, 2);
        prop_assert_eq!(state.legal_balls, 6);
        prop_assert_eq!(state.balls_in_over, 0);
        prop_assert_eq!(state.last_bowler, Some(BOWLER_X));
        prop_assert_eq!(state.extras, illegal_before.len() as i32);
    }

    /// Overs display always agrees with the legal ball count.
    #[test]
    fn prop_overs_display_tracks_legal_balls(legal in 0usize..60) {
        let mut state = first_innings(20);
        let mut bowler = BOWLER_X;
        for _ in 0..legal {
            if state.is_new_over() && state.last_bowler == Some(bowler) {
                bowler = if bowler == BOWLER_X { BOWLER_Y } else { BOWLER_X };
            }
            let (s, n) = crease(&state);
            apply_ball(&mut state, &dot(s, n, bowler)).unwrap();
        }
        let expected = format!("{}.{}", legal / 6, legal % 6);
        prop_assert_eq!(state.overs(), expected);
        prop_assert_eq!(state.current_over as usize, legal / 6 + 1);
    }
}
