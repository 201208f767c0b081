//! Innings scoring state machine.
//!
//! `apply_ball` validates a submitted delivery against the current state and
//! then advances it; `advance` skips validation and is used when replaying
//! balls that are already persisted. Counters saturate rather than overflow.

use serde::Serialize;

use crate::domain::ball::{
    check_runs, overs_display, run_rate, BallRecord, Delivery, BALLS_PER_OVER, MAX_WICKETS,
};
use crate::errors::domain::{ConflictKind, DomainError, ValidationKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InningsPhase {
    /// Next ball belongs to the over in progress (or the first over).
    AwaitingBall,
    /// Six legal balls were just bowled; the next ball opens a new over.
    OverComplete,
    /// First innings finished; the chase has not started.
    InningsComplete,
    /// Terminal.
    MatchComplete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum MatchOutcome {
    Won { winner_team_id: i64 },
    Tied,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoringState {
    pub innings_number: i16,
    pub batting_team_id: i64,
    pub bowling_team_id: i64,
    pub total_overs: i32,
    /// Runs needed to win; set once the first innings ends.
    pub target: Option<i32>,
    pub score: i32,
    pub wickets: i32,
    pub extras: i32,
    pub legal_balls: i32,
    /// 1-based number of the over in progress (or about to start).
    pub current_over: i32,
    /// Legal balls bowled in the current over.
    pub balls_in_over: i32,
    /// All deliveries (legal or not) in the current over.
    pub deliveries_in_over: i32,
    pub current_bowler: Option<i64>,
    /// Bowler of the last completed over; may not open the next one.
    pub last_bowler: Option<i64>,
    pub striker: Option<i64>,
    pub non_striker: Option<i64>,
    pub out_players: Vec<i64>,
    pub phase: InningsPhase,
    pub outcome: Option<MatchOutcome>,
}

impl ScoringState {
    pub fn new(
        innings_number: i16,
        batting_team_id: i64,
        bowling_team_id: i64,
        total_overs: i32,
        target: Option<i32>,
    ) -> Self {
        Self {
            innings_number,
            batting_team_id,
            bowling_team_id,
            total_overs,
            target,
            score: 0,
            wickets: 0,
            extras: 0,
            legal_balls: 0,
            current_over: 1,
            balls_in_over: 0,
            deliveries_in_over: 0,
            current_bowler: None,
            last_bowler: None,
            striker: None,
            non_striker: None,
            out_players: Vec::new(),
            phase: InningsPhase::AwaitingBall,
            outcome: None,
        }
    }

    /// Rebuild a state from persisted balls in bowling order.
    pub fn replay<'a>(
        innings_number: i16,
        batting_team_id: i64,
        bowling_team_id: i64,
        total_overs: i32,
        target: Option<i32>,
        balls: impl IntoIterator<Item = &'a BallRecord>,
    ) -> Self {
        let mut state = Self::new(
            innings_number,
            batting_team_id,
            bowling_team_id,
            total_overs,
            target,
        );
        for ball in balls {
            advance(&mut state, &Delivery::from(ball));
        }
        state
    }

    pub fn overs(&self) -> String {
        overs_display(self.legal_balls)
    }

    pub fn run_rate(&self) -> f64 {
        run_rate(self.score, self.legal_balls)
    }

    /// Ball number the next delivery will carry within its over.
    pub fn next_ball_number(&self) -> i32 {
        self.deliveries_in_over + 1
    }

    pub fn is_new_over(&self) -> bool {
        self.deliveries_in_over == 0
    }

    pub fn is_finished(&self) -> bool {
        matches!(
            self.phase,
            InningsPhase::InningsComplete | InningsPhase::MatchComplete
        )
    }

    pub fn runs_required(&self) -> Option<i32> {
        self.target.map(|t| t.saturating_sub(self.score).max(0))
    }

    fn swap_strike(&mut self) {
        std::mem::swap(&mut self.striker, &mut self.non_striker);
    }

    /// Put the ball's batter on strike when only the striker is known.
    fn place_striker(&mut self, batsman_id: i64) {
        if self.striker == Some(batsman_id) {
            return;
        }
        if self.non_striker == Some(batsman_id) {
            self.swap_strike();
        } else if self.striker.is_none() {
            self.striker = Some(batsman_id);
        } else if self.non_striker.is_none() {
            self.non_striker = self.striker;
            self.striker = Some(batsman_id);
        } else {
            self.striker = Some(batsman_id);
        }
    }

    fn check_innings_end(&mut self) {
        if self.innings_number == 2 {
            if let Some(target) = self.target {
                if self.score >= target {
                    self.phase = InningsPhase::MatchComplete;
                    self.outcome = Some(MatchOutcome::Won {
                        winner_team_id: self.batting_team_id,
                    });
                    return;
                }
            }
        }

        let all_out = self.wickets >= MAX_WICKETS;
        let overs_done = self.legal_balls >= self.total_overs.saturating_mul(BALLS_PER_OVER);
        if !(all_out || overs_done) {
            return;
        }

        if self.innings_number == 1 {
            self.phase = InningsPhase::InningsComplete;
            self.target = Some(self.score.saturating_add(1));
        } else {
            self.phase = InningsPhase::MatchComplete;
            self.outcome = Some(match self.target {
                Some(target) if self.score == target.saturating_sub(1) => MatchOutcome::Tied,
                _ => MatchOutcome::Won {
                    winner_team_id: self.bowling_team_id,
                },
            });
        }
    }
}

/// Apply one ball without validation.
pub fn advance(state: &mut ScoringState, delivery: &Delivery) {
    match (delivery.striker_id, delivery.non_striker_id) {
        (Some(striker), Some(non_striker)) => {
            state.striker = Some(striker);
            state.non_striker = Some(non_striker);
        }
        (Some(striker), None) => state.place_striker(striker),
        _ => {}
    }

    if state.phase == InningsPhase::OverComplete {
        state.phase = InningsPhase::AwaitingBall;
    }
    state.current_bowler = Some(delivery.bowler_id);

    state.score = state
        .score
        .saturating_add(delivery.runs_off_bat.saturating_add(delivery.extra_runs));
    state.extras = state.extras.saturating_add(delivery.extra_runs);
    state.deliveries_in_over += 1;

    if delivery.physical_runs() % 2 != 0 {
        state.swap_strike();
    }

    if delivery.wicket_type.is_some() {
        state.wickets += 1;
        if let Some(out) = delivery.out_player_id {
            state.out_players.push(out);
            if state.striker == Some(out) {
                state.striker = None;
            } else if state.non_striker == Some(out) {
                state.non_striker = None;
            }
        }
    }

    if delivery.is_legal_delivery {
        state.legal_balls += 1;
        state.balls_in_over += 1;
        if state.balls_in_over == BALLS_PER_OVER {
            state.swap_strike();
            state.last_bowler = state.current_bowler.take();
            state.balls_in_over = 0;
            state.deliveries_in_over = 0;
            state.current_over += 1;
            state.phase = InningsPhase::OverComplete;
        }
    }

    state.check_innings_end();
}

/// Validate a submitted delivery and advance the state. On error the state is untouched.
pub fn apply_ball(state: &mut ScoringState, delivery: &Delivery) -> Result<(), DomainError> {
    validate_delivery(state, delivery)?;
    advance(state, delivery);
    Ok(())
}

fn validate_delivery(state: &ScoringState, delivery: &Delivery) -> Result<(), DomainError> {
    match state.phase {
        InningsPhase::MatchComplete => {
            return Err(DomainError::conflict(
                ConflictKind::MatchCompleted,
                "Match is already completed",
            ))
        }
        InningsPhase::InningsComplete => {
            return Err(DomainError::conflict(
                ConflictKind::InningsComplete,
                "Innings is complete",
            ))
        }
        InningsPhase::AwaitingBall | InningsPhase::OverComplete => {}
    }

    check_runs(delivery.runs_off_bat, delivery.extra_runs)?;

    let (striker, non_striker) = match (delivery.striker_id, delivery.non_striker_id) {
        (Some(s), Some(n)) => (s, n),
        _ => {
            return Err(DomainError::validation(
                ValidationKind::BattersRequired,
                "Striker and non-striker are required",
            ))
        }
    };
    if striker == non_striker {
        return Err(DomainError::validation(
            ValidationKind::SameBatters,
            "Striker and non-striker must be different players",
        ));
    }
    for batter in [striker, non_striker] {
        if state.out_players.contains(&batter) {
            return Err(DomainError::validation(
                ValidationKind::BatterDismissed,
                format!("Player {batter} has already been dismissed"),
            ));
        }
    }

    if state.is_new_over() {
        if state.last_bowler == Some(delivery.bowler_id) {
            return Err(DomainError::validation(
                ValidationKind::OverCompleteBowler,
                format!(
                    "Bowler {} bowled the previous over and cannot bowl over {}",
                    delivery.bowler_id, state.current_over
                ),
            ));
        }
    } else if let Some(current) = state.current_bowler {
        if current != delivery.bowler_id {
            return Err(DomainError::validation(
                ValidationKind::BowlerChangeMidOver,
                format!(
                    "Over {} must be completed by bowler {current}",
                    state.current_over
                ),
            ));
        }
    }

    match (delivery.wicket_type, delivery.out_player_id) {
        (Some(_), None) => Err(DomainError::validation(
            ValidationKind::WicketWithoutOutPlayer,
            "out_player_id is required when a wicket falls",
        )),
        (None, Some(_)) => Err(DomainError::validation(
            ValidationKind::MissingField,
            "wicket_type is required when out_player_id is given",
        )),
        (Some(_), Some(out)) if out != striker && out != non_striker => {
            Err(DomainError::validation_other(
                "Dismissed player must be one of the batters at the crease",
            ))
        }
        _ => Ok(()),
    }
}

/// Start the chase: sides swap and the target carries over.
pub fn start_second_innings(state: &ScoringState) -> Result<ScoringState, DomainError> {
    if state.innings_number != 1 || state.phase != InningsPhase::InningsComplete {
        return Err(DomainError::conflict(
            ConflictKind::InningsInProgress,
            "First innings is still in progress",
        ));
    }
    Ok(ScoringState::new(
        2,
        state.bowling_team_id,
        state.batting_team_id,
        state.total_overs,
        state.target,
    ))
}

/// Batting and bowling sides for innings 1.
pub fn first_innings_sides(
    team1_id: i64,
    team2_id: i64,
    toss_winner_team_id: i64,
    toss_winner_bats: bool,
) -> (i64, i64) {
    let other = if toss_winner_team_id == team1_id {
        team2_id
    } else {
        team1_id
    };
    if toss_winner_bats {
        (toss_winner_team_id, other)
    } else {
        (other, toss_winner_team_id)
    }
}
