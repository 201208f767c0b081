//! Live scoring: replays persisted balls into a `ScoringState` and records new
//! deliveries through the validated transition.

use sea_orm::ConnectionTrait;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::balls::parse_optional;
use super::playing_xi::XI_SIZE;
use crate::domain::ball::{Delivery, ExtraType, WicketType, BALLS_PER_OVER};
use crate::domain::scoring::{
    apply_ball, first_innings_sides, start_second_innings, InningsPhase, MatchOutcome,
    ScoringState,
};
use crate::errors::domain::{ConflictKind, DomainError, ValidationKind};
use crate::repos::balls::{self, Ball, NewBall};
use crate::repos::innings::{self, Innings, InningsCreate};
use crate::repos::matches::{self, ElectedTo, Match, MatchStatus};
use crate::repos::overs::{self, OverCreate};
use crate::repos::playing_xi;

/// Overs limit used for replay when a match has none configured.
const UNBOUNDED_OVERS: i32 = i32::MAX / BALLS_PER_OVER;

#[derive(Debug, Default, Clone, Deserialize)]
pub struct DeliveryPayload {
    pub striker_id: Option<i64>,
    pub non_striker_id: Option<i64>,
    pub bowler_id: Option<i64>,
    pub runs_off_bat: Option<i32>,
    pub extra_type: Option<String>,
    pub extra_runs: Option<i32>,
    pub is_legal_delivery: Option<bool>,
    pub wicket_type: Option<String>,
    pub out_player_id: Option<i64>,
}

impl DeliveryPayload {
    fn into_delivery(self) -> Result<Delivery, DomainError> {
        let (Some(bowler_id), Some(runs_off_bat)) = (self.bowler_id, self.runs_off_bat) else {
            return Err(DomainError::validation(
                ValidationKind::MissingField,
                "bowler_id and runs_off_bat are required",
            ));
        };
        let extra_type = parse_optional::<ExtraType>(self.extra_type.as_deref())?;
        let wicket_type = parse_optional::<WicketType>(self.wicket_type.as_deref())?;
        // wides and no-balls are re-bowled unless the scorer says otherwise
        let is_legal_delivery = self.is_legal_delivery.unwrap_or(!matches!(
            extra_type,
            Some(ExtraType::Wide | ExtraType::NoBall)
        ));
        Ok(Delivery {
            striker_id: self.striker_id,
            non_striker_id: self.non_striker_id,
            bowler_id,
            runs_off_bat,
            extra_type,
            extra_runs: self.extra_runs.unwrap_or(0),
            is_legal_delivery,
            wicket_type,
            out_player_id: self.out_player_id,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LivePhase {
    NotStarted,
    AwaitingBall,
    OverComplete,
    InningsComplete,
    MatchComplete,
}

impl From<InningsPhase> for LivePhase {
    fn from(phase: InningsPhase) -> Self {
        match phase {
            InningsPhase::AwaitingBall => LivePhase::AwaitingBall,
            InningsPhase::OverComplete => LivePhase::OverComplete,
            InningsPhase::InningsComplete => LivePhase::InningsComplete,
            InningsPhase::MatchComplete => LivePhase::MatchComplete,
        }
    }
}

/// Scoreboard as the scorer sees it between deliveries.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LiveView {
    pub match_id: i64,
    pub status: MatchStatus,
    pub phase: LivePhase,
    pub total_overs: Option<i32>,
    pub innings_id: Option<i64>,
    pub innings_number: Option<i16>,
    pub batting_team_id: Option<i64>,
    pub bowling_team_id: Option<i64>,
    pub score: i32,
    pub wickets: i32,
    pub extras: i32,
    pub overs: String,
    pub run_rate: f64,
    pub current_over: i32,
    pub next_ball_number: i32,
    pub striker_id: Option<i64>,
    pub non_striker_id: Option<i64>,
    pub current_bowler_id: Option<i64>,
    pub last_bowler_id: Option<i64>,
    pub dismissed_player_ids: Vec<i64>,
    pub target: Option<i32>,
    pub runs_required: Option<i32>,
    pub outcome: Option<MatchOutcome>,
}

impl LiveView {
    fn not_started(game: &Match) -> Self {
        Self {
            match_id: game.id,
            status: game.status,
            phase: LivePhase::NotStarted,
            total_overs: game.total_overs,
            innings_id: None,
            innings_number: None,
            batting_team_id: None,
            bowling_team_id: None,
            score: 0,
            wickets: 0,
            extras: 0,
            overs: "0.0".to_string(),
            run_rate: 0.0,
            current_over: 1,
            next_ball_number: 1,
            striker_id: None,
            non_striker_id: None,
            current_bowler_id: None,
            last_bowler_id: None,
            dismissed_player_ids: Vec::new(),
            target: None,
            runs_required: None,
            outcome: None,
        }
    }

    fn from_state(
        game: &Match,
        status: MatchStatus,
        innings: &Innings,
        state: &ScoringState,
    ) -> Self {
        Self {
            match_id: game.id,
            status,
            phase: state.phase.into(),
            total_overs: game.total_overs,
            innings_id: Some(innings.id),
            innings_number: Some(state.innings_number),
            batting_team_id: Some(state.batting_team_id),
            bowling_team_id: Some(state.bowling_team_id),
            score: state.score,
            wickets: state.wickets,
            extras: state.extras,
            overs: state.overs(),
            run_rate: state.run_rate(),
            current_over: state.current_over,
            next_ball_number: state.next_ball_number(),
            striker_id: state.striker,
            non_striker_id: state.non_striker,
            current_bowler_id: state.current_bowler,
            last_bowler_id: state.last_bowler,
            dismissed_player_ids: state.out_players.clone(),
            target: state.target,
            runs_required: if state.innings_number == 2 {
                state.runs_required()
            } else {
                None
            },
            outcome: state.outcome,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RecordedDelivery {
    pub ball: Ball,
    pub live: LiveView,
}

pub struct LiveScoringService;

impl LiveScoringService {
    pub fn new() -> Self {
        Self
    }

    pub async fn live_view<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        match_id: i64,
    ) -> Result<LiveView, DomainError> {
        let game = matches::require_match(conn, match_id).await?;
        let overs_limit = game.total_overs.unwrap_or(UNBOUNDED_OVERS);
        Ok(match current_innings(conn, &game, overs_limit).await? {
            Some((innings, state)) => LiveView::from_state(&game, game.status, &innings, &state),
            None => LiveView::not_started(&game),
        })
    }

    /// Record one delivery. Expects to run inside a transaction.
    pub async fn record_delivery<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        match_id: i64,
        payload: DeliveryPayload,
    ) -> Result<RecordedDelivery, DomainError> {
        let game = matches::require_match(conn, match_id).await?;
        if game.status == MatchStatus::Completed {
            return Err(DomainError::conflict(
                ConflictKind::MatchCompleted,
                "Match is already completed",
            ));
        }
        let total_overs = game.total_overs.ok_or_else(|| {
            DomainError::validation(
                ValidationKind::TotalOversRequired,
                "total_overs must be set before scoring",
            )
        })?;
        let delivery = payload.into_delivery()?;

        let team1_xi = playing_xi::selected_players(conn, match_id, game.team1_id).await?;
        let team2_xi = playing_xi::selected_players(conn, match_id, game.team2_id).await?;
        for (team_id, xi) in [(game.team1_id, &team1_xi), (game.team2_id, &team2_xi)] {
            if xi.len() != XI_SIZE {
                return Err(DomainError::validation(
                    ValidationKind::IncompletePlayingXi,
                    format!(
                        "Team {team_id} must have exactly {XI_SIZE} players in the playing XI (has {})",
                        xi.len()
                    ),
                ));
            }
        }

        let (innings, mut state) = match current_innings(conn, &game, total_overs).await? {
            None => {
                let (batting, bowling) = first_innings_sides(
                    game.team1_id,
                    game.team2_id,
                    game.toss_winner_team_id,
                    game.elected_to == ElectedTo::Bat,
                );
                let innings = open_innings(conn, match_id, batting, bowling, 1).await?;
                let state = ScoringState::new(1, batting, bowling, total_overs, None);
                (innings, state)
            }
            Some((first, state))
                if state.innings_number == 1 && state.phase == InningsPhase::InningsComplete =>
            {
                let chase = start_second_innings(&state)?;
                let innings = open_innings(
                    conn,
                    first.match_id,
                    chase.batting_team_id,
                    chase.bowling_team_id,
                    2,
                )
                .await?;
                (innings, chase)
            }
            Some(current) => current,
        };

        let (batting_xi, bowling_xi) = if state.batting_team_id == game.team1_id {
            (&team1_xi, &team2_xi)
        } else {
            (&team2_xi, &team1_xi)
        };
        for batter in [delivery.striker_id, delivery.non_striker_id]
            .into_iter()
            .flatten()
        {
            if !batting_xi.contains(&batter) {
                return Err(DomainError::validation(
                    ValidationKind::NotInPlayingXi,
                    format!("Player {batter} is not in the batting XI"),
                ));
            }
        }
        if !bowling_xi.contains(&delivery.bowler_id) {
            return Err(DomainError::validation(
                ValidationKind::NotInPlayingXi,
                format!("Player {} is not in the bowling XI", delivery.bowler_id),
            ));
        }

        let over_number = state.current_over;
        let ball_number = state.next_ball_number();
        apply_ball(&mut state, &delivery)?;
        let batsman_id = delivery.striker_id.ok_or_else(|| {
            DomainError::validation(ValidationKind::BattersRequired, "striker_id is required")
        })?;

        let over = overs::find_or_create(
            conn,
            OverCreate {
                innings_id: innings.id,
                over_number,
                bowler_id: delivery.bowler_id,
            },
        )
        .await?;
        let record = delivery.to_record(batsman_id);
        let ball = balls::create_ball(
            conn,
            NewBall {
                over_id: over.id,
                ball_number,
                batsman_id,
                bowler_id: record.bowler_id,
                runs_off_bat: record.runs_off_bat,
                extra_type: record.extra_type,
                extra_runs: record.extra_runs,
                is_legal_delivery: record.is_legal_delivery,
                wicket_type: record.wicket_type,
                out_player_id: record.out_player_id,
            },
        )
        .await?;

        let status = if state.phase == InningsPhase::MatchComplete {
            MatchStatus::Completed
        } else {
            MatchStatus::Live
        };
        if status != game.status {
            matches::set_status(conn, match_id, status).await?;
            info!(match_id, ?status, "match status changed");
        }

        info!(
            match_id,
            innings_number = state.innings_number,
            over_number,
            ball_number,
            score = state.score,
            wickets = state.wickets,
            "delivery recorded"
        );

        let live = LiveView::from_state(&game, status, &innings, &state);
        Ok(RecordedDelivery { ball, live })
    }
}

impl Default for LiveScoringService {
    fn default() -> Self {
        Self::new()
    }
}

async fn open_innings<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    match_id: i64,
    batting_team_id: i64,
    bowling_team_id: i64,
    innings_number: i16,
) -> Result<Innings, DomainError> {
    let created = innings::create_innings(
        conn,
        InningsCreate {
            match_id,
            batting_team_id,
            bowling_team_id,
            innings_number,
        },
    )
    .await?;
    info!(match_id, innings_number, innings_id = created.id, "innings opened");
    Ok(created)
}

async fn replay_innings<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    innings: &Innings,
    total_overs: i32,
    target: Option<i32>,
) -> Result<ScoringState, DomainError> {
    let overs = balls::overs_with_balls(conn, innings.id).await?;
    let records: Vec<_> = overs
        .iter()
        .flat_map(|(_, balls)| balls.iter().map(Ball::to_record))
        .collect();
    Ok(ScoringState::replay(
        innings.innings_number,
        innings.batting_team_id,
        innings.bowling_team_id,
        total_overs,
        target,
        &records,
    ))
}

/// Latest innings of the match with its replayed state; `None` before the first ball.
async fn current_innings<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game: &Match,
    total_overs: i32,
) -> Result<Option<(Innings, ScoringState)>, DomainError> {
    let all = innings::list_innings(conn, Some(game.id)).await?;
    let first = all.iter().find(|i| i.innings_number == 1);
    let second = all.iter().find(|i| i.innings_number == 2);

    let Some(first) = first else {
        return Ok(None);
    };
    let first_state = replay_innings(conn, first, total_overs, None).await?;
    let Some(second) = second else {
        return Ok(Some((first.clone(), first_state)));
    };

    let target = first_state.target.unwrap_or(first_state.score + 1);
    let second_state = replay_innings(conn, second, total_overs, Some(target)).await?;
    Ok(Some((second.clone(), second_state)))
}
