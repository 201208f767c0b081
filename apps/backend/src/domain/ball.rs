//! Ball-level vocabulary shared by the scoring machine and the scorecard.

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::domain::{DomainError, ValidationKind};

pub const BALLS_PER_OVER: i32 = 6;
pub const MAX_WICKETS: i32 = 10;
/// Ceiling for `runs_off_bat` and for `extra_runs` on a single delivery.
pub const MAX_RUNS_PER_BALL: i32 = 10;
/// Ceiling for a match's configured overs per innings.
pub const MAX_TOTAL_OVERS: i32 = 50;

/// Reject runs outside `0..=MAX_RUNS_PER_BALL`.
pub fn check_runs(runs_off_bat: i32, extra_runs: i32) -> Result<(), DomainError> {
    if runs_off_bat < 0 || extra_runs < 0 {
        return Err(DomainError::validation(
            ValidationKind::InvalidRuns,
            "Runs cannot be negative",
        ));
    }
    if runs_off_bat > MAX_RUNS_PER_BALL || extra_runs > MAX_RUNS_PER_BALL {
        return Err(DomainError::validation(
            ValidationKind::InvalidRuns,
            format!("Runs per delivery cannot exceed {MAX_RUNS_PER_BALL}"),
        ));
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtraType {
    NoBall,
    Wide,
    Bye,
    LegBye,
}

impl ExtraType {
    pub fn as_str(self) -> &'static str {
        match self {
            ExtraType::NoBall => "no_ball",
            ExtraType::Wide => "wide",
            ExtraType::Bye => "bye",
            ExtraType::LegBye => "leg_bye",
        }
    }

    /// Byes and leg byes are run by the batters and are not charged to the bowler.
    pub fn is_run_by_batters(self) -> bool {
        matches!(self, ExtraType::Bye | ExtraType::LegBye)
    }
}

impl Display for ExtraType {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExtraType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "no_ball" => Ok(ExtraType::NoBall),
            "wide" => Ok(ExtraType::Wide),
            "bye" => Ok(ExtraType::Bye),
            "leg_bye" => Ok(ExtraType::LegBye),
            _ => Err(DomainError::validation(
                ValidationKind::InvalidExtraType,
                "extra_type must be one of: no_ball, wide, bye, leg_bye",
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WicketType {
    Caught,
    RunOut,
    Bowled,
    Lbw,
}

impl WicketType {
    pub fn as_str(self) -> &'static str {
        match self {
            WicketType::Caught => "caught",
            WicketType::RunOut => "run_out",
            WicketType::Bowled => "bowled",
            WicketType::Lbw => "lbw",
        }
    }

    /// Run-outs are not credited to the bowler.
    pub fn credits_bowler(self) -> bool {
        !matches!(self, WicketType::RunOut)
    }
}

impl Display for WicketType {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

impl FromStr for WicketType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "caught" => Ok(WicketType::Caught),
            "run_out" => Ok(WicketType::RunOut),
            "bowled" => Ok(WicketType::Bowled),
            "lbw" => Ok(WicketType::Lbw),
            _ => Err(DomainError::validation(
                ValidationKind::InvalidWicketType,
                "wicket_type must be one of: caught, run_out, bowled, lbw",
            )),
        }
    }
}

/// One persisted ball, as the scorecard and replay see it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BallRecord {
    pub batsman_id: i64,
    pub bowler_id: i64,
    pub runs_off_bat: i32,
    pub extra_type: Option<ExtraType>,
    pub extra_runs: i32,
    pub is_legal_delivery: bool,
    pub wicket_type: Option<WicketType>,
    pub out_player_id: Option<i64>,
}

impl BallRecord {
    pub fn total_runs(&self) -> i32 {
        self.runs_off_bat.saturating_add(self.extra_runs)
    }

    /// Runs actually run or hit; decides strike rotation.
    pub fn physical_runs(&self) -> i32 {
        physical_runs(self.runs_off_bat, self.extra_type, self.extra_runs)
    }
}

pub fn physical_runs(runs_off_bat: i32, extra_type: Option<ExtraType>, extra_runs: i32) -> i32 {
    match extra_type {
        Some(kind) if kind.is_run_by_batters() => runs_off_bat.saturating_add(extra_runs),
        _ => runs_off_bat,
    }
}

/// A ball as submitted by the scorer, with the batters at the crease.
///
/// Both batter slots are optional so that replayed balls (which only know
/// the striker) and fresh submissions share one shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delivery {
    pub striker_id: Option<i64>,
    pub non_striker_id: Option<i64>,
    pub bowler_id: i64,
    pub runs_off_bat: i32,
    pub extra_type: Option<ExtraType>,
    pub extra_runs: i32,
    pub is_legal_delivery: bool,
    pub wicket_type: Option<WicketType>,
    pub out_player_id: Option<i64>,
}

impl Delivery {
    pub fn physical_runs(&self) -> i32 {
        physical_runs(self.runs_off_bat, self.extra_type, self.extra_runs)
    }

    pub fn to_record(&self, batsman_id: i64) -> BallRecord {
        BallRecord {
            batsman_id,
            bowler_id: self.bowler_id,
            runs_off_bat: self.runs_off_bat,
            extra_type: self.extra_type,
            extra_runs: self.extra_runs,
            is_legal_delivery: self.is_legal_delivery,
            wicket_type: self.wicket_type,
            out_player_id: self.out_player_id,
        }
    }
}

impl From<&BallRecord> for Delivery {
    fn from(ball: &BallRecord) -> Self {
        Self {
            striker_id: Some(ball.batsman_id),
            non_striker_id: None,
            bowler_id: ball.bowler_id,
            runs_off_bat: ball.runs_off_bat,
            extra_type: ball.extra_type,
            extra_runs: ball.extra_runs,
            is_legal_delivery: ball.is_legal_delivery,
            wicket_type: ball.wicket_type,
            out_player_id: ball.out_player_id,
        }
    }
}

/// `"{completed overs}.{balls}"` for a count of legal deliveries.
pub fn overs_display(legal_balls: i32) -> String {
    format!(
        "{}.{}",
        legal_balls / BALLS_PER_OVER,
        legal_balls % BALLS_PER_OVER
    )
}

/// Runs per six legal balls; 0 before the first legal ball.
pub fn run_rate(runs: i32, legal_balls: i32) -> f64 {
    if legal_balls <= 0 {
        return 0.0;
    }
    f64::from(runs) * f64::from(BALLS_PER_OVER) / f64::from(legal_balls)
}
