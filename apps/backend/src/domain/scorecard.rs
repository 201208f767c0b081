//! Per-innings batting and bowling figures, replayed from recorded balls.

use std::collections::HashMap;

use serde::Serialize;

use crate::domain::ball::{
    overs_display, run_rate, BallRecord, ExtraType, WicketType, BALLS_PER_OVER,
};

/// One over as recorded: the over's bowler plus its balls in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverRecord {
    pub bowler_id: i64,
    pub balls: Vec<BallRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BattingLine {
    pub player_id: i64,
    pub runs: i32,
    pub balls: i32,
    pub fours: i32,
    pub sixes: i32,
    pub strike_rate: f64,
    pub out: bool,
    pub dismissal: Option<WicketType>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BowlingLine {
    pub player_id: i64,
    pub overs: String,
    pub legal_balls: i32,
    pub runs_conceded: i32,
    pub wickets: i32,
    pub economy: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InningsTotals {
    pub runs: i32,
    pub wickets: i32,
    pub legal_balls: i32,
    pub overs: String,
    pub extras: i32,
    pub run_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scorecard {
    pub batting: Vec<BattingLine>,
    pub bowling: Vec<BowlingLine>,
    pub totals: InningsTotals,
}

/// Rows keyed by player id, kept in first-seen order.
struct Ledger<T> {
    index: HashMap<i64, usize>,
    rows: Vec<T>,
}

impl<T> Ledger<T> {
    fn new() -> Self {
        Self {
            index: HashMap::new(),
            rows: Vec::new(),
        }
    }

    fn entry(&mut self, player_id: i64, make: impl FnOnce() -> T) -> &mut T {
        let idx = match self.index.get(&player_id) {
            Some(&idx) => idx,
            None => {
                self.rows.push(make());
                let idx = self.rows.len() - 1;
                self.index.insert(player_id, idx);
                idx
            }
        };
        &mut self.rows[idx]
    }
}

fn new_batter(player_id: i64) -> BattingLine {
    BattingLine {
        player_id,
        runs: 0,
        balls: 0,
        fours: 0,
        sixes: 0,
        strike_rate: 0.0,
        out: false,
        dismissal: None,
    }
}

fn new_bowler(player_id: i64) -> BowlingLine {
    BowlingLine {
        player_id,
        overs: overs_display(0),
        legal_balls: 0,
        runs_conceded: 0,
        wickets: 0,
        economy: 0.0,
    }
}

pub fn build_scorecard(overs: &[OverRecord]) -> Scorecard {
    let mut batting = Ledger::new();
    let mut bowling = Ledger::new();
    let mut totals = InningsTotals {
        runs: 0,
        wickets: 0,
        legal_balls: 0,
        overs: String::new(),
        extras: 0,
        run_rate: 0.0,
    };

    for over in overs {
        let bowler = bowling.entry(over.bowler_id, || new_bowler(over.bowler_id));
        for ball in &over.balls {
            let charged_extras = match ball.extra_type {
                Some(kind) if kind.is_run_by_batters() => 0,
                _ => ball.extra_runs,
            };
            bowler.runs_conceded = bowler
                .runs_conceded
                .saturating_add(ball.runs_off_bat.saturating_add(charged_extras));
            if ball.is_legal_delivery {
                bowler.legal_balls += 1;
            }
            if ball.wicket_type.is_some_and(WicketType::credits_bowler) {
                bowler.wickets += 1;
            }

            totals.runs = totals.runs.saturating_add(ball.total_runs());
            totals.extras = totals.extras.saturating_add(ball.extra_runs);
            if ball.is_legal_delivery {
                totals.legal_balls += 1;
            }
            if ball.wicket_type.is_some() {
                totals.wickets += 1;
            }
        }
    }

    for ball in overs.iter().flat_map(|o| o.balls.iter()) {
        let line = batting.entry(ball.batsman_id, || new_batter(ball.batsman_id));
        line.runs = line.runs.saturating_add(ball.runs_off_bat);
        if ball.extra_type != Some(ExtraType::Wide) {
            line.balls += 1;
        }
        match ball.runs_off_bat {
            4 => line.fours += 1,
            6 => line.sixes += 1,
            _ => {}
        }

        if let (Some(kind), Some(out_id)) = (ball.wicket_type, ball.out_player_id) {
            let dismissed = batting.entry(out_id, || new_batter(out_id));
            dismissed.out = true;
            dismissed.dismissal = Some(kind);
        }
    }

    let batting = batting
        .rows
        .into_iter()
        .map(|mut line| {
            line.strike_rate = if line.balls > 0 {
                f64::from(line.runs) * 100.0 / f64::from(line.balls)
            } else {
                0.0
            };
            line
        })
        .collect();

    let bowling = bowling
        .rows
        .into_iter()
        .map(|mut line| {
            line.overs = overs_display(line.legal_balls);
            line.economy = if line.legal_balls > 0 {
                f64::from(line.runs_conceded) * f64::from(BALLS_PER_OVER)
                    / f64::from(line.legal_balls)
            } else {
                0.0
            };
            line
        })
        .collect();

    totals.overs = overs_display(totals.legal_balls);
    totals.run_rate = run_rate(totals.runs, totals.legal_balls);

    Scorecard {
        batting,
        bowling,
        totals,
    }
}
