//! Match summary: every innings with its overs, balls and scorecard.

use std::collections::HashMap;

use sea_orm::ConnectionTrait;
use serde::Serialize;

use crate::domain::scorecard::{
    build_scorecard, BattingLine, BowlingLine, InningsTotals, OverRecord,
};
use crate::errors::domain::DomainError;
use crate::repos::balls::{self, Ball};
use crate::repos::innings::{self, Innings};
use crate::repos::matches::{self, Match};
use crate::repos::overs::Over;
use crate::repos::players;

#[derive(Debug, Clone, Serialize)]
pub struct OverWithBalls {
    #[serde(flatten)]
    pub over: Over,
    pub balls: Vec<Ball>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NamedBattingLine {
    #[serde(flatten)]
    pub line: BattingLine,
    pub player_name: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NamedBowlingLine {
    #[serde(flatten)]
    pub line: BowlingLine,
    pub player_name: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct InningsScorecard {
    pub batting: Vec<NamedBattingLine>,
    pub bowling: Vec<NamedBowlingLine>,
    pub totals: InningsTotals,
}

#[derive(Debug, Clone, Serialize)]
pub struct InningsSummary {
    #[serde(flatten)]
    pub innings: Innings,
    pub overs: Vec<OverWithBalls>,
    pub scorecard: InningsScorecard,
}

#[derive(Debug, Clone, Serialize)]
pub struct MatchSummary {
    #[serde(rename = "match")]
    pub game: Match,
    pub innings: Vec<InningsSummary>,
}

pub struct SummaryService;

impl SummaryService {
    pub fn new() -> Self {
        Self
    }

    pub async fn match_summary<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        match_id: i64,
    ) -> Result<MatchSummary, DomainError> {
        let game = matches::require_match(conn, match_id).await?;
        let mut summaries = Vec::new();
        for inn in innings::list_innings(conn, Some(match_id)).await? {
            summaries.push(summarise_innings(conn, inn).await?);
        }
        Ok(MatchSummary {
            game,
            innings: summaries,
        })
    }
}

impl Default for SummaryService {
    fn default() -> Self {
        Self::new()
    }
}

async fn summarise_innings<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    inn: Innings,
) -> Result<InningsSummary, DomainError> {
    let overs = balls::overs_with_balls(conn, inn.id).await?;
    let records: Vec<OverRecord> = overs
        .iter()
        .map(|(over, balls)| OverRecord {
            bowler_id: over.bowler_id,
            balls: balls.iter().map(Ball::to_record).collect(),
        })
        .collect();
    let card = build_scorecard(&records);

    let mut ids: Vec<i64> = card
        .batting
        .iter()
        .map(|b| b.player_id)
        .chain(card.bowling.iter().map(|b| b.player_id))
        .collect();
    ids.sort_unstable();
    ids.dedup();
    let names: HashMap<i64, String> = players::names_by_id(conn, &ids).await?;

    let scorecard = InningsScorecard {
        batting: card
            .batting
            .into_iter()
            .map(|line| NamedBattingLine {
                player_name: names.get(&line.player_id).cloned(),
                line,
            })
            .collect(),
        bowling: card
            .bowling
            .into_iter()
            .map(|line| NamedBowlingLine {
                player_name: names.get(&line.player_id).cloned(),
                line,
            })
            .collect(),
        totals: card.totals,
    };

    Ok(InningsSummary {
        innings: inn,
        overs: overs
            .into_iter()
            .map(|(over, balls)| OverWithBalls { over, balls })
            .collect(),
        scorecard,
    })
}
