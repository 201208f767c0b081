//! Domain layer: pure cricket scoring rules, no I/O.

pub mod ball;
pub mod scorecard;
pub mod scoring;

#[cfg(test)]
mod test_helpers;
#[cfg(test)]
mod tests_props_scoring;
#[cfg(test)]
mod tests_scoring;

pub use ball::{BallRecord, Delivery, ExtraType, WicketType};
pub use scorecard::{build_scorecard, OverRecord, Scorecard};
pub use scoring::{
    advance, apply_ball, first_innings_sides, start_second_innings, InningsPhase, MatchOutcome,
    ScoringState,
};
