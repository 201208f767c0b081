//! Error codes for the cricket scoring API.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//! Every code is SCREAMING_SNAKE_CASE and maps 1:1 to the string that
//! appears in HTTP responses.

use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Request Validation
    /// Path id is not a positive integer
    InvalidId,
    /// General validation error
    ValidationError,
    /// General bad request error (malformed JSON, unreadable body)
    BadRequest,
    /// One or more required fields are missing
    MissingField,
    InvalidCountryCode,
    /// Team 1 and team 2 are the same team
    SameTeams,
    /// Toss winner is not one of the match teams
    InvalidTossWinner,
    InvalidElectedTo,
    InvalidStatus,
    InvalidTotalOvers,
    InvalidInningsNumber,
    /// Innings teams do not match the fixture
    TeamsNotInMatch,
    InvalidExtraType,
    InvalidWicketType,
    /// Wicket recorded without a dismissed player
    WicketWithoutOutPlayer,
    InvalidRuns,
    InvalidBallNumber,
    /// Playing XI submission without players
    PlayersRequired,
    /// Player does not belong to the team it was listed under
    PlayerTeamMismatch,
    /// Fewer than 11 players selected for a side
    IncompletePlayingXi,
    /// More than 11 players selected for a side
    PlayingXiFull,
    NotInPlayingXi,
    /// Striker or non-striker unknown
    BattersRequired,
    SameBatters,
    BatterDismissed,
    /// Bowler of the previous over tried to open the next one
    OverCompleteBowler,
    BowlerChangeMidOver,
    /// Live scoring needs the match length
    TotalOversRequired,

    // Resource Not Found
    TeamNotFound,
    PlayerNotFound,
    MatchNotFound,
    InningsNotFound,
    OverNotFound,
    BallNotFound,
    /// General not found error
    NotFound,

    // Business Logic Conflicts
    /// Match already has a result
    MatchCompleted,
    /// Innings is over; the next one has not started
    InningsComplete,
    /// Chase requested before the first innings ended
    InningsInProgress,
    /// Generic conflict (fallback for unmatched conflicts)
    Conflict,

    // Database Constraint Violations
    /// Unique constraint violation (SQLSTATE 23505)
    UniqueViolation,
    /// Foreign key constraint violation (SQLSTATE 23503)
    FkViolation,

    // System Errors
    DbError,
    DbUnavailable,
    DbTimeout,
    Internal,
    ConfigError,
    DataCorruption,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidId => "INVALID_ID",
            Self::ValidationError => "VALIDATION_ERROR",
            Self::BadRequest => "BAD_REQUEST",
            Self::MissingField => "MISSING_FIELD",
            Self::InvalidCountryCode => "INVALID_COUNTRY_CODE",
            Self::SameTeams => "SAME_TEAMS",
            Self::InvalidTossWinner => "INVALID_TOSS_WINNER",
            Self::InvalidElectedTo => "INVALID_ELECTED_TO",
            Self::InvalidStatus => "INVALID_STATUS",
            Self::InvalidTotalOvers => "INVALID_TOTAL_OVERS",
            Self::InvalidInningsNumber => "INVALID_INNINGS_NUMBER",
            Self::TeamsNotInMatch => "TEAMS_NOT_IN_MATCH",
            Self::InvalidExtraType => "INVALID_EXTRA_TYPE",
            Self::InvalidWicketType => "INVALID_WICKET_TYPE",
            Self::WicketWithoutOutPlayer => "WICKET_WITHOUT_OUT_PLAYER",
            Self::InvalidRuns => "INVALID_RUNS",
            Self::InvalidBallNumber => "INVALID_BALL_NUMBER",
            Self::PlayersRequired => "PLAYERS_REQUIRED",
            Self::PlayerTeamMismatch => "PLAYER_TEAM_MISMATCH",
            Self::IncompletePlayingXi => "INCOMPLETE_PLAYING_XI",
            Self::PlayingXiFull => "PLAYING_XI_FULL",
            Self::NotInPlayingXi => "NOT_IN_PLAYING_XI",
            Self::BattersRequired => "BATTERS_REQUIRED",
            Self::SameBatters => "SAME_BATTERS",
            Self::BatterDismissed => "BATTER_DISMISSED",
            Self::OverCompleteBowler => "OVER_COMPLETE_BOWLER",
            Self::BowlerChangeMidOver => "BOWLER_CHANGE_MID_OVER",
            Self::TotalOversRequired => "TOTAL_OVERS_REQUIRED",

            Self::TeamNotFound => "TEAM_NOT_FOUND",
            Self::PlayerNotFound => "PLAYER_NOT_FOUND",
            Self::MatchNotFound => "MATCH_NOT_FOUND",
            Self::InningsNotFound => "INNINGS_NOT_FOUND",
            Self::OverNotFound => "OVER_NOT_FOUND",
            Self::BallNotFound => "BALL_NOT_FOUND",
            Self::NotFound => "NOT_FOUND",

            Self::MatchCompleted => "MATCH_COMPLETED",
            Self::InningsComplete => "INNINGS_COMPLETE",
            Self::InningsInProgress => "INNINGS_IN_PROGRESS",
            Self::Conflict => "CONFLICT",

            Self::UniqueViolation => "UNIQUE_VIOLATION",
            Self::FkViolation => "FK_VIOLATION",

            Self::DbError => "DB_ERROR",
            Self::DbUnavailable => "DB_UNAVAILABLE",
            Self::DbTimeout => "DB_TIMEOUT",
            Self::Internal => "INTERNAL",
            Self::ConfigError => "CONFIG_ERROR",
            Self::DataCorruption => "DATA_CORRUPTION",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
