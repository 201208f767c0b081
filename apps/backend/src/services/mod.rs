//! Use-case services. Validate input, then call repos; errors are `DomainError`.

pub mod balls;
pub mod innings;
pub mod live_scoring;
pub mod matches;
pub mod overs;
pub mod players;
pub mod playing_xi;
pub mod summary;
pub mod teams;

use time::macros::format_description;
use time::Date;

use crate::errors::domain::{DomainError, ValidationKind};

/// Parse a `YYYY-MM-DD` date field.
pub(crate) fn parse_date(field: &str, raw: &str) -> Result<Date, DomainError> {
    Date::parse(raw.trim(), format_description!("[year]-[month]-[day]")).map_err(|_| {
        DomainError::validation(
            ValidationKind::Other("InvalidDate".into()),
            format!("{field} must be a date in YYYY-MM-DD format"),
        )
    })
}

/// Trimmed, non-empty string or `None`.
pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
