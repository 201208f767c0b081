use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};
use futures_util::future::{ready, Ready};

use crate::error::AppError;
use crate::errors::ErrorCode;

/// The `{id}` segment of a resource path, parsed as a positive integer.
///
/// Existence is not checked here; services report the resource-specific
/// not-found error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdPath(pub i64);

pub(crate) fn parse_id(raw: &str) -> Result<i64, AppError> {
    match raw.parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(AppError::bad_request(
            ErrorCode::InvalidId,
            format!("Invalid ID: {raw}"),
        )),
    }
}

/// Parse an optional id filter from the query string (`?team_id=3`).
pub fn parse_filter_id(name: &str, raw: Option<&str>) -> Result<Option<i64>, AppError> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None => Ok(None),
        Some(value) => match value.parse::<i64>() {
            Ok(id) if id > 0 => Ok(Some(id)),
            _ => Err(AppError::bad_request(
                ErrorCode::InvalidId,
                format!("Invalid {name}: {value}"),
            )),
        },
    }
}

impl FromRequest for IdPath {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let result = req
            .match_info()
            .get("id")
            .ok_or_else(|| AppError::bad_request(ErrorCode::InvalidId, "Missing id parameter"))
            .and_then(parse_id)
            .map(IdPath);
        ready(result)
    }
}
