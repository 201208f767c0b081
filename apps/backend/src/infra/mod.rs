//! Infrastructure layer - database bootstrap, state construction and error translation.

pub mod db;
pub mod db_errors;
pub mod state;
