//! SeaORM adapters. Functions are generic over `ConnectionTrait` and return
//! `DbErr`; the repos layer maps to `DomainError` via `From<DbErr>`.

pub mod balls_sea;
pub mod innings_sea;
pub mod matches_sea;
pub mod overs_sea;
pub mod players_sea;
pub mod playing_xi_sea;
pub mod teams_sea;
