//! Repository functions for the domain layer: SeaORM models in, domain
//! models (with joined display names) out, errors as `DomainError`.

pub mod balls;
pub mod innings;
pub mod matches;
pub mod overs;
pub mod players;
pub mod playing_xi;
pub mod teams;
