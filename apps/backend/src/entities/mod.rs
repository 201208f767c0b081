pub mod balls;
pub mod innings;
pub mod matches;
pub mod overs;
pub mod players;
pub mod playing_xi;
pub mod teams;
