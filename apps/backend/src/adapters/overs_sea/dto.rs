//! DTOs for overs_sea adapter.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverCreate {
    pub innings_id: i64,
    pub over_number: i32,
    pub bowler_id: i64,
}
