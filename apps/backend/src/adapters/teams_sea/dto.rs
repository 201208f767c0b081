//! DTOs for teams_sea adapter.

/// Column values for inserting or replacing a team.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamFields {
    pub name: String,
    pub country_code: String,
}
