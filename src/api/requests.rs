//! Request schemas for the HTTP API.
//!
//! Bodies are parsed strictly: required fields must be present with the
//! right types and unknown fields are rejected. PascalCase spellings are
//! accepted as aliases for clients that send .NET-style payloads.

use serde::{Deserialize, Serialize};

use crate::{
    cli::types::{SportId, TeamId},
    roster::Player,
};

/// Body of `addPlayer` and `removePlayer`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlayerRequest {
    #[serde(alias = "Number")]
    pub number: u32,

    #[serde(alias = "Name")]
    pub name: String,

    #[serde(alias = "Position")]
    pub position: String,

    /// Zero-based depth; omitted means "append to the end"
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        alias = "Rank",
        alias = "positionDepth",
        alias = "PositionDepth"
    )]
    pub rank: Option<i64>,
}

impl PlayerRequest {
    /// Build the player this request describes for the given sport/team
    pub fn to_player(&self, sport_id: SportId, team_id: TeamId) -> Player {
        Player::new(sport_id, team_id, self.number, self.name.clone())
    }
}

/// Query string of `getBackups`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackupsQuery {
    pub position: String,
    pub player_number: u32,
}
