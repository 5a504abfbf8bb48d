//! Data models for the roster store

use crate::cli::types::{SportId, TeamId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A player on a team's depth chart.
///
/// Jersey numbers are only unique within a single position list, so a
/// player is identified by all four fields together.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub number: u32,
    pub name: String,
    pub team_id: TeamId,
    pub sport_id: SportId,
}

impl Player {
    pub fn new(sport_id: SportId, team_id: TeamId, number: u32, name: impl Into<String>) -> Self {
        Self {
            number,
            name: name.into(),
            team_id,
            sport_id,
        }
    }
}

/// Composite key identifying one ordered position list
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RosterKey {
    pub sport_id: SportId,
    pub team_id: TeamId,
    pub position: String,
}

impl RosterKey {
    pub fn new(sport_id: SportId, team_id: TeamId, position: &str) -> Self {
        Self {
            sport_id,
            team_id,
            position: position.to_string(),
        }
    }

    pub fn belongs_to(&self, sport_id: SportId, team_id: TeamId) -> bool {
        self.sport_id == sport_id && self.team_id == team_id
    }
}

/// Snapshot of every position list for one sport/team, keyed by position
pub type DepthChart = BTreeMap<String, Vec<Player>>;
