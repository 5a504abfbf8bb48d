//! The roster store: ordered position lists keyed by sport, team and position.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::{debug, info};

use super::models::{DepthChart, Player, RosterKey};
use crate::{
    cli::types::{SportId, TeamId},
    error::{DepthChartError, Result},
};

/// Shared depth chart storage.
///
/// A single lock guards the whole map. Writers hold it across the entire
/// check-then-mutate sequence (key creation, duplicate check, rank check,
/// insert) so concurrent adds to the same key cannot interleave. Readers
/// copy out under the read lock and never hand out references into the map.
#[derive(Debug, Default)]
pub struct RosterStore {
    charts: RwLock<HashMap<RosterKey, Vec<Player>>>,
}

impl RosterStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `player` to the list for (sport, team, position).
    ///
    /// With no `rank` the player is appended as the lowest priority entry.
    /// With `rank = r` the player is inserted at index `r` and everyone at
    /// `r` or below moves down one spot. A failed call never mutates the
    /// store, and never creates the key.
    pub fn add_player(
        &self,
        sport_id: SportId,
        team_id: TeamId,
        position: &str,
        player: Player,
        rank: Option<i64>,
    ) -> Result<()> {
        validate_position(position)?;
        validate_player(&player)?;
        let rank = rank.map(validate_rank).transpose()?;

        let key = RosterKey::new(sport_id, team_id, position);
        let mut charts = self.write();

        let len = match charts.get(&key) {
            Some(players) => {
                if players.iter().any(|p| p.number == player.number) {
                    return Err(DepthChartError::Conflict {
                        number: player.number,
                        position: position.to_string(),
                    });
                }
                players.len()
            }
            None => 0,
        };

        if let Some(rank) = rank {
            if rank > len {
                return Err(DepthChartError::OutOfRange { rank, len });
            }
        }

        info!(
            sport = %sport_id,
            team = %team_id,
            position,
            number = player.number,
            name = %player.name,
            rank = ?rank,
            "adding player to depth chart"
        );

        let players = charts.entry(key).or_default();
        match rank {
            Some(rank) => players.insert(rank, player),
            None => players.push(player),
        }

        Ok(())
    }

    /// Remove the first entry equal to `player`, returning it.
    ///
    /// The key stays in the store even when its list becomes empty.
    pub fn remove_player(
        &self,
        sport_id: SportId,
        team_id: TeamId,
        position: &str,
        player: &Player,
    ) -> Result<Player> {
        let key = RosterKey::new(sport_id, team_id, position);
        let mut charts = self.write();

        let not_found = || DepthChartError::NotFound {
            number: player.number,
            position: position.to_string(),
        };

        let players = charts.get_mut(&key).ok_or_else(not_found)?;
        let index = players
            .iter()
            .position(|p| p == player)
            .ok_or_else(not_found)?;

        let removed = players.remove(index);
        info!(
            sport = %sport_id,
            team = %team_id,
            position,
            number = removed.number,
            "removed player from depth chart"
        );

        Ok(removed)
    }

    /// Everyone ranked strictly below `player` at the position, in order.
    ///
    /// An unknown player or the last-ranked player has no backups; that is
    /// an empty result, not an error.
    pub fn get_backups(
        &self,
        sport_id: SportId,
        team_id: TeamId,
        position: &str,
        player: &Player,
    ) -> Vec<Player> {
        let key = RosterKey::new(sport_id, team_id, position);
        let charts = self.read();

        let Some(players) = charts.get(&key) else {
            return Vec::new();
        };

        match players.iter().position(|p| p == player) {
            Some(index) => players[index + 1..].to_vec(),
            None => Vec::new(),
        }
    }

    /// Copy of every position list belonging to (sport, team).
    pub fn get_full_depth_chart(&self, sport_id: SportId, team_id: TeamId) -> DepthChart {
        let charts = self.read();

        let chart: DepthChart = charts
            .iter()
            .filter(|(key, _)| key.belongs_to(sport_id, team_id))
            .map(|(key, players)| (key.position.clone(), players.clone()))
            .collect();

        debug!(sport = %sport_id, team = %team_id, positions = chart.len(), "depth chart snapshot");
        chart
    }

    /// Look up a player at a position by jersey number.
    pub fn find_player(
        &self,
        sport_id: SportId,
        team_id: TeamId,
        position: &str,
        number: u32,
    ) -> Option<Player> {
        let key = RosterKey::new(sport_id, team_id, position);
        self.read()
            .get(&key)?
            .iter()
            .find(|p| p.number == number)
            .cloned()
    }

    /// Number of (sport, team, position) keys, including emptied ones.
    pub fn key_count(&self) -> usize {
        self.read().len()
    }

    // No operation leaves the map half-mutated, so a poisoned lock is still
    // safe to keep using.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<RosterKey, Vec<Player>>> {
        self.charts.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<RosterKey, Vec<Player>>> {
        self.charts.write().unwrap_or_else(PoisonError::into_inner)
    }
}

fn validate_position(position: &str) -> Result<()> {
    if position.trim().is_empty() {
        return Err(DepthChartError::invalid("Position cannot be empty"));
    }
    Ok(())
}

fn validate_player(player: &Player) -> Result<()> {
    if player.number == 0 {
        return Err(DepthChartError::invalid("Player number must be positive"));
    }
    if player.name.trim().is_empty() {
        return Err(DepthChartError::invalid("Player name cannot be empty"));
    }
    Ok(())
}

fn validate_rank(rank: i64) -> Result<usize> {
    if rank < 0 {
        return Err(DepthChartError::invalid("negative rank"));
    }
    usize::try_from(rank).map_err(|_| DepthChartError::invalid("rank is too large"))
}
