//! Sample roster used by demos and tests.

use tracing::info;

use super::{models::Player, store::RosterStore};
use crate::{
    cli::types::{SportId, TeamId},
    error::Result,
};

pub const NFL: SportId = SportId(1);
pub const NBA: SportId = SportId(2);
pub const TIGERS: TeamId = TeamId(101);
pub const LAKERS: TeamId = TeamId(201);

/// (sport, team, position, number, name, rank)
const SAMPLE_ROSTER: &[(SportId, TeamId, &str, u32, &str, i64)] = &[
    (NFL, TIGERS, "QB", 12, "Tom Brady", 0),
    (NFL, TIGERS, "QB", 11, "Blaine Gabbert", 1),
    (NFL, TIGERS, "QB", 2, "Kyle Trask", 2),
    (NFL, TIGERS, "WR", 13, "Mike Evans", 0),
    (NFL, TIGERS, "WR", 14, "Chris Godwin", 1),
    (NFL, TIGERS, "RB", 7, "Leonard Fournette", 0),
    (NFL, TIGERS, "RB", 27, "Ronald Jones II", 1),
    (NBA, LAKERS, "G", 23, "LeBron James", 0),
    (NBA, LAKERS, "G", 3, "Anthony Davis", 1),
];

impl RosterStore {
    /// Populate the store with the sample roster.
    ///
    /// Goes through [`RosterStore::add_player`], so seeding twice stops at
    /// the first duplicate with a `Conflict`.
    pub fn seed_data(&self) -> Result<()> {
        for &(sport_id, team_id, position, number, name, rank) in SAMPLE_ROSTER {
            let player = Player::new(sport_id, team_id, number, name);
            self.add_player(sport_id, team_id, position, player, Some(rank))?;
        }

        info!(players = SAMPLE_ROSTER.len(), "seeded sample depth charts");
        Ok(())
    }
}
