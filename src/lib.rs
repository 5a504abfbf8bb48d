//! Team Depth Chart Library
//!
//! Tracks, per sport and team, the ordered ranking of players at each
//! position and answers "who backs up whom" queries.
//!
//! ## Features
//!
//! - **Ordered insertion**: Add a player at an explicit rank or append as the last backup
//! - **Backups**: Everyone ranked below a given player at a position
//! - **Full depth chart**: Snapshot of every position for a sport/team
//! - **HTTP API**: axum service with a read-through TTL cache in front of queries
//!
//! ## Quick Start
//!
//! ```rust
//! use depth_chart::{roster::{Player, RosterStore}, SportId, TeamId};
//!
//! # fn example() -> depth_chart::Result<()> {
//! let (nfl, tigers) = (SportId::new(1), TeamId::new(101));
//! let store = RosterStore::new();
//!
//! let brady = Player::new(nfl, tigers, 12, "Tom Brady");
//! let trask = Player::new(nfl, tigers, 2, "Kyle Trask");
//! store.add_player(nfl, tigers, "QB", brady.clone(), Some(0))?;
//! store.add_player(nfl, tigers, "QB", trask.clone(), None)?;
//!
//! assert_eq!(store.get_backups(nfl, tigers, "QB", &brady), vec![trask]);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! ## Environment Configuration
//!
//! Set the listen address for `depth-chart serve`:
//! ```bash
//! export DEPTH_CHART_ADDR=0.0.0.0:8080
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod error;
pub mod logging;
pub mod roster;

// Re-export commonly used types
pub use cli::types::{SportId, TeamId};
pub use error::{DepthChartError, Result};
pub use roster::{DepthChart, Player, RosterStore};

pub const BIND_ADDR_ENV_VAR: &str = "DEPTH_CHART_ADDR";
