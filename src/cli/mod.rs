//! CLI argument definitions and parsing.

pub mod types;

use std::net::SocketAddr;

use clap::{Parser, Subcommand};
use types::{SportId, TeamId};

use crate::config::{DEFAULT_CACHE_CAPACITY, DEFAULT_CACHE_TTL};

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the depth chart HTTP service
    Serve {
        /// Address to listen on (or set `DEPTH_CHART_ADDR` env var).
        #[clap(long)]
        addr: Option<SocketAddr>,

        /// How long cached query results stay valid, in seconds.
        #[clap(long, default_value_t = DEFAULT_CACHE_TTL.as_secs())]
        cache_ttl_secs: u64,

        /// Maximum cached entries per query type.
        #[clap(long, default_value_t = DEFAULT_CACHE_CAPACITY)]
        cache_capacity: usize,

        /// Load the sample roster before accepting requests.
        #[clap(long)]
        seed: bool,
    },

    /// Print the sample depth chart for a sport and team.
    ///
    /// Uses the built-in seed roster; nothing is read from a running service.
    Show {
        /// Sport ID (1 = NFL, 2 = NBA in the sample roster).
        #[clap(long)]
        sport_id: SportId,

        /// Team ID (101 = Tigers, 201 = Lakers in the sample roster).
        #[clap(long)]
        team_id: TeamId,

        /// Only print this position.
        #[clap(short = 'p', long)]
        position: Option<String>,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },
}

#[derive(Debug, Parser)]
#[clap(name = "depth-chart", about = "Team depth chart service")]
pub struct DepthChartCli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[clap(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[clap(subcommand)]
    pub command: Commands,
}
