//! Entry point: parse CLI and dispatch to command handlers.

use std::time::Duration;

use clap::Parser;
use depth_chart::{
    cli::{Commands, DepthChartCli},
    commands::{serve::handle_serve, show::handle_show},
    config::{resolve_bind_addr, CacheConfig, ServerConfig},
    logging::init_logging,
};

/// Run the CLI.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let app = DepthChartCli::parse();
    init_logging(app.verbose);

    match app.command {
        Commands::Serve {
            addr,
            cache_ttl_secs,
            cache_capacity,
            seed,
        } => {
            let config = ServerConfig {
                bind_addr: resolve_bind_addr(addr)?,
                cache: CacheConfig {
                    ttl: Duration::from_secs(cache_ttl_secs),
                    capacity: cache_capacity,
                },
                seed_on_start: seed,
            };
            handle_serve(config).await?
        }

        Commands::Show {
            sport_id,
            team_id,
            position,
            json,
        } => handle_show(sport_id, team_id, position, json)?,
    }

    Ok(())
}
