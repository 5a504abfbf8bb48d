//! Show command implementation

use crate::{
    cli::types::{SportId, TeamId},
    roster::{DepthChart, RosterStore},
    Result,
};

/// Print the sample depth chart for a sport/team
pub fn handle_show(
    sport_id: SportId,
    team_id: TeamId,
    position: Option<String>,
    as_json: bool,
) -> Result<()> {
    let store = RosterStore::new();
    store.seed_data()?;

    let mut chart = store.get_full_depth_chart(sport_id, team_id);
    if let Some(position) = position {
        chart.retain(|name, _| *name == position);
    }

    if as_json {
        println!("{}", serde_json::to_string_pretty(&chart)?);
    } else if chart.is_empty() {
        println!("No depth chart for sport {} team {}", sport_id, team_id);
    } else {
        print!("{}", render_depth_chart(&chart));
    }

    Ok(())
}

/// One line per position: `QB: #12 Tom Brady, #2 Kyle Trask`
pub fn render_depth_chart(chart: &DepthChart) -> String {
    chart
        .iter()
        .map(|(position, players)| {
            let names = players
                .iter()
                .map(|p| format!("#{} {}", p.number, p.name))
                .collect::<Vec<_>>()
                .join(", ");
            format!("{}: {}\n", position, names)
        })
        .collect()
}
