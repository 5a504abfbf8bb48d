//! Route handlers translating HTTP requests into roster store calls.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};
use tracing::debug;

use super::{
    requests::{BackupsQuery, PlayerRequest},
    AppState,
};
use crate::{
    cli::types::{SportId, TeamId},
    core::{BackupsCacheKey, DepthChartCacheKey},
    error::{DepthChartError, Result},
    roster::{DepthChart, Player},
};

type TeamPath = Path<(SportId, TeamId)>;

pub async fn add_player(
    State(state): State<AppState>,
    path: std::result::Result<TeamPath, PathRejection>,
    body: std::result::Result<Json<PlayerRequest>, JsonRejection>,
) -> Result<StatusCode> {
    let Path((sport_id, team_id)) = path?;
    let Json(request) = body?;

    let player = request.to_player(sport_id, team_id);
    state
        .store
        .add_player(sport_id, team_id, &request.position, player, request.rank)?;
    state.cache.invalidate_team(sport_id, team_id);

    Ok(StatusCode::OK)
}

pub async fn remove_player(
    State(state): State<AppState>,
    path: std::result::Result<TeamPath, PathRejection>,
    body: std::result::Result<Json<PlayerRequest>, JsonRejection>,
) -> Result<Json<Player>> {
    let Path((sport_id, team_id)) = path?;
    let Json(request) = body?;

    let player = request.to_player(sport_id, team_id);
    let removed = state
        .store
        .remove_player(sport_id, team_id, &request.position, &player)?;
    state.cache.invalidate_team(sport_id, team_id);

    Ok(Json(removed))
}

/// Backups of the player wearing `playerNumber` at `position`.
///
/// The player has to exist at that position; an unknown number is a 404
/// while a known last-ranked player yields an empty list.
pub async fn get_backups(
    State(state): State<AppState>,
    path: std::result::Result<TeamPath, PathRejection>,
    query: std::result::Result<Query<BackupsQuery>, QueryRejection>,
) -> Result<Json<Vec<Player>>> {
    let Path((sport_id, team_id)) = path?;
    let Query(query) = query?;

    let key = BackupsCacheKey {
        sport_id,
        team_id,
        position: query.position.clone(),
        number: query.player_number,
    };
    if let Some(backups) = state.cache.backups.get(&key) {
        debug!(sport = %sport_id, team = %team_id, position = %query.position, "backups cache hit");
        return Ok(Json(backups));
    }

    let generation = state.cache.generation(sport_id, team_id);
    let player = state
        .store
        .find_player(sport_id, team_id, &query.position, query.player_number)
        .ok_or_else(|| DepthChartError::NotFound {
            number: query.player_number,
            position: query.position.clone(),
        })?;

    let backups = state
        .store
        .get_backups(sport_id, team_id, &query.position, &player);
    state
        .cache
        .put_if_current(&state.cache.backups, generation, key, backups.clone());

    Ok(Json(backups))
}

pub async fn full_depth_chart(
    State(state): State<AppState>,
    path: std::result::Result<TeamPath, PathRejection>,
) -> Result<Json<DepthChart>> {
    let Path((sport_id, team_id)) = path?;

    let key = DepthChartCacheKey { sport_id, team_id };
    if let Some(chart) = state.cache.depth_chart.get(&key) {
        debug!(sport = %sport_id, team = %team_id, "depth chart cache hit");
        return Ok(Json(chart));
    }

    let generation = state.cache.generation(sport_id, team_id);
    let chart = state.store.get_full_depth_chart(sport_id, team_id);
    state
        .cache
        .put_if_current(&state.cache.depth_chart, generation, key, chart.clone());

    Ok(Json(chart))
}

pub async fn seed_data(State(state): State<AppState>) -> Result<&'static str> {
    let result = state.store.seed_data();
    // A conflicting seed may still have added some players before failing
    state.cache.clear_all();
    result?;

    Ok("Depth chart seeded successfully.")
}

pub async fn health(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": "depth-chart",
        "cache": state.cache.memory_stats(),
    }))
}
