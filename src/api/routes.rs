use axum::{routing::get, Router};
use std::sync::Arc;

use crate::api::handlers::{
    seasons::{
        get_group_standings, get_highs, get_leaders, get_players, get_season, get_standings,
        get_teams,
    },
    AppState,
};

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/seasons/:season", get(get_season))
        .route("/api/seasons/:season/players", get(get_players))
        .route("/api/seasons/:season/leaders/:stat", get(get_leaders))
        .route("/api/seasons/:season/standings", get(get_standings))
        .route("/api/seasons/:season/standings/groups", get(get_group_standings))
        .route("/api/seasons/:season/highs", get(get_highs))
        .route("/api/seasons/:season/teams", get(get_teams))
        .with_state(state)
}
