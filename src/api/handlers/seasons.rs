use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use log::error;
use std::sync::Arc;

use crate::api::models::{LeadersResponse, SeasonOverview, TeamTablesResponse};
use crate::config::{default_columns, get_leaderboards};
use crate::services::report::SeasonReport;
use crate::stats::Stat;
use super::{AppState, LeaderParams, TeamParams};

fn report_error(e: anyhow::Error) -> Response {
    error!("Report failed: {:#}", e);
    (StatusCode::INTERNAL_SERVER_ERROR, format!("Report Error: {}", e)).into_response()
}

fn load_report(state: &AppState, season: u32) -> Result<SeasonReport, Response> {
    state.reports.season_report(season).map_err(report_error)
}

pub async fn get_season(
    State(state): State<Arc<AppState>>,
    Path(season): Path<u32>,
) -> impl IntoResponse {
    let report = match load_report(&state, season) {
        Ok(report) => report,
        Err(response) => return response,
    };

    let games = report.standings.iter().map(|r| r.games_played).sum::<u32>() / 2;
    Json(SeasonOverview {
        season,
        last_updated: report.last_updated,
        players: report.players.len(),
        teams: report.standings.len(),
        games,
    })
    .into_response()
}

pub async fn get_players(
    State(state): State<Arc<AppState>>,
    Path(season): Path<u32>,
    Query(params): Query<TeamParams>,
) -> impl IntoResponse {
    match params.team {
        Some(team) => match state.reports.team_report(season, &team) {
            Ok(report) => Json(report.players).into_response(),
            Err(e) => report_error(e),
        },
        None => match load_report(&state, season) {
            Ok(report) => Json(report.players).into_response(),
            Err(response) => response,
        },
    }
}

pub async fn get_leaders(
    State(state): State<Arc<AppState>>,
    Path((season, stat)): Path<(u32, String)>,
    Query(params): Query<LeaderParams>,
) -> impl IntoResponse {
    let Some(stat) = Stat::parse(&stat) else {
        return (StatusCode::BAD_REQUEST, format!("Unknown stat: {}", stat)).into_response();
    };
    let min_games = params.min_games.unwrap_or(state.config.leaders.min_games);
    let top_n = params.top_n.unwrap_or(state.config.leaders.top_n).clamp(1, 100);

    let report = match load_report(&state, season) {
        Ok(report) => report,
        Err(response) => return response,
    };

    let caption = get_leaderboards()
        .into_iter()
        .find(|b| b.stat == stat)
        .map(|b| b.caption.to_string());

    Json(LeadersResponse {
        caption,
        min_games,
        leaderboard: report.leaders(stat, min_games, &default_columns(stat), top_n),
    })
    .into_response()
}

pub async fn get_standings(
    State(state): State<Arc<AppState>>,
    Path(season): Path<u32>,
) -> impl IntoResponse {
    match load_report(&state, season) {
        Ok(report) => Json(report.standings).into_response(),
        Err(response) => response,
    }
}

pub async fn get_group_standings(
    State(state): State<Arc<AppState>>,
    Path(season): Path<u32>,
) -> impl IntoResponse {
    match load_report(&state, season) {
        Ok(report) => Json(report.groups).into_response(),
        Err(response) => response,
    }
}

pub async fn get_highs(
    State(state): State<Arc<AppState>>,
    Path(season): Path<u32>,
    Query(params): Query<TeamParams>,
) -> impl IntoResponse {
    match params.team {
        Some(team) => match state.reports.team_report(season, &team) {
            Ok(report) => Json(report.highs).into_response(),
            Err(e) => report_error(e),
        },
        None => match load_report(&state, season) {
            Ok(report) => Json(report.highs).into_response(),
            Err(response) => response,
        },
    }
}

pub async fn get_teams(
    State(state): State<Arc<AppState>>,
    Path(season): Path<u32>,
) -> impl IntoResponse {
    match load_report(&state, season) {
        Ok(report) => Json(TeamTablesResponse {
            totals: report.team_totals,
            opponents: report.opponent_totals,
            differential: report.differential,
        })
        .into_response(),
        Err(response) => response,
    }
}
