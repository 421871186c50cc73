use serde::Deserialize;

use crate::config::settings::AppConfig;
use crate::services::report::ReportService;

pub mod seasons;

pub struct AppState {
    pub reports: ReportService,
    pub config: AppConfig,
}

#[derive(Deserialize)]
pub struct TeamParams {
    pub team: Option<String>,
}

#[derive(Deserialize)]
pub struct LeaderParams {
    pub min_games: Option<u32>,
    pub top_n: Option<usize>,
}
