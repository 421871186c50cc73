use anyhow::Result;
use log::info;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use crate::api::handlers::AppState;
use crate::api::routes::create_router;
use crate::config::settings::AppConfig;
use crate::services::report::ReportService;

pub struct ServerService {
    port: u16,
    config: AppConfig,
    reports: ReportService,
}

impl ServerService {
    pub fn new(port: u16, config: AppConfig, reports: ReportService) -> Self {
        Self { port, config, reports }
    }

    pub async fn run(self) -> Result<()> {
        info!("Serving season reports from {}", self.reports.source().describe());

        let state = Arc::new(AppState {
            reports: self.reports,
            config: self.config,
        });

        let app = create_router(state).layer(CorsLayer::permissive());

        let addr = SocketAddr::from(([0, 0, 0, 0], self.port));
        info!("Server listening on {}", addr);

        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, app).await?;

        Ok(())
    }
}
