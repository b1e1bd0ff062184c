use anyhow::{Context, Result};
use log::info;
use std::net::SocketAddr;
use std::sync::Arc;

use crate::api::handlers::AppState;
use crate::api::routes::create_router;
use crate::config::AppConfig;
use crate::services::statistics::StatisticsService;

pub struct ServerService {
    port: u16,
    config: AppConfig,
}

impl ServerService {
    pub fn new(port: u16, config: AppConfig) -> Self {
        Self { port, config }
    }

    pub async fn run(&self) -> Result<()> {
        let service = StatisticsService::new(&self.config)
            .context("Failed to create statistics service")?;

        let state = Arc::new(AppState { service });
        let app = create_router(state);

        let addr = SocketAddr::from(([0, 0, 0, 0], self.port));
        info!("Server listening on {}", addr);
        info!("Provider: {}", self.config.provider.base_url);

        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .with_context(|| format!("Failed to bind {}", addr))?;
        axum::serve(listener, app).await?;

        Ok(())
    }
}
