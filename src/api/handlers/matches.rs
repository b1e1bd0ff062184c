use axum::{extract::State, response::Json};
use log::info;
use std::sync::Arc;

use super::AppState;
use crate::api::models::StatisticsResponse;
use crate::errors::AppResult;

/// Most recent matches across all tournaments, grouped by tournament
pub async fn get_matches(State(state): State<Arc<AppState>>) -> AppResult<Json<StatisticsResponse>> {
    info!("Collecting statistics for /matches");

    let statistics = state.service.collect_statistics().await?;

    info!("Serving {} tournament group(s)", statistics.len());
    Ok(Json(StatisticsResponse { statistics }))
}
