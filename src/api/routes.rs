use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use crate::api::handlers::{matches::get_matches, AppState};

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/matches", get(get_matches))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
