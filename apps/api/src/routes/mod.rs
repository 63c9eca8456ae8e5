pub mod health;
pub mod upload;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/upload-resume", post(upload::handle_upload_resume))
        .layer(DefaultBodyLimit::max(state.config.max_upload_bytes))
        .with_state(state)
}
