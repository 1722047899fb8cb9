pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::generation::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Resume API
        .route("/api/v1/resumes/parse", post(handlers::handle_parse))
        .route("/api/v1/resumes/generate", post(handlers::handle_generate))
        .route(
            "/api/v1/resumes/generate/records",
            post(handlers::handle_generate_records),
        )
        .route("/api/v1/resumes/extract", post(handlers::handle_extract))
        .with_state(state)
}
