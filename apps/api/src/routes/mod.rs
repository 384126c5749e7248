pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::matching;
use crate::parsing;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/v1/resume/parse",
            post(parsing::handlers::handle_parse_resume),
        )
        .route(
            "/api/v1/job-description/parse",
            post(parsing::handlers::handle_parse_job_description),
        )
        .route("/api/v1/match", post(matching::handlers::handle_match))
        .with_state(state)
}
