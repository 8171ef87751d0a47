pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::evaluation::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::service_info_handler))
        .route("/health", get(health::health_handler))
        .route("/evaluate-resume", post(handlers::handle_evaluate_resume))
        .with_state(state)
}
