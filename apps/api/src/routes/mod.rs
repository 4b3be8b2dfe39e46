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
        // Generation API
        .route(
            "/api/v1/posts/generate",
            post(handlers::handle_generate_batch),
        )
        .route(
            "/api/v1/posts/generate/single",
            post(handlers::handle_generate_single),
        )
        .route(
            "/api/v1/posts/:id/improve",
            post(handlers::handle_improve_post),
        )
        .route(
            "/api/v1/posts/:id/feedback",
            get(handlers::handle_list_feedback),
        )
        .with_state(state)
}
