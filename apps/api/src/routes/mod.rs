pub mod health;

use axum::{
    extract::{DefaultBodyLimit, OriginalUri},
    routing::{get, post},
    Router,
};

use crate::errors::AppError;
use crate::render::handlers;
use crate::state::AppState;

async fn not_found(OriginalUri(uri): OriginalUri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_body_bytes;
    Router::new()
        .route("/health", get(health::health_handler))
        // Resume rendering
        .route("/api/v1/resumes/pdf", post(handlers::handle_render_pdf))
        .route(
            "/api/v1/resumes/templates",
            get(handlers::handle_list_templates),
        )
        .fallback(not_found)
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
