pub mod health;

use axum::{
    http::Uri,
    routing::{get, post},
    Router,
};

use crate::errors::AppError;
use crate::screening::handlers;
use crate::state::AppState;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {uri}"))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Screening session API
        .route("/api/v1/session", get(handlers::handle_get_session))
        .route(
            "/api/v1/session/messages",
            post(handlers::handle_send_message),
        )
        .route("/api/v1/session/profile", get(handlers::handle_get_profile))
        .route(
            "/api/v1/session/reset",
            post(handlers::handle_reset_session),
        )
        .fallback(not_found)
        .with_state(state)
}
