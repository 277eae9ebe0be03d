pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::audit::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(health::health_handler))
        .route(
            "/internal/improve-prompt",
            post(handlers::handle_improve_prompt),
        )
        .with_state(state)
}
