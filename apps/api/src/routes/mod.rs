pub mod health;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::state::AppState;
use crate::wizard::handlers;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/wizards", post(handlers::handle_create))
        .route(
            "/api/v1/wizards/:id",
            get(handlers::handle_get_view).delete(handlers::handle_discard),
        )
        .route(
            "/api/v1/wizards/:id/fields/:field",
            put(handlers::handle_set_field),
        )
        .route(
            "/api/v1/wizards/:id/lists/:field",
            post(handlers::handle_append_list_entry),
        )
        .route(
            "/api/v1/wizards/:id/lists/:field/:index",
            put(handlers::handle_set_list_entry),
        )
        .route("/api/v1/wizards/:id/advance", post(handlers::handle_advance))
        .route("/api/v1/wizards/:id/retreat", post(handlers::handle_retreat))
        .route(
            "/api/v1/wizards/:id/finalize",
            post(handlers::handle_finalize),
        )
        .route("/api/v1/wizards/:id/reset", post(handlers::handle_reset))
        .route(
            "/api/v1/wizards/:id/resume",
            get(handlers::handle_resume_text),
        )
        .with_state(state)
}
