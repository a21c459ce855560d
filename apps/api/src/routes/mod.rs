pub mod health;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::profile::handlers as profile;
use crate::search::handlers as search;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Job search
        .route("/api/v1/jobs/search", post(search::handle_search))
        .route(
            "/api/v1/settings",
            get(search::handle_get_settings).put(search::handle_put_settings),
        )
        // Onboarding profile
        .route("/api/v1/profile", get(profile::handle_get_profile))
        .route("/api/v1/profile/personal", put(profile::handle_save_personal))
        .route(
            "/api/v1/profile/professional",
            put(profile::handle_save_professional),
        )
        .route("/api/v1/profile/skills", put(profile::handle_save_skills))
        .route(
            "/api/v1/profile/preferences",
            put(profile::handle_save_preferences),
        )
        .with_state(state)
}
