//! Axum route handlers for job search and search settings.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::errors::AppError;
use crate::matching::listing::ScoredJob;
use crate::search::criteria::SearchCriteria;
use crate::search::service::run_search;
use crate::search::settings::{SettingsUpdate, SettingsView};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    #[serde(flatten)]
    pub criteria: SearchCriteria,
    /// Searches sharing a session replace each other; the newest wins.
    #[serde(default)]
    pub session_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub jobs: Vec<ScoredJob>,
    pub total: usize,
    pub message: String,
    /// Advisory; echoed for display, not enforced.
    pub daily_limit: u32,
}

/// POST /api/v1/jobs/search
///
/// Fetches listings from every enabled platform, scores them against the
/// submitted skills, and returns them sorted by match score.
pub async fn handle_search(
    State(state): State<AppState>,
    Json(request): Json<SearchRequest>,
) -> Result<Json<SearchResponse>, AppError> {
    let SearchRequest {
        criteria,
        session_id,
    } = request;
    criteria.validate()?;

    let settings = state.settings.read().await.clone();
    let daily_limit = settings.daily_limit;

    let providers = state.providers.clone();
    let scorer = state.scorer.clone();
    debug!(
        "Starting search for '{}' in '{}' (session: {})",
        criteria.role,
        criteria.location,
        session_id.as_deref().unwrap_or("none")
    );
    let search = async move {
        run_search(&providers, scorer.as_ref(), &criteria, &settings).await
    };

    let jobs = state.in_flight.run(session_id.as_deref(), search).await??;

    info!("Search returned {} jobs", jobs.len());

    Ok(Json(SearchResponse {
        total: jobs.len(),
        message: format!("Found {} matching jobs!", jobs.len()),
        jobs,
        daily_limit,
    }))
}

/// GET /api/v1/settings
pub async fn handle_get_settings(State(state): State<AppState>) -> Json<SettingsView> {
    Json(state.settings.read().await.view())
}

/// PUT /api/v1/settings
pub async fn handle_put_settings(
    State(state): State<AppState>,
    Json(update): Json<SettingsUpdate>,
) -> Result<Json<SettingsView>, AppError> {
    let mut settings = state.settings.write().await;
    settings.apply(update)?;
    info!(
        "Settings saved: daily_limit={}, platforms={:?}",
        settings.daily_limit, settings.enabled_platforms
    );
    Ok(Json(settings.view()))
}
